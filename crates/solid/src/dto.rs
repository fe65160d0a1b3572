//! Transfer Objects
//!
//! Inbound payload shapes, decoupled from the stored record shapes. They
//! never carry identity.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Create Person request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PersonRequest {
    pub name: String,
    pub age: i32,
    pub address: String,
}

/// Create Employee request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmployeeRequest {
    pub name: String,
    pub age: i32,
    pub address: String,
    pub employee_id: String,
    #[serde(default)]
    pub salary: f64,
}

impl PersonRequest {
    /// Required-field checks applied at the boundary
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name)?;
        require_age(self.age)?;
        require_text("address", &self.address)
    }
}

impl EmployeeRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name)?;
        require_age(self.age)?;
        require_text("address", &self.address)?;
        require_text("employee_id", &self.employee_id)?;

        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(DomainError::validation(
                "salary must be a non-negative number",
            ));
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} must not be blank")));
    }
    Ok(())
}

fn require_age(age: i32) -> Result<(), DomainError> {
    if age < 0 {
        return Err(DomainError::validation("age must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, age: i32, address: &str) -> PersonRequest {
        PersonRequest {
            name: name.to_string(),
            age,
            address: address.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Alice", 30, "—").validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = request("   ", 30, "—").validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: name must not be blank");
    }

    #[test]
    fn test_blank_address_rejected() {
        assert!(request("Alice", 30, "").validate().is_err());
    }

    #[test]
    fn test_negative_age_rejected() {
        assert!(request("Alice", -1, "—").validate().is_err());
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let parsed: Result<PersonRequest, _> =
            serde_json::from_value(serde_json::json!({"name": "Alice", "age": 30}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_employee_salary_defaults_to_zero() {
        let parsed: EmployeeRequest = serde_json::from_value(serde_json::json!({
            "name": "Bob",
            "age": 25,
            "address": "Elm St 2",
            "employee_id": "EMP123"
        }))
        .unwrap();
        assert_eq!(parsed.salary, 0.0);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_employee_negative_salary_rejected() {
        let req = EmployeeRequest {
            name: "Bob".to_string(),
            age: 25,
            address: "Elm St 2".to_string(),
            employee_id: "EMP123".to_string(),
            salary: -10.0,
        };
        assert!(req.validate().is_err());
    }
}
