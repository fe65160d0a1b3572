//! Person - General record

use serde::Serialize;

use crate::domain::{capabilities::PersonInfo, errors::DomainError};

/// Storage-assigned identity
pub type PersonId = i64;

/// Person - name, age and optional address
///
/// Built in memory without identity; the repository assigns `id` exactly once
/// when the record is first persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: Option<PersonId>,
    name: String,
    age: i32,
    address: Option<String>,
}

impl Person {
    /// Create a new Person without identity or address
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Rebuild a record that storage already holds
    pub fn restore(id: PersonId, name: String, age: i32, address: Option<String>) -> Self {
        Self {
            id: Some(id),
            name,
            age,
            address,
        }
    }

    pub fn id(&self) -> Option<PersonId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Set the identity. Fails if one was already assigned.
    pub fn assign_id(&mut self, id: PersonId) -> Result<(), DomainError> {
        match self.id {
            Some(existing) => Err(DomainError::validation(format!(
                "identity already assigned ({existing})"
            ))),
            None => {
                self.id = Some(id);
                Ok(())
            }
        }
    }

    /// Name and age, one per line
    pub fn details(&self) -> String {
        format!("Name: {}\nAge: {}", self.name, self.age)
    }

    /// Name, age and address, one per line.
    ///
    /// Ties the printout to the address format as well, so it changes for
    /// more than one reason. Prefer `details`.
    pub fn details_with_address(&self) -> String {
        format!(
            "{}\nAddress: {}",
            self.details(),
            self.address.as_deref().unwrap_or("")
        )
    }

    /// Placeholder salary for a record that has no salary data.
    ///
    /// Always 0 and logs a diagnostic. Consumers that need a salary should
    /// go through `PersonInfo::as_compensable` instead.
    pub fn calculate_salary(&self) -> f64 {
        tracing::warn!(name = %self.name, "salary not implemented for a plain person");
        0.0
    }
}

impl PersonInfo for Person {
    fn full_name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> i32 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_has_no_identity() {
        let person = Person::new("Alice", 30);
        assert_eq!(person.id(), None);
        assert_eq!(person.address(), None);
    }

    #[test]
    fn test_introduce_uses_name_and_age() {
        let person = Person::new("Alice", 30);
        assert_eq!(
            person.introduce(),
            "Hello, I am Alice and I am 30 years old."
        );
    }

    #[test]
    fn test_identity_assigned_once() {
        let mut person = Person::new("Alice", 30);
        person.assign_id(7).unwrap();
        assert_eq!(person.id(), Some(7));

        let err = person.assign_id(8).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(person.id(), Some(7));
    }

    #[test]
    fn test_placeholder_salary_is_zero() {
        let person = Person::new("Alice", 30);
        assert_eq!(person.calculate_salary(), 0.0);
        assert!(person.as_compensable().is_none());
    }

    #[test]
    fn test_details() {
        let person = Person::new("Alice", 30).with_address("Main St 1");
        assert_eq!(person.details(), "Name: Alice\nAge: 30");
        assert_eq!(
            person.details_with_address(),
            "Name: Alice\nAge: 30\nAddress: Main St 1"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let person = Person::restore(1, "Alice".to_string(), 30, Some("—".to_string()));
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "age": 30, "address": "—"})
        );
    }
}
