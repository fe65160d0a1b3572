//! Employee - Person plus employment data

use serde::Serialize;

use crate::domain::{
    capabilities::{Compensable, PersonInfo},
    entities::{Person, PersonId},
    errors::DomainError,
};

/// Employee - a Person with an employee identifier and salary
///
/// Extends Person by composition; the embedded record is never modified to
/// carry employee-only fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    #[serde(flatten)]
    person: Person,
    employee_id: String,
    salary: f64,
}

impl Employee {
    /// Create a new Employee with salary 0
    pub fn new(name: impl Into<String>, age: i32, employee_id: impl Into<String>) -> Self {
        Self::from_person(Person::new(name, age), employee_id, 0.0)
    }

    pub fn from_person(person: Person, employee_id: impl Into<String>, salary: f64) -> Self {
        Self {
            person,
            employee_id: employee_id.into(),
            salary,
        }
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = salary;
        self
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn id(&self) -> Option<PersonId> {
        self.person.id()
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn assign_id(&mut self, id: PersonId) -> Result<(), DomainError> {
        self.person.assign_id(id)
    }
}

impl PersonInfo for Employee {
    fn full_name(&self) -> &str {
        self.person.full_name()
    }

    fn age(&self) -> i32 {
        self.person.age()
    }

    /// Appends the employee identifier to the greeting.
    ///
    /// Callers holding only the general view get an extra line they did not
    /// ask for, so an Employee is not a drop-in replacement for a Person here.
    fn introduce(&self) -> String {
        format!(
            "{}\nEmployee ID: {}",
            self.person.introduce(),
            self.employee_id
        )
    }

    fn as_compensable(&self) -> Option<&dyn Compensable> {
        Some(self)
    }
}

impl Compensable for Employee {
    fn calculate_salary(&self) -> f64 {
        self.salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introduce_through_general_view_adds_employee_line() {
        let bob: Box<dyn PersonInfo> = Box::new(Employee::new("Bob", 25, "EMP123"));
        let intro = bob.introduce();
        let lines: Vec<&str> = intro.lines().collect();

        assert_eq!(
            lines,
            vec!["Hello, I am Bob and I am 25 years old.", "Employee ID: EMP123"]
        );
    }

    #[test]
    fn test_general_view_reads_name_and_age() {
        let bob = Employee::new("Bob", 25, "EMP123");
        let view: &dyn PersonInfo = &bob;
        assert_eq!(view.full_name(), "Bob");
        assert_eq!(view.age(), 25);
    }

    #[test]
    fn test_salary_capability() {
        let bob = Employee::new("Bob", 25, "EMP123").with_salary(4250.75);
        assert_eq!(bob.calculate_salary(), 4250.75);

        let view: &dyn PersonInfo = &bob;
        let salary = view.as_compensable().map(|c| c.calculate_salary());
        assert_eq!(salary, Some(4250.75));
    }

    #[test]
    fn test_new_employee_defaults() {
        let bob = Employee::new("Bob", 25, "EMP123");
        assert_eq!(bob.id(), None);
        assert_eq!(bob.salary(), 0.0);
        assert_eq!(bob.employee_id(), "EMP123");
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let person = Person::restore(3, "Bob".to_string(), 25, None);
        let bob = Employee::from_person(person, "EMP123", 1000.5);
        let json = serde_json::to_value(&bob).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Bob",
                "age": 25,
                "address": null,
                "employee_id": "EMP123",
                "salary": 1000.5
            })
        );
    }
}
