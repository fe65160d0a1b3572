//! Request -> record mapping
//!
//! Pure functions; no I/O and no shared state. Identity is never mapped.

use crate::domain::{Employee, Person};
use crate::dto::{EmployeeRequest, PersonRequest};

pub fn to_person(request: PersonRequest) -> Person {
    Person::new(request.name, request.age).with_address(request.address)
}

pub fn to_employee(request: EmployeeRequest) -> Employee {
    let person = Person::new(request.name, request.age).with_address(request.address);
    Employee::from_person(person, request.employee_id, request.salary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PersonInfo;

    #[test]
    fn test_to_person_copies_fields_without_identity() {
        let person = to_person(PersonRequest {
            name: "Alice".to_string(),
            age: 30,
            address: "—".to_string(),
        });

        assert_eq!(person.id(), None);
        assert_eq!(person.name(), "Alice");
        assert_eq!(person.age(), 30);
        assert_eq!(person.address(), Some("—"));
    }

    #[test]
    fn test_to_employee() {
        let employee = to_employee(EmployeeRequest {
            name: "Bob".to_string(),
            age: 25,
            address: "Elm St 2".to_string(),
            employee_id: "EMP123".to_string(),
            salary: 3100.0,
        });

        assert_eq!(employee.id(), None);
        assert_eq!(employee.full_name(), "Bob");
        assert_eq!(employee.person().address(), Some("Elm St 2"));
        assert_eq!(employee.employee_id(), "EMP123");
        assert_eq!(employee.salary(), 3100.0);
    }
}
