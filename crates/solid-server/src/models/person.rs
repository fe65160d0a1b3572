//! Person / Employee response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use solid::{Employee, Person, PersonInfo};

/// Stored Person
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    /// Storage-assigned identity
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub address: Option<String>,
}

/// Stored Employee
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub address: Option<String>,
    pub employee_id: String,
    pub salary: f64,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id(),
            name: person.name().to_string(),
            age: person.age(),
            address: person.address().map(str::to_string),
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let person = employee.person();
        Self {
            id: employee.id(),
            name: person.name().to_string(),
            age: person.age(),
            address: person.address().map(str::to_string),
            employee_id: employee.employee_id().to_string(),
            salary: employee.salary(),
        }
    }
}
