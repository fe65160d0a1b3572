//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the mapper and repositories.

mod employee_service;
mod person_service;

pub use employee_service::EmployeeService;
pub use person_service::PersonService;
