//! PostgreSQL Repository Implementations

mod employee_repository;
mod person_repository;

pub use employee_repository::PgEmployeeRepository;
pub use person_repository::PgPersonRepository;
