//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod employee_repository;
mod person_repository;

pub use employee_repository::*;
pub use person_repository::*;
