//! API Data Models
//!
//! Request payloads live in the domain crate (`solid::dto`); responses are
//! defined here.

mod person;

pub use person::*;
pub use solid::{EmployeeRequest, PersonRequest};
