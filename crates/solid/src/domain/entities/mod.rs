//! Domain Entities
//!
//! Pure domain records without infrastructure dependencies.
//! - Person: general record (identity assigned by storage)
//! - Employee: Person plus employment data, by composition

mod employee;
mod person;

pub use employee::*;
pub use person::*;
