//! SOLID Example Domain Library
//!
//! Core domain types and interfaces for the Person/Employee example.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure records and behavior
//!   - `entities/`: Person, Employee
//!   - `capabilities`: General view (`PersonInfo`) and narrow capabilities (`Compensable`)
//!   - `errors`: Domain-specific error types
//!
//! - **Transfer objects** (`dto`): Request payloads decoupled from stored records
//! - **Mapper** (`mapper`): Pure request -> record translation
//! - **Ports** (`ports/`): Repository interfaces implemented by infrastructure
//!
//! # Usage
//!
//! ```rust,ignore
//! use solid::{mapper, PersonRequest, PersonRepository};
//!
//! let person = mapper::to_person(request);
//! let stored = repo.save(&person).await?;
//! ```

pub mod demo;
pub mod domain;
pub mod dto;
pub mod mapper;
pub mod ports;

// Re-export commonly used types
pub use domain::{Compensable, DomainError, Employee, Person, PersonId, PersonInfo};
pub use dto::{EmployeeRequest, PersonRequest};
pub use ports::{EmployeeRepository, PersonRepository};
