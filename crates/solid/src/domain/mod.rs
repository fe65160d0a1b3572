//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, capability traits and errors.

pub mod capabilities;
pub mod entities;
pub mod errors;

// Re-exports for convenience
pub use capabilities::*;
pub use entities::*;
pub use errors::*;
