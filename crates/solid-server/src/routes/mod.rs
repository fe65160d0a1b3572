//! API Routes
//!
//! - /api/persons - Person creation and lookup
//! - /api/employees - Employee creation and lookup
//! - /swagger-ui - OpenAPI documentation

use axum::http::StatusCode;
use solid::DomainError;

pub mod employee;
pub mod person;
pub mod swagger;

/// Map a domain error onto a transport-level failure
pub(crate) fn error_response(e: DomainError) -> (StatusCode, String) {
    match e {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
        DomainError::Repository(_) => {
            tracing::error!("Storage failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
