//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{EmployeeRequest, EmployeeResponse, PersonRequest, PersonResponse};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Person endpoints
        super::person::create_person,
        super::person::get_person,
        super::person::list_persons,
        // Employee endpoints
        super::employee::create_employee,
        super::employee::get_employee,
    ),
    info(
        title = "SOLID Example API",
        version = "0.1.0",
        description = "Person/Employee records created through a mapper, a service and a repository port.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Person", description = "Person - creation and lookup"),
        (name = "Employee", description = "Employee - Person with employment data"),
    ),
    components(
        schemas(
            // Person
            PersonRequest,
            PersonResponse,
            // Employee
            EmployeeRequest,
            EmployeeResponse,
            // Health
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_creation_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/persons/create"));
        assert!(doc.paths.paths.contains_key("/api/employees/{id}"));
    }
}
