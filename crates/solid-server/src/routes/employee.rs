//! Employee Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::error_response;
use crate::models::{EmployeeRequest, EmployeeResponse};
use crate::AppState;

/// Create new Employee
#[utoipa::path(
    post,
    path = "/api/employees/create",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee created successfully", body = EmployeeResponse),
        (status = 400, description = "Validation failed"),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, (StatusCode, String)> {
    payload.validate().map_err(error_response)?;

    let employee = state
        .employee_service
        .create_employee(payload)
        .await
        .map_err(error_response)?;

    Ok(Json(employee.into()))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id" = i64, Path, description = "Person ID of the Employee")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, (StatusCode, String)> {
    let employee = state
        .employee_service
        .get_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Employee not found".to_string()))?;

    Ok(Json(employee.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees/create", post(create_employee))
        .route("/api/employees/:id", get(get_employee))
}
