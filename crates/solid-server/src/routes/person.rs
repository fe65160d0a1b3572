//! Person Routes
//!
//! HTTP handlers that delegate to PersonService. Request validation happens
//! here, before the service is invoked.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::error_response;
use crate::models::{PersonRequest, PersonResponse};
use crate::AppState;

/// Create new Person
#[utoipa::path(
    post,
    path = "/api/persons/create",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Person created successfully", body = PersonResponse),
        (status = 400, description = "Validation failed"),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Person"
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<PersonRequest>,
) -> Result<Json<PersonResponse>, (StatusCode, String)> {
    payload.validate().map_err(error_response)?;

    let person = state
        .person_service
        .create_person(payload)
        .await
        .map_err(error_response)?;

    Ok(Json(person.into()))
}

/// Get Person by ID
#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    params(
        ("id" = i64, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person found", body = PersonResponse),
        (status = 404, description = "Person not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Person"
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PersonResponse>, (StatusCode, String)> {
    let person = state
        .person_service
        .get_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Person not found".to_string()))?;

    Ok(Json(person.into()))
}

/// List all Persons
#[utoipa::path(
    get,
    path = "/api/persons",
    responses(
        (status = 200, description = "List of all Persons", body = Vec<PersonResponse>),
        (status = 500, description = "Storage failure")
    ),
    tag = "Person"
)]
pub async fn list_persons(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, (StatusCode, String)> {
    let persons = state
        .person_service
        .list_all()
        .await
        .map_err(error_response)?;

    Ok(Json(persons.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/persons", get(list_persons))
        .route("/api/persons/create", post(create_person))
        .route("/api/persons/:id", get(get_person))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use serde_json::json;

    use super::*;
    use crate::routes::test_support::{offline_router, post_json, send};

    #[tokio::test]
    async fn test_blank_name_rejected_before_storage() {
        let (status, body) = send(
            offline_router(),
            post_json(
                "/api/persons/create",
                json!({"name": "", "age": 30, "address": "—"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("name must not be blank"));
    }

    #[tokio::test]
    async fn test_missing_field_rejected_by_extractor() {
        let (status, _) = send(
            offline_router(),
            post_json("/api/persons/create", json!({"name": "Alice", "age": 30})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let (status, body) = send(
            offline_router(),
            post_json(
                "/api/persons/create",
                json!({"name": "Alice", "age": 30, "address": "—"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Repository error"));
    }

    #[tokio::test]
    async fn test_non_numeric_id_rejected() {
        let request = Request::builder()
            .uri("/api/persons/abc")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(offline_router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
