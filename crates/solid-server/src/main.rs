use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::{PgEmployeeRepository, PgPersonRepository};
use application::{EmployeeService, PersonService};

/// Type aliases for application services with concrete repository implementations
pub type AppPersonService = PersonService<PgPersonRepository>;
pub type AppEmployeeService = EmployeeService<PgEmployeeRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub person_service: Arc<AppPersonService>,
    pub employee_service: Arc<AppEmployeeService>,
}

impl AppState {
    /// Wire repositories and services onto one pool
    pub fn from_pool(pool: PgPool) -> Self {
        let person_repo = Arc::new(PgPersonRepository::new(pool.clone()));
        let employee_repo = Arc::new(PgEmployeeRepository::new(pool));

        Self {
            person_service: Arc::new(PersonService::new(person_repo)),
            employee_service: Arc::new(EmployeeService::new(employee_repo)),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "SOLID example API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full application router: health, docs and the record routes
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::person::router())
        .merge(routes::employee::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Log the substitutability demonstration, one entry per introduction
fn log_startup_demo() {
    for entry in solid::demo::substitutability_transcript() {
        for line in entry.output.lines() {
            tracing::info!(subject = entry.label, "{}", line);
        }
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("SOLID example API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    match secrets.get("SOLID_STARTUP_DEMO").as_deref() {
        Some("true") => log_startup_demo(),
        Some(_) => {}
        None => tracing::warn!("No SOLID_STARTUP_DEMO set - startup demo disabled"),
    }

    let router = build_router(AppState::from_pool(pool));

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("SOLID example API ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};

    use crate::routes::test_support::{offline_router, send};

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(offline_router(), request).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let request = Request::builder()
            .uri("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(offline_router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/api/persons/create"));
    }
}
