//! OpenAPI document for the demo API.

use utoipa::OpenApi;

use super::handlers;

/// OpenAPI document covering the JSON endpoints.
///
/// Served at `/api-docs/openapi.json` and rendered by Swagger UI
/// (`/docs`) and Redoc (`/redoc`).
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rust Demo API",
        description = "A modern Rust Axum application showcasing DevOps best practices"
    ),
    paths(
        handlers::app_info,
        handlers::health,
        handlers::service_status,
        handlers::metrics_summary,
    ),
    components(schemas(
        handlers::AppInfo,
        handlers::HealthStatus,
        handlers::ServiceStatus,
        handlers::MetricsSnapshot,
        handlers::NotFoundBody,
    )),
    tags(
        (name = "info", description = "Service description"),
        (name = "monitoring", description = "Health, status, and metrics")
    )
)]
pub struct ApiDoc;
