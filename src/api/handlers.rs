//! HTTP API handlers.

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::{metrics, runtime};

/// Service name reported by `/api/status`.
pub const SERVICE_NAME: &str = "rust-demo-app";

/// Paths listed in the 404 body.
pub const AVAILABLE_ENDPOINTS: [&str; 5] =
    ["/", "/health", "/api/status", "/api/metrics", "/docs"];

/// Placeholder value for measurements this demo does not take.
const SIMULATED: &str = "simulation";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Instant the process started. Uptime is derived from this, so it
    /// is monotonically non-decreasing across requests.
    pub started_at: Instant,
    /// Deployment environment label.
    pub environment: String,
}

impl AppState {
    /// Create new app state, capturing the process start instant.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            started_at: Instant::now(),
            environment: environment.into(),
        }
    }

    /// Seconds elapsed since process start.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("development")
    }
}

/// App info response.
#[derive(Debug, Serialize, ToSchema)]
pub struct AppInfo {
    /// Welcome message.
    pub message: String,
    /// Service version.
    pub version: String,
    /// Feature highlights.
    pub features: Vec<String>,
    /// Endpoint name to path mapping.
    pub endpoints: EndpointMap,
    /// Technologies the service is built with.
    pub tech_stack: Vec<String>,
}

/// Named endpoint paths in the app info response.
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointMap {
    /// Interactive API documentation.
    pub docs: String,
    /// Health check.
    pub health: String,
    /// Service status.
    pub status: String,
    /// Uptime metrics.
    pub metrics: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Status: "healthy".
    pub status: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime: f64,
    /// Deployment environment label.
    pub environment: String,
    /// Toolchain version the binary was built with.
    pub rust_version: String,
}

/// Service status response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Service name.
    pub service: String,
    /// Status: "running".
    pub status: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    /// Service version.
    pub version: String,
    /// Toolchain version as major.minor.patch.
    pub rust_version: String,
    /// Host platform description.
    pub platform: String,
}

/// Uptime metrics response.
///
/// Memory and request-count fields are hardcoded placeholders, not real
/// measurements.
#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsSnapshot {
    /// Seconds since process start.
    pub uptime_seconds: f64,
    /// Uptime broken into hours, minutes, and seconds.
    pub uptime_human: String,
    /// Placeholder memory figures.
    pub memory_info: MemoryInfo,
    /// Placeholder request count.
    pub requests_total: String,
    /// Toolchain and platform details.
    pub rust_info: RuntimeInfo,
}

/// Placeholder memory figures.
#[derive(Debug, Serialize, ToSchema)]
pub struct MemoryInfo {
    /// Available memory (placeholder).
    pub available: String,
    /// Used memory (placeholder).
    pub used: String,
}

/// Toolchain and platform details.
#[derive(Debug, Serialize, ToSchema)]
pub struct RuntimeInfo {
    /// Full toolchain version line.
    pub version: String,
    /// Host platform description.
    pub platform: String,
    /// CPU architecture.
    pub architecture: String,
}

/// 404 response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundBody {
    /// Error details.
    pub detail: ErrorDetail,
}

/// Details of an unmatched route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error message.
    pub error: String,
    /// Paths the service does serve.
    pub available_endpoints: Vec<String>,
    /// Where to find the API documentation.
    pub documentation: String,
}

/// App info handler - describes the service and its endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = "info",
    responses(
        (status = 200, description = "Service description", body = AppInfo)
    )
)]
pub async fn app_info() -> Json<AppInfo> {
    let _timer = metrics::RequestTimer::new("root");

    Json(AppInfo {
        message: "🚀 Professional Rust CI/CD Demo API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: [
            "✅ Automated Testing with cargo test",
            "🐳 Docker Containerization",
            "🔍 Code Quality with rustfmt & Clippy",
            "🛡️ Security Scanning with cargo-audit",
            "📊 Health Monitoring",
            "📖 Auto-generated API Documentation",
            "🚀 Axum Async Performance",
        ]
        .iter()
        .map(ToString::to_string)
        .collect(),
        endpoints: EndpointMap {
            docs: "/docs".to_string(),
            health: "/health".to_string(),
            status: "/api/status".to_string(),
            metrics: "/api/metrics".to_string(),
        },
        tech_stack: [
            "Rust 2021",
            "Axum",
            "Tokio",
            "Serde",
            "Docker",
            "GitHub Actions",
        ]
        .iter()
        .map(ToString::to_string)
        .collect(),
    })
}

/// Health check handler - reports uptime and environment.
#[utoipa::path(
    get,
    path = "/health",
    tag = "monitoring",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let _timer = metrics::RequestTimer::new("health");

    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: now_rfc3339(),
        uptime: state.uptime_seconds(),
        environment: state.environment.clone(),
        rust_version: runtime::rust_version().to_string(),
    })
}

/// Status handler - reports service, toolchain, and platform details.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "monitoring",
    responses(
        (status = 200, description = "Service status", body = ServiceStatus)
    )
)]
pub async fn service_status() -> Json<ServiceStatus> {
    let _timer = metrics::RequestTimer::new("status");

    Json(ServiceStatus {
        service: SERVICE_NAME.to_string(),
        status: "running".to_string(),
        timestamp: now_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rust_version: runtime::rust_version_semver().to_string(),
        platform: runtime::platform(),
    })
}

/// Metrics handler - reports uptime plus placeholder measurements.
#[utoipa::path(
    get,
    path = "/api/metrics",
    tag = "monitoring",
    responses(
        (status = 200, description = "Uptime metrics", body = MetricsSnapshot)
    )
)]
pub async fn metrics_summary(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let _timer = metrics::RequestTimer::new("metrics");

    let uptime_seconds = state.uptime_seconds();

    Json(MetricsSnapshot {
        uptime_seconds,
        uptime_human: format_uptime(uptime_seconds as u64),
        memory_info: MemoryInfo {
            available: SIMULATED.to_string(),
            used: SIMULATED.to_string(),
        },
        requests_total: SIMULATED.to_string(),
        rust_info: RuntimeInfo {
            version: runtime::rust_version().to_string(),
            platform: runtime::platform(),
            architecture: runtime::architecture().to_string(),
        },
    })
}

/// Fallback handler - 404 with the list of known endpoints.
pub async fn not_found() -> impl IntoResponse {
    metrics::inc_not_found();

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            detail: ErrorDetail {
                error: "Endpoint not found".to_string(),
                available_endpoints: AVAILABLE_ENDPOINTS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                documentation: "/docs".to_string(),
            },
        }),
    )
}

/// Current UTC time as an RFC 3339 string.
fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// Break whole seconds into `"{h}h {m}m {s}s"`.
fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn uptime_is_non_negative_and_increases() {
        let state = AppState::default();
        let first = state.uptime_seconds();
        assert!(first >= 0.0);

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(state.uptime_seconds() > first);
    }

    #[test]
    fn app_state_keeps_environment() {
        let state = AppState::new("production");
        assert_eq!(state.environment, "production");
        assert_eq!(AppState::default().environment, "development");
    }

    #[test]
    fn format_uptime_zero() {
        assert_eq!(format_uptime(0), "0h 0m 0s");
    }

    #[test]
    fn format_uptime_rolls_over_components() {
        assert_eq!(format_uptime(3661), "1h 1m 1s");
        assert_eq!(format_uptime(7325), "2h 2m 5s");
        assert_eq!(format_uptime(86_399), "23h 59m 59s");
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let ts = now_rfc3339();
        assert!(OffsetDateTime::parse(&ts, &Rfc3339).is_ok());
    }

    #[test]
    fn advertised_endpoints_match_routes() {
        assert_eq!(
            AVAILABLE_ENDPOINTS,
            ["/", "/health", "/api/status", "/api/metrics", "/docs"]
        );
    }
}
