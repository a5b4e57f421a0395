//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{
    app_info, health, metrics_summary, not_found, service_status, AppState,
};

/// Create the API router.
///
/// Unmatched paths hit the 404 fallback; the doc UIs are merged in as
/// real routes so they are not shadowed by it.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(app_info))
        .route("/health", get(health))
        .route("/api/status", get(service_status))
        .route("/api/metrics", get(metrics_summary))
        .fallback(not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn root_endpoint_returns_ok() {
        let app = create_router(AppState::default());

        let response = app.oneshot(request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(AppState::default());

        let response = app.oneshot(request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn status_endpoint_returns_ok() {
        let app = create_router(AppState::default());

        let response = app.oneshot(request("/api/status")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_endpoint_returns_ok() {
        let app = create_router(AppState::default());

        let response = app.oneshot(request("/api/metrics")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_path_returns_not_found() {
        let app = create_router(AppState::default());

        let response = app.oneshot(request("/nonexistent-path")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = create_router(AppState::default());

        let response = app
            .oneshot(request("/api-docs/openapi.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn doc_uis_are_routed() {
        // The UI crates may answer the bare path directly or redirect to
        // the trailing-slash variant; either way it must not 404.
        for uri in ["/docs", "/redoc"] {
            let app = create_router(AppState::default());

            let response = app.oneshot(request(uri)).await.unwrap();
            let status = response.status();

            assert!(
                status.is_success() || status.is_redirection(),
                "{uri} returned {status}"
            );
        }
    }
}
