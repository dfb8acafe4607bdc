//! REST API Routes Module
//!
//! Assembles the playbook CRUD routes, health checks, the OpenAPI
//! document, permissive CORS for browser-based clients, and the static
//! single-page bundle with entry-document fallback for SPA routing.

pub mod health;
pub mod playbooks;

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use vetbook_storage::PlaybookStore;

/// Handler for /openapi.json endpoint.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Plain-text 404 for unmatched API paths.
async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "API endpoint not found")
}

/// Preflight responses answer 204 No Content.
///
/// The CORS layer resolves every OPTIONS request itself but stamps them
/// 200; this outermost middleware rewrites the status while keeping the
/// preflight headers intact.
async fn preflight_no_content(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let mut response = next.run(req).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

/// Build the CORS layer from ApiConfig.
///
/// With no configured origins all origins are allowed, matching the
/// permissive headers the playbook API has always sent.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if config.cors_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Build the complete application router.
///
/// Non-API requests serve the static single-page bundle; unknown paths
/// resolve to the entry document (SPA routing fallback) and a missing
/// bundle yields 404.
pub fn create_api_router(store: PlaybookStore, config: &ApiConfig) -> Router {
    let state = Arc::new(AppState::new(store));

    let api = Router::new()
        .nest("/playbooks", playbooks::create_router(state.clone()))
        .fallback(api_not_found);

    let spa = ServeDir::new(&config.static_dir)
        .not_found_service(ServeFile::new(config.static_dir.join("index.html")));

    Router::new()
        .nest("/api", api)
        .nest("/health", health::create_router(state))
        .route("/openapi.json", get(openapi_json))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
        .layer(from_fn(preflight_no_content))
}
