//! VETBOOK API - REST Layer Over Blob-Backed Playbook Storage
//!
//! Exposes the playbook CRUD endpoints, health checks, and the OpenAPI
//! document, and serves the static single-page bundle for non-API
//! requests. Persistence goes through [`vetbook_storage::PlaybookStore`];
//! there is no auth, no concurrency control, and writes are
//! last-write-wins by design.

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorBody, ErrorCode};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use state::AppState;
pub use types::{CreatePlaybookRequest, UpdatePlaybookRequest};
