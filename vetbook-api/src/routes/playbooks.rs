//! Playbook REST API Routes
//!
//! CRUD handlers over the blob-backed playbook store. Title/description
//! minimums are an authoring-surface concern and are deliberately not
//! enforced here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    state::AppState,
    types::{CreatePlaybookRequest, UpdatePlaybookRequest},
};
use vetbook_core::{Playbook, VetbookError};

fn storage_failure(operation: &'static str) -> impl FnOnce(VetbookError) -> ApiError {
    move |err| {
        tracing::error!(error = %err, operation, "storage operation failed");
        ApiError::storage_failure(format!("Failed to {operation}"))
    }
}

/// GET /api/playbooks - List all playbooks
#[utoipa::path(
    get,
    path = "/api/playbooks",
    tag = "Playbooks",
    responses(
        (status = 200, description = "All persisted playbooks", body = [Playbook]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list_playbooks(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let playbooks = state
        .store
        .list()
        .await
        .map_err(storage_failure("list playbooks"))?;
    Ok(Json(playbooks))
}

/// POST /api/playbooks - Create a new playbook
#[utoipa::path(
    post,
    path = "/api/playbooks",
    tag = "Playbooks",
    request_body = CreatePlaybookRequest,
    responses(
        (status = 201, description = "Playbook created", body = Playbook),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn create_playbook(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePlaybookRequest>,
) -> ApiResult<impl IntoResponse> {
    let playbook = req.into_playbook(Utc::now());

    state
        .store
        .put(&playbook)
        .await
        .map_err(storage_failure("create playbook"))?;

    Ok((StatusCode::CREATED, Json(playbook)))
}

/// GET /api/playbooks/:id - Get a specific playbook
#[utoipa::path(
    get,
    path = "/api/playbooks/{id}",
    tag = "Playbooks",
    params(
        ("id" = String, Path, description = "Playbook ID")
    ),
    responses(
        (status = 200, description = "Playbook record", body = Playbook),
        (status = 404, description = "Playbook not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn get_playbook(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let playbook = state
        .store
        .get(&id)
        .await
        .map_err(storage_failure("get playbook"))?
        .ok_or_else(|| ApiError::playbook_not_found(&id))?;

    Ok(Json(playbook))
}

/// PUT /api/playbooks/:id - Update a playbook
///
/// Merges top-level fields into the stored record; `id` and `createdAt`
/// are always preserved and `updatedAt` is refreshed.
#[utoipa::path(
    put,
    path = "/api/playbooks/{id}",
    tag = "Playbooks",
    params(
        ("id" = String, Path, description = "Playbook ID")
    ),
    request_body = UpdatePlaybookRequest,
    responses(
        (status = 200, description = "Merged playbook", body = Playbook),
        (status = 404, description = "Playbook not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn update_playbook(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePlaybookRequest>,
) -> ApiResult<impl IntoResponse> {
    let existing = state
        .store
        .get(&id)
        .await
        .map_err(storage_failure("update playbook"))?
        .ok_or_else(|| ApiError::playbook_not_found(&id))?;

    let merged = existing.merge(req, Utc::now());

    state
        .store
        .put(&merged)
        .await
        .map_err(storage_failure("update playbook"))?;

    Ok(Json(merged))
}

/// DELETE /api/playbooks/:id - Delete a playbook
///
/// Idempotent: deleting an unknown id still answers 204.
#[utoipa::path(
    delete,
    path = "/api/playbooks/{id}",
    tag = "Playbooks",
    params(
        ("id" = String, Path, description = "Playbook ID")
    ),
    responses(
        (status = 204, description = "Playbook deleted"),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn delete_playbook(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .store
        .delete(&id)
        .await
        .map_err(storage_failure("delete playbook"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create the playbook routes router.
pub fn create_router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(list_playbooks))
        .route("/", axum::routing::post(create_playbook))
        .route("/:id", axum::routing::get(get_playbook))
        .route("/:id", axum::routing::put(update_playbook))
        .route("/:id", axum::routing::delete(delete_playbook))
        .with_state(state)
}
