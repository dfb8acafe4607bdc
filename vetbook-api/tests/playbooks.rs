//! Router-level tests for the playbook CRUD endpoints, driven through
//! `tower::ServiceExt::oneshot` over an in-memory blob store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use vetbook_api::{create_api_router, ApiConfig};
use vetbook_core::Playbook;
use vetbook_storage::{MemoryBlobStore, PlaybookStore};

fn test_app() -> Router {
    let store = PlaybookStore::new(Arc::new(MemoryBlobStore::new()));
    create_api_router(store, &ApiConfig::default())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_create_body() -> Value {
    json!({
        "title": "Incident Content Review",
        "description": "Decide how AI-drafted incident updates get reviewed",
        "escalationPaths": [
            {
                "id": "1",
                "name": "Verify",
                "description": "Verify internally",
                "action": "verify",
                "conditions": ["A", "B"]
            },
            {
                "id": "2",
                "name": "Avoid",
                "description": "Do not use AI",
                "action": "avoid",
                "conditions": ["C"]
            }
        ]
    })
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let app = test_app();

    let response = app
        .oneshot(json_request("POST", "/api/playbooks", sample_create_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Playbook = serde_json::from_value(body_json(response).await).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.escalation_paths.len(), 2);
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/playbooks", sample_create_body()))
        .await
        .unwrap();
    let created: Playbook = serde_json::from_value(body_json(response).await).unwrap();

    let response = app
        .oneshot(get_request(&format!("/api/playbooks/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let loaded: Playbook = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn test_list_returns_all_records() {
    let app = test_app();

    for title in ["First playbook", "Second playbook"] {
        let mut body = sample_create_body();
        body["title"] = json!(title);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/playbooks", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/api/playbooks")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let listed: Vec<Playbook> = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_get_unknown_id_is_structured_404() {
    let app = test_app();

    let response = app
        .oneshot(get_request("/api/playbooks/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "Playbook not found" }));
}

#[tokio::test]
async fn test_update_merges_and_preserves_immutable_fields() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/playbooks", sample_create_body()))
        .await
        .unwrap();
    let created: Playbook = serde_json::from_value(body_json(response).await).unwrap();

    // updatedAt has nanosecond precision; a short pause guarantees the
    // refreshed value is strictly later.
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;

    // The payload tries to rewrite id and createdAt; both must survive.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/playbooks/{}", created.id),
            json!({
                "id": "hijacked",
                "createdAt": "1999-01-01T00:00:00Z",
                "title": "Renamed playbook"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let merged: Playbook = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(merged.id, created.id);
    assert_eq!(merged.created_at, created.created_at);
    assert_eq!(merged.title, "Renamed playbook");
    assert_eq!(merged.description, created.description);
    assert_eq!(merged.escalation_paths, created.escalation_paths);
    assert!(merged.updated_at > created.updated_at);

    // The merged record is what got persisted.
    let response = app
        .oneshot(get_request(&format!("/api/playbooks/{}", created.id)))
        .await
        .unwrap();
    let loaded: Playbook = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(loaded, merged);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/playbooks/missing",
            json!({ "title": "whatever" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_idempotent_204() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/playbooks", sample_create_body()))
        .await
        .unwrap();
    let created: Playbook = serde_json::from_value(body_json(response).await).unwrap();

    let uri = format!("/api/playbooks/{}", created.id);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting a now-missing id still succeeds.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_api_route_is_plain_text_404() {
    let app = test_app();

    let response = app
        .oneshot(get_request("/api/unknown/route"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"API endpoint not found");
}

#[tokio::test]
async fn test_options_on_api_paths_is_204() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/playbooks")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_cors_headers_on_api_responses() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/playbooks")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_missing_static_bundle_is_404() {
    // No dist/ directory exists in the test environment, so non-API
    // paths fall through the SPA service to a 404.
    let app = test_app();

    let response = app.oneshot(get_request("/some/spa/route")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
