//! OpenAPI Documentation
//!
//! Aggregates route annotations and schemas into the document served at
//! `/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VETBOOK API",
        description = "CRUD API for validation playbooks backed by blob storage",
        license(name = "MIT")
    ),
    paths(
        crate::routes::playbooks::list_playbooks,
        crate::routes::playbooks::create_playbook,
        crate::routes::playbooks::get_playbook,
        crate::routes::playbooks::update_playbook,
        crate::routes::playbooks::delete_playbook,
        crate::routes::health::ping,
        crate::routes::health::liveness,
        crate::routes::health::readiness,
    ),
    components(schemas(
        vetbook_core::Playbook,
        vetbook_core::EscalationPath,
        vetbook_core::Resource,
        vetbook_core::Contributor,
        vetbook_core::PlaybookPatch,
        crate::types::CreatePlaybookRequest,
        crate::error::ErrorBody,
        crate::routes::health::HealthResponse,
        crate::routes::health::HealthStatus,
        crate::routes::health::HealthDetails,
        crate::routes::health::ComponentHealth,
    )),
    tags(
        (name = "Playbooks", description = "Validation playbook CRUD"),
        (name = "Health", description = "Service health probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("/api/playbooks"));
        assert!(json.contains("/health/ready"));
    }
}
