//! Request types for the playbook routes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vetbook_core::{
    new_playbook_id, Contributor, EscalationPath, Playbook, PlaybookPatch, Resource, Timestamp,
};

/// Body of `POST /api/playbooks`.
///
/// The identifier is generated when absent and both timestamps are
/// stamped server-side; client-provided timestamp values are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaybookRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub escalation_paths: Vec<EscalationPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Contributor>,
}

impl CreatePlaybookRequest {
    /// Materialize a full record, generating the id when absent and
    /// stamping both timestamps with `now`.
    pub fn into_playbook(self, now: Timestamp) -> Playbook {
        Playbook {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(new_playbook_id),
            title: self.title,
            description: self.description,
            escalation_paths: self.escalation_paths,
            created_at: now,
            updated_at: now,
            category: self.category,
            resources: self.resources,
            contributor: self.contributor,
        }
    }
}

/// Body of `PUT /api/playbooks/:id`: partial top-level field replacement.
pub type UpdatePlaybookRequest = PlaybookPatch;
