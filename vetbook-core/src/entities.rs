//! Playbook entity types.
//!
//! Pure data, no behavior beyond field merging and draft validation.
//! Everything serializes with camelCase field names to match the
//! persisted JSON layout (`playbooks/{id}.json` blobs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::EscalationAction;
use crate::error::ValidationError;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Minimum trimmed title length accepted by the authoring surface.
pub const MIN_TITLE_LEN: usize = 3;
/// Minimum trimmed description length accepted by the authoring surface.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Generate a new playbook identifier.
///
/// UUIDv7 embeds a Unix timestamp, so generated ids sort by creation
/// time. Rendered to a string because built-in template ids are
/// human-readable slugs sharing the same namespace.
pub fn new_playbook_id() -> String {
    Uuid::now_v7().to_string()
}

/// A named response category paired with the conditions that trigger it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EscalationPath {
    /// Opaque identifier, unique within a playbook.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Open string tag; see [`EscalationAction`].
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub action: EscalationAction,
    /// Ordered trigger scenarios. Sequence order is significant for
    /// matching, and the same condition string may legitimately appear
    /// under multiple paths.
    pub conditions: Vec<String>,
}

/// External reference attached to a playbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Author attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub name: String,
    pub email: String,
}

/// A validation playbook: an ordered set of escalation paths plus
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Declaration order matters: later paths take priority in the
    /// short-circuit scan, earlier paths win best-match ties.
    pub escalation_paths: Vec<EscalationPath>,
    /// Set once at creation, immutable thereafter.
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    /// Refreshed on every mutation.
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Contributor>,
}

/// Partial top-level update for a playbook.
///
/// Fields that are `None` are left unchanged. The identifier and creation
/// timestamp are not part of the patch and can never be rewritten through
/// one; unknown fields in an update payload are ignored on deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlaybookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_paths: Option<Vec<EscalationPath>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Contributor>,
}

impl Playbook {
    /// Apply a partial update, preserving `id` and `created_at` and
    /// stamping `updated_at` with `now`.
    pub fn merge(&self, patch: PlaybookPatch, now: Timestamp) -> Playbook {
        Playbook {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            escalation_paths: patch
                .escalation_paths
                .unwrap_or_else(|| self.escalation_paths.clone()),
            created_at: self.created_at,
            updated_at: now,
            category: patch.category.or_else(|| self.category.clone()),
            resources: patch.resources.or_else(|| self.resources.clone()),
            contributor: patch.contributor.or_else(|| self.contributor.clone()),
        }
    }
}

/// Authoring-surface validation for a new or edited playbook.
///
/// Storage and the HTTP API deliberately accept anything; only the
/// editor calls this before submitting.
pub fn validate_draft(title: &str, description: &str) -> Result<(), ValidationError> {
    if title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(ValidationError::TitleTooShort { min: MIN_TITLE_LEN });
    }
    if description.trim().chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort {
            min: MIN_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_playbook() -> Playbook {
        Playbook {
            id: "pb-1".to_string(),
            title: "Sample".to_string(),
            description: "A sample playbook".to_string(),
            escalation_paths: vec![EscalationPath {
                id: "1".to_string(),
                name: "Verify".to_string(),
                description: "Check internally".to_string(),
                action: EscalationAction::Verify,
                conditions: vec!["Condition A".to_string()],
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            category: Some("Test".to_string()),
            resources: None,
            contributor: None,
        }
    }

    #[test]
    fn test_new_playbook_ids_are_sortable() {
        let id1 = new_playbook_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = new_playbook_id();
        assert!(id1 < id2);
    }

    #[test]
    fn test_merge_preserves_id_and_created_at() {
        let original = sample_playbook();
        let now = Utc::now();
        let merged = original.merge(
            PlaybookPatch {
                title: Some("Renamed".to_string()),
                ..PlaybookPatch::default()
            },
            now,
        );

        assert_eq!(merged.id, original.id);
        assert_eq!(merged.created_at, original.created_at);
        assert_eq!(merged.title, "Renamed");
        assert_eq!(merged.description, original.description);
        assert_eq!(merged.updated_at, now);
    }

    #[test]
    fn test_merge_with_empty_patch_only_touches_updated_at() {
        let original = sample_playbook();
        let now = Utc::now();
        let merged = original.merge(PlaybookPatch::default(), now);

        assert_eq!(merged.title, original.title);
        assert_eq!(merged.escalation_paths, original.escalation_paths);
        assert_eq!(merged.category, original.category);
        assert_eq!(merged.updated_at, now);
    }

    #[test]
    fn test_patch_deserialize_ignores_immutable_fields() {
        // An update payload may carry id/createdAt; the patch type simply
        // has no slot for them.
        let patch: PlaybookPatch = serde_json::from_str(
            r#"{"id":"evil","createdAt":"2020-01-01T00:00:00Z","title":"New title"}"#,
        )
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("New title"));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let playbook = sample_playbook();
        let json = serde_json::to_string(&playbook).unwrap();
        assert!(json.contains("\"escalationPaths\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("escalation_paths"));
    }

    #[test]
    fn test_validate_draft_bounds() {
        assert!(validate_draft("abc", "ten chars!").is_ok());
        assert!(matches!(
            validate_draft("ab", "long enough description"),
            Err(ValidationError::TitleTooShort { .. })
        ));
        assert!(matches!(
            validate_draft("abc", "too short"),
            Err(ValidationError::DescriptionTooShort { .. })
        ));
        // Whitespace does not count toward the minimums.
        assert!(matches!(
            validate_draft("  a  ", "long enough description"),
            Err(ValidationError::TitleTooShort { .. })
        ));
    }
}
