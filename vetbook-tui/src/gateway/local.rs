//! Local filesystem mirror used when the API is unreachable.
//!
//! Applies the same create and merge rules as the backend, client-side,
//! so records written during an outage look identical to served ones.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use vetbook_core::{new_playbook_id, Playbook, PlaybookPatch};
use vetbook_storage::{FsBlobStore, PlaybookStore};

use super::{GatewayError, PlaybookDraft, PlaybookService};

#[derive(Clone)]
pub struct LocalGateway {
    store: PlaybookStore,
}

impl LocalGateway {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: PlaybookStore::new(Arc::new(FsBlobStore::new(dir.into()))),
        }
    }
}

#[async_trait]
impl PlaybookService for LocalGateway {
    async fn list_playbooks(&self) -> Result<Vec<Playbook>, GatewayError> {
        Ok(self.store.list().await?)
    }

    async fn get_playbook(&self, id: &str) -> Result<Playbook, GatewayError> {
        self.store.get(id).await?.ok_or(GatewayError::NotFound)
    }

    async fn save_playbook(&self, draft: PlaybookDraft) -> Result<Playbook, GatewayError> {
        let now = Utc::now();
        let playbook = Playbook {
            id: new_playbook_id(),
            title: draft.title,
            description: draft.description,
            escalation_paths: draft.escalation_paths,
            created_at: now,
            updated_at: now,
            category: draft.category,
            resources: draft.resources,
            contributor: draft.contributor,
        };
        self.store.put(&playbook).await?;
        Ok(playbook)
    }

    async fn update_playbook(
        &self,
        id: &str,
        patch: PlaybookPatch,
    ) -> Result<Playbook, GatewayError> {
        let existing = self.store.get(id).await?.ok_or(GatewayError::NotFound)?;
        let merged = existing.merge(patch, Utc::now());
        self.store.put(&merged).await?;
        Ok(merged)
    }

    async fn delete_playbook(&self, id: &str) -> Result<(), GatewayError> {
        Ok(self.store.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PlaybookDraft {
        PlaybookDraft {
            title: title.to_string(),
            description: "A locally saved playbook".to_string(),
            escalation_paths: Vec::new(),
            category: None,
            resources: None,
            contributor: None,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = LocalGateway::new(dir.path());

        let saved = gateway.save_playbook(draft("Local")).await.unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(saved.created_at, saved.updated_at);

        let loaded = gateway.get_playbook(&saved.id).await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_update_applies_merge_rules() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = LocalGateway::new(dir.path());
        let saved = gateway.save_playbook(draft("Local")).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let merged = gateway
            .update_playbook(
                &saved.id,
                PlaybookPatch {
                    title: Some("Renamed".to_string()),
                    ..PlaybookPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(merged.id, saved.id);
        assert_eq!(merged.created_at, saved.created_at);
        assert_eq!(merged.title, "Renamed");
        assert!(merged.updated_at > saved.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = LocalGateway::new(dir.path());

        let result = gateway
            .update_playbook("missing", PlaybookPatch::default())
            .await;
        assert!(matches!(result, Err(GatewayError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = LocalGateway::new(dir.path());
        gateway.delete_playbook("never-existed").await.unwrap();
    }
}
