//! Playbook gateway over a blob store.
//!
//! One JSON object per playbook at key `playbooks/{id}.json`. No index
//! file and no pagination: listing enumerates and fetches every object,
//! which is O(n) store round-trips.

use std::sync::Arc;

use vetbook_core::{Playbook, StorageError, VetbookResult};

use crate::BlobStore;

/// Key prefix under which playbook records live.
pub const PLAYBOOK_PREFIX: &str = "playbooks/";

/// Blob key for a playbook id.
pub fn playbook_key(id: &str) -> String {
    format!("{PLAYBOOK_PREFIX}{id}.json")
}

/// Storage gateway: get/list/put/delete of playbook records, keyed
/// deterministically by id.
#[derive(Clone)]
pub struct PlaybookStore {
    store: Arc<dyn BlobStore>,
}

impl PlaybookStore {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// All persisted playbooks, in the backend's native listing order.
    ///
    /// Records that fail to decode are skipped with a warning rather than
    /// failing the whole listing.
    pub async fn list(&self) -> VetbookResult<Vec<Playbook>> {
        let keys = self.store.list(PLAYBOOK_PREFIX).await?;
        let mut playbooks = Vec::with_capacity(keys.len());
        for key in keys {
            let Some(bytes) = self.store.get(&key).await? else {
                continue;
            };
            match serde_json::from_slice::<Playbook>(&bytes) {
                Ok(playbook) => playbooks.push(playbook),
                Err(err) => {
                    tracing::warn!(%key, error = %err, "skipping malformed playbook record");
                }
            }
        }
        Ok(playbooks)
    }

    pub async fn get(&self, id: &str) -> VetbookResult<Option<Playbook>> {
        let key = playbook_key(id);
        let Some(bytes) = self.store.get(&key).await? else {
            return Ok(None);
        };
        let playbook =
            serde_json::from_slice(&bytes).map_err(|err| StorageError::Malformed {
                key,
                reason: err.to_string(),
            })?;
        Ok(Some(playbook))
    }

    /// Unconditional overwrite at the key derived from the record's id.
    pub async fn put(&self, playbook: &Playbook) -> VetbookResult<()> {
        let key = playbook_key(&playbook.id);
        let bytes = serde_json::to_vec(playbook).map_err(|err| StorageError::Malformed {
            key: key.clone(),
            reason: err.to_string(),
        })?;
        self.store.put(&key, &bytes).await
    }

    /// Idempotent removal; deleting an unknown id succeeds.
    pub async fn delete(&self, id: &str) -> VetbookResult<()> {
        self.store.delete(&playbook_key(id)).await
    }

    /// Cheap backend connectivity check for readiness probes.
    pub async fn probe(&self) -> VetbookResult<()> {
        self.store.list(PLAYBOOK_PREFIX).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBlobStore;
    use chrono::Utc;
    use vetbook_core::{EscalationAction, EscalationPath};

    fn store() -> (PlaybookStore, MemoryBlobStore) {
        let backend = MemoryBlobStore::new();
        (PlaybookStore::new(Arc::new(backend.clone())), backend)
    }

    fn sample(id: &str) -> Playbook {
        Playbook {
            id: id.to_string(),
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
            category: None,
            resources: None,
            contributor: None,
        }
    }

    #[test]
    fn test_key_derivation() {
        assert_eq!(playbook_key("abc"), "playbooks/abc.json");
    }

    #[tokio::test]
    async fn test_put_then_get_returns_deep_equal_record() {
        let (playbooks, _) = store();
        let record = sample("pb-1");

        playbooks.put(&record).await.unwrap();
        let loaded = playbooks.get("pb-1").await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let (playbooks, _) = store();
        assert_eq!(playbooks.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_last_write_wins() {
        let (playbooks, _) = store();
        let mut record = sample("pb-1");
        playbooks.put(&record).await.unwrap();

        record.title = "Rewritten".to_string();
        playbooks.put(&record).await.unwrap();

        let loaded = playbooks.get("pb-1").await.unwrap().unwrap();
        assert_eq!(loaded.title, "Rewritten");
    }

    #[tokio::test]
    async fn test_list_fetches_every_record() {
        let (playbooks, _) = store();
        playbooks.put(&sample("a")).await.unwrap();
        playbooks.put(&sample("b")).await.unwrap();

        let mut ids: Vec<String> =
            playbooks.list().await.unwrap().into_iter().map(|p| p.id).collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_skips_malformed_records() {
        let (playbooks, backend) = store();
        playbooks.put(&sample("good")).await.unwrap();
        backend
            .put("playbooks/bad.json", b"not json")
            .await
            .unwrap();

        let listed = playbooks.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "good");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let (playbooks, _) = store();
        playbooks.delete("never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn test_get_malformed_record_is_an_error() {
        let (playbooks, backend) = store();
        backend
            .put("playbooks/bad.json", b"not json")
            .await
            .unwrap();
        assert!(playbooks.get("bad").await.is_err());
    }
}
