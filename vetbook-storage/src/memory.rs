//! In-memory blob store for tests and ephemeral deployments.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use vetbook_core::VetbookResult;

use crate::BlobStore;

/// HashMap-backed store. Cheap to clone; clones share contents.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.read().unwrap().is_empty()
    }

    /// Drop all stored blobs.
    pub fn clear(&self) {
        self.blobs.write().unwrap().clear();
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn list(&self, prefix: &str) -> VetbookResult<Vec<String>> {
        let blobs = self.blobs.read().unwrap();
        Ok(blobs
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn get(&self, key: &str) -> VetbookResult<Option<Vec<u8>>> {
        let blobs = self.blobs.read().unwrap();
        Ok(blobs.get(key).cloned())
    }

    async fn put(&self, key: &str, bytes: &[u8]) -> VetbookResult<()> {
        let mut blobs = self.blobs.write().unwrap();
        blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> VetbookResult<()> {
        let mut blobs = self.blobs.write().unwrap();
        blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let store = MemoryBlobStore::new();
        store.put("playbooks/a.json", b"payload").await.unwrap();
        assert_eq!(
            store.get("playbooks/a.json").await.unwrap(),
            Some(b"payload".to_vec())
        );
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get("playbooks/missing.json").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_unconditionally() {
        let store = MemoryBlobStore::new();
        store.put("k", b"one").await.unwrap();
        store.put("k", b"two").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(b"two".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_not_an_error() {
        let store = MemoryBlobStore::new();
        store.delete("never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_filters_by_prefix() {
        let store = MemoryBlobStore::new();
        store.put("playbooks/a.json", b"{}").await.unwrap();
        store.put("playbooks/b.json", b"{}").await.unwrap();
        store.put("other/c.json", b"{}").await.unwrap();

        let mut keys = store.list("playbooks/").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["playbooks/a.json", "playbooks/b.json"]);
    }

    #[tokio::test]
    async fn test_clones_share_contents() {
        let store = MemoryBlobStore::new();
        let alias = store.clone();
        store.put("k", b"v").await.unwrap();
        assert_eq!(alias.get("k").await.unwrap(), Some(b"v".to_vec()));
    }
}
