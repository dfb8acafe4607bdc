//! Filesystem-backed blob store.
//!
//! Keys are forward-slash separated and map to paths under a root
//! directory. Serves as the backend deployment store and as the client
//! side's local fallback mirror.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use vetbook_core::{StorageError, VetbookResult};

use crate::BlobStore;

#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> VetbookResult<PathBuf> {
        // Keys must stay inside the root directory.
        if key.is_empty()
            || key
                .split('/')
                .any(|part| part.is_empty() || part == "." || part == "..")
        {
            return Err(StorageError::Io {
                key: key.to_string(),
                reason: "invalid key".to_string(),
            }
            .into());
        }
        Ok(self.root.join(key))
    }

    fn io_error(key: &str, err: std::io::Error) -> vetbook_core::VetbookError {
        StorageError::Io {
            key: key.to_string(),
            reason: err.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn list(&self, prefix: &str) -> VetbookResult<Vec<String>> {
        let clean = prefix.trim_end_matches('/');
        let dir = if clean.is_empty() {
            self.root.clone()
        } else {
            self.root.join(clean)
        };

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            // A prefix nothing was ever written under lists as empty.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(Self::io_error(prefix, err)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| Self::io_error(prefix, err))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|kind| kind.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if clean.is_empty() {
                    keys.push(name.to_string());
                } else {
                    keys.push(format!("{clean}/{name}"));
                }
            }
        }
        Ok(keys)
    }

    async fn get(&self, key: &str) -> VetbookResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }

    async fn put(&self, key: &str, bytes: &[u8]) -> VetbookResult<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| Self::io_error(key, err))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|err| Self::io_error(key, err))
    }

    async fn delete(&self, key: &str) -> VetbookResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path());

        store.put("playbooks/a.json", b"payload").await.unwrap();
        assert_eq!(
            store.get("playbooks/a.json").await.unwrap(),
            Some(b"payload".to_vec())
        );
    }

    #[tokio::test]
    async fn test_list_returns_prefixed_keys_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path());

        store.put("playbooks/a.json", b"{}").await.unwrap();
        store.put("playbooks/b.json", b"{}").await.unwrap();
        store.put("exports/c.json", b"{}").await.unwrap();

        let mut keys = store.list("playbooks/").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["playbooks/a.json", "playbooks/b.json"]);
    }

    #[tokio::test]
    async fn test_list_unwritten_prefix_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path());
        assert!(store.list("playbooks/").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path());

        store.put("playbooks/a.json", b"{}").await.unwrap();
        store.delete("playbooks/a.json").await.unwrap();
        store.delete("playbooks/a.json").await.unwrap();
        assert_eq!(store.get("playbooks/a.json").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_traversal_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path());

        assert!(store.get("../outside").await.is_err());
        assert!(store.put("playbooks/../../etc/x", b"").await.is_err());
        assert!(store.get("").await.is_err());
    }
}
