//! VETBOOK Storage - Blob Store Trait and Backends
//!
//! Persistence is a key-per-record mapping onto a blob store: no
//! indexing, no transactions, no caching, and no consistency guarantees
//! beyond what the backend provides natively. [`BlobStore`] is the
//! boundary; [`PlaybookStore`] layers the playbook key scheme and JSON
//! codec on top of any backend.

pub mod fs;
pub mod memory;
pub mod playbooks;

pub use fs::FsBlobStore;
pub use memory::MemoryBlobStore;
pub use playbooks::{playbook_key, PlaybookStore, PLAYBOOK_PREFIX};

use async_trait::async_trait;
use vetbook_core::VetbookResult;

/// Minimal async blob-store contract.
///
/// Absence is `None`, never an error, and `delete` of a missing key
/// succeeds. Writes are unconditional overwrites (last-write-wins).
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Keys under `prefix`, in the backend's native order.
    async fn list(&self, prefix: &str) -> VetbookResult<Vec<String>>;

    async fn get(&self, key: &str) -> VetbookResult<Option<Vec<u8>>>;

    async fn put(&self, key: &str, bytes: &[u8]) -> VetbookResult<()>;

    async fn delete(&self, key: &str) -> VetbookResult<()>;
}
