//! Playbook gateway: remote API with local filesystem fallback.
//!
//! The two backends implement one trait so the views are agnostic to
//! which store answers a given call. [`FallbackGateway`] owns the single
//! fallback-on-failure policy instead of scattering it per call site.

pub mod fallback;
pub mod local;
pub mod rest;

pub use fallback::FallbackGateway;
pub use local::LocalGateway;
pub use rest::RestGateway;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use vetbook_core::{Contributor, EscalationPath, Playbook, PlaybookPatch, Resource};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The network call itself failed (connect, timeout, protocol).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Playbook not found")]
    NotFound,

    /// The API answered with an error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] vetbook_core::VetbookError),
}

/// A new playbook as composed by the editor. The backend (or the local
/// mirror, when falling back) assigns the id and timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookDraft {
    pub title: String,
    pub description: String,
    pub escalation_paths: Vec<EscalationPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Contributor>,
}

/// Operation-level storage contract shared by the remote client and the
/// local mirror.
#[async_trait]
pub trait PlaybookService: Send + Sync {
    async fn list_playbooks(&self) -> Result<Vec<Playbook>, GatewayError>;

    async fn get_playbook(&self, id: &str) -> Result<Playbook, GatewayError>;

    async fn save_playbook(&self, draft: PlaybookDraft) -> Result<Playbook, GatewayError>;

    async fn update_playbook(
        &self,
        id: &str,
        patch: PlaybookPatch,
    ) -> Result<Playbook, GatewayError>;

    async fn delete_playbook(&self, id: &str) -> Result<(), GatewayError>;
}
