//! Fallback-on-failure policy unifying the two backends.

use async_trait::async_trait;
use vetbook_core::{Playbook, PlaybookPatch};

use super::{GatewayError, LocalGateway, PlaybookDraft, PlaybookService, RestGateway};

/// Try the remote API first; when the call fails, answer from the local
/// mirror instead. There is no retry and no reconciliation between the
/// two stores once connectivity returns - records written during an
/// outage stay local-only.
pub struct FallbackGateway {
    remote: RestGateway,
    local: LocalGateway,
}

impl FallbackGateway {
    pub fn new(remote: RestGateway, local: LocalGateway) -> Self {
        Self { remote, local }
    }

    fn note_fallback(operation: &str, err: &GatewayError) {
        tracing::warn!(error = %err, operation, "API unavailable, using local fallback");
    }
}

#[async_trait]
impl PlaybookService for FallbackGateway {
    async fn list_playbooks(&self) -> Result<Vec<Playbook>, GatewayError> {
        match self.remote.list_playbooks().await {
            Ok(playbooks) => Ok(playbooks),
            Err(err) => {
                Self::note_fallback("list", &err);
                self.local.list_playbooks().await
            }
        }
    }

    async fn get_playbook(&self, id: &str) -> Result<Playbook, GatewayError> {
        match self.remote.get_playbook(id).await {
            Ok(playbook) => Ok(playbook),
            Err(err) => {
                Self::note_fallback("get", &err);
                self.local.get_playbook(id).await
            }
        }
    }

    async fn save_playbook(&self, draft: PlaybookDraft) -> Result<Playbook, GatewayError> {
        match self.remote.save_playbook(draft.clone()).await {
            Ok(playbook) => Ok(playbook),
            Err(err) => {
                Self::note_fallback("save", &err);
                self.local.save_playbook(draft).await
            }
        }
    }

    async fn update_playbook(
        &self,
        id: &str,
        patch: PlaybookPatch,
    ) -> Result<Playbook, GatewayError> {
        match self.remote.update_playbook(id, patch.clone()).await {
            Ok(playbook) => Ok(playbook),
            Err(err) => {
                Self::note_fallback("update", &err);
                self.local.update_playbook(id, patch).await
            }
        }
    }

    async fn delete_playbook(&self, id: &str) -> Result<(), GatewayError> {
        match self.remote.delete_playbook(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                Self::note_fallback("delete", &err);
                self.local.delete_playbook(id).await
            }
        }
    }
}
