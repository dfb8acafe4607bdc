//! REST client for the playbook API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use vetbook_core::{Playbook, PlaybookPatch};

use crate::config::TuiConfig;

use super::{GatewayError, PlaybookDraft, PlaybookService};

/// Wire shape of API error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct RestGateway {
    client: reqwest::Client,
    base_url: String,
}

impl RestGateway {
    pub fn new(config: &TuiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode_error(response: reqwest::Response) -> GatewayError {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return GatewayError::NotFound;
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => "unexpected response".to_string(),
        };
        GatewayError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl PlaybookService for RestGateway {
    async fn list_playbooks(&self) -> Result<Vec<Playbook>, GatewayError> {
        let response = self.client.get(self.url("/api/playbooks")).send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn get_playbook(&self, id: &str) -> Result<Playbook, GatewayError> {
        let response = self
            .client
            .get(self.url(&format!("/api/playbooks/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn save_playbook(&self, draft: PlaybookDraft) -> Result<Playbook, GatewayError> {
        let response = self
            .client
            .post(self.url("/api/playbooks"))
            .json(&draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn update_playbook(
        &self,
        id: &str,
        patch: PlaybookPatch,
    ) -> Result<Playbook, GatewayError> {
        let response = self
            .client
            .put(self.url(&format!("/api/playbooks/{id}")))
            .json(&patch)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_playbook(&self, id: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/playbooks/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = TuiConfig {
            api_base_url: "http://127.0.0.1:3000/".to_string(),
            ..TuiConfig::default()
        };
        let gateway = RestGateway::new(&config).unwrap();
        assert_eq!(gateway.url("/api/playbooks"), "http://127.0.0.1:3000/api/playbooks");
    }
}
