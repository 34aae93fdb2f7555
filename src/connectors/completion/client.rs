use super::{CompletionConnector, CompletionRequest, CompletionResponse};
use crate::connectors::config::CompletionConfig;
use crate::connectors::errors::CompletionError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::Instrument;

/// Calls an OpenAI-compatible Chat Completions API (Groq, OpenAI, Together AI...).
pub struct CompletionClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| {
                CompletionError::Network(format!("Failed to build HTTP client: {}", err))
            })?;

        let api_key = if config.is_configured() {
            config.api_key.clone()
        } else {
            None
        };

        Ok(Self {
            http_client,
            endpoint: config.completions_url(),
            api_key,
        })
    }

    async fn send(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Completion service returned an error");
            return Err(CompletionError::from_status(status.as_u16(), body));
        }

        Ok(response.json::<CompletionResponse>().await?)
    }
}

#[async_trait]
impl CompletionConnector for CompletionClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let api_key = self.api_key.as_ref().ok_or(CompletionError::NotConfigured)?;

        let span = tracing::info_span!(
            "completion_request",
            endpoint = %self.endpoint,
            model = %request.model
        );

        self.send(api_key, request).instrument(span).await
    }
}
