use super::{Choice, ChoiceMessage, CompletionConnector, CompletionRequest, CompletionResponse};
use crate::connectors::errors::CompletionError;
use std::sync::Mutex;

/// Canned completion service. Records every request it receives.
pub struct MockCompletionConnector {
    configured: bool,
    outcome: fn() -> Result<CompletionResponse, CompletionError>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionConnector {
    pub fn replying(outcome: fn() -> Result<CompletionResponse, CompletionError>) -> Self {
        Self {
            configured: true,
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            outcome: || Err(CompletionError::NotConfigured),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

/// A response carrying one choice per text.
pub fn response_with(texts: &[&str]) -> CompletionResponse {
    CompletionResponse {
        choices: texts
            .iter()
            .map(|text| Choice {
                message: ChoiceMessage {
                    content: Some(text.to_string()),
                },
            })
            .collect(),
    }
}

#[async_trait::async_trait]
impl CompletionConnector for MockCompletionConnector {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        (self.outcome)()
    }
}
