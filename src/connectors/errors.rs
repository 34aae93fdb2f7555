/// Errors that can occur while talking to the completion service.
///
/// These never reach an HTTP caller: the assistant turns every variant into a
/// fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// No API key, the request was not attempted
    #[error("completion service is not configured")]
    NotConfigured,
    /// 401/403 from the service
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// 429 from the service
    #[error("rate limited: {0}")]
    RateLimited(String),
    /// 404 from the service, usually an unknown model
    #[error("model not found: {0}")]
    ModelNotFound(String),
    /// Connection refused, DNS failure or timeout
    #[error("network error: {0}")]
    Network(String),
    /// Any other non-success status
    #[error("error code: {status} - {body}")]
    Api { status: u16, body: String },
    /// Body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl CompletionError {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(body),
            429 => Self::RateLimited(body),
            404 => Self::ModelNotFound(body),
            _ => Self::Api { status, body },
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Network(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
