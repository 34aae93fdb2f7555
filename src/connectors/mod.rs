//! External Service Connectors
//!
//! Adapters for the services this backend calls out to. Today that is only the
//! OpenAI-compatible completion API used by the assistant.
//!
//! 1. Trait in `{service}/mod.rs` → allows mocking in tests
//! 2. HTTP client in `{service}/client.rs`
//! 3. Configuration in `config.rs`
//! 4. Routes and services hold `Arc<dyn Trait>`, never the HTTP client

pub mod completion;
pub mod config;
pub mod errors;

pub use completion::{
    ChatMessage, CompletionClient, CompletionConnector, CompletionRequest, CompletionResponse,
};
pub use config::CompletionConfig;
pub use errors::CompletionError;
