//! LLM Gateway port
//!
//! Defines the interface for submitting a prompt to a hosted model.

use super::progress::ProgressNotifier;
use ask_domain::ModelEndpoint;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Gateway for text generation
///
/// Bound to a single [`ModelEndpoint`] for its whole lifetime.
/// Implementations (adapters) live in the infrastructure layer.
/// No retry or backoff happens behind this trait.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// The model and region this gateway talks to
    fn endpoint(&self) -> &ModelEndpoint;

    /// Submit a prompt and wait for the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Submit a prompt, reporting intermediate events to `progress`.
    ///
    /// Default implementation calls `generate()` and emits nothing, so
    /// gateways without a streaming transport work unchanged.
    async fn generate_with_progress(
        &self,
        prompt: &str,
        _progress: &dyn ProgressNotifier,
    ) -> Result<String, GatewayError> {
        self.generate(prompt).await
    }
}
