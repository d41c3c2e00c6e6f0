//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, environment, etc.).

use crate::core::endpoint::ModelEndpoint;

/// Where AWS credentials come from.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum CredentialSource {
    /// The AWS default provider chain (environment, shared files, IMDS, ...).
    #[default]
    Environment,
    /// A named profile from the shared AWS config files.
    Profile(String),
    /// Explicit static keys.
    Static {
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    },
}

impl CredentialSource {
    /// Short label for logs. Never includes secrets.
    pub fn describe(&self) -> String {
        match self {
            CredentialSource::Environment => "environment".to_string(),
            CredentialSource::Profile(name) => format!("profile '{name}'"),
            CredentialSource::Static { .. } => "static keys".to_string(),
        }
    }
}

impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CredentialSource({})", self.describe())
    }
}

/// AWS Bedrock provider configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BedrockProviderConfig {
    /// Model and region (default: amazon.titan-text-express-v1 in us-east-1).
    pub endpoint: ModelEndpoint,
    /// How to resolve credentials.
    pub credentials: CredentialSource,
    /// Max tokens per response (default: 512).
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    /// Use the streaming API and emit text deltas as progress events.
    pub streaming: bool,
}

impl Default for BedrockProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: ModelEndpoint::default(),
            credentials: CredentialSource::Environment,
            max_tokens: 512,
            temperature: None,
            top_p: None,
            streaming: true,
        }
    }
}
