//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! [`FileConfig::resolve`] validates them and converts to domain types.

mod bedrock;
mod prompt;
mod server;

pub use bedrock::FileBedrockConfig;
pub use prompt::FilePromptConfig;
pub use server::FileServerConfig;

use ask_domain::{BedrockProviderConfig, DomainError, PromptTemplate};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid configuration: {0}")]
    Domain(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model endpoint and credentials
    pub bedrock: FileBedrockConfig,
    /// Prompt template
    pub prompt: FilePromptConfig,
    /// Web display surface
    pub server: FileServerConfig,
}

/// Validated configuration, created once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub bedrock: BedrockProviderConfig,
    pub template: PromptTemplate,
    pub bind: SocketAddr,
    pub title: String,
}

impl FileConfig {
    /// Validate every section and convert to domain types.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        Ok(ResolvedConfig {
            bedrock: self.bedrock.to_provider_config()?,
            template: self.prompt.to_template()?,
            bind: self.server.bind_addr()?,
            title: self.server.title.clone(),
        })
    }

    /// Render as TOML with credentials masked.
    pub fn to_redacted_toml(&self) -> Result<String, ConfigError> {
        let redacted = FileConfig {
            bedrock: self.bedrock.redacted(),
            ..self.clone()
        };
        toml::to_string_pretty(&redacted).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
