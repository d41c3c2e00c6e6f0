//! Infrastructure layer for bedrock-ask
//!
//! This crate contains the adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileBedrockConfig, FileConfig, FilePromptConfig, FileServerConfig,
    ResolvedConfig,
};
pub use providers::bedrock::BedrockLlmGateway;
