//! Configuration loading for bedrock-ask
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BEDROCK_ASK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./bedrock-ask.toml` or `./.bedrock-ask.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/bedrock-ask/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigError, FileBedrockConfig, FileConfig, FilePromptConfig, FileServerConfig,
    ResolvedConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
