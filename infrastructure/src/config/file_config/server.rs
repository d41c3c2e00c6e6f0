//! Web server configuration from TOML (`[server]` section)

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address (default: "127.0.0.1:8501")
    pub bind: String,
    /// Page title
    pub title: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
            title: "Amazon Titan Text G1 - Express LLM Demo".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("server.bind '{}': {}", self.bind, e)))
    }
}
