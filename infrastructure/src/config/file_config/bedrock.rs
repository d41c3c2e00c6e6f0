//! Bedrock configuration from TOML (`[bedrock]` section)

use super::ConfigError;
use ask_domain::{BedrockProviderConfig, CredentialSource, DEFAULT_MODEL_ID, DEFAULT_REGION, ModelEndpoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// Hosted model identifier (default: "amazon.titan-text-express-v1")
    pub model_id: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// AWS profile name for credentials
    pub profile: Option<String>,
    /// Max tokens per response (default: 512)
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    /// Stream text deltas as progress events (default: true)
    pub streaming: bool,
    /// Explicit credentials. Prefer a profile or the environment.
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            region: DEFAULT_REGION.to_string(),
            profile: None,
            max_tokens: 512,
            temperature: None,
            top_p: None,
            streaming: true,
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
        }
    }
}

impl FileBedrockConfig {
    /// Pick the credential source: static keys, then profile, then environment.
    pub fn credential_source(&self) -> Result<CredentialSource, ConfigError> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Ok(CredentialSource::Static {
                access_key_id: access_key_id.clone(),
                secret_access_key: secret_access_key.clone(),
                session_token: self.session_token.clone(),
            }),
            (Some(_), None) => Err(ConfigError::Invalid(
                "bedrock.access_key_id is set but bedrock.secret_access_key is not".to_string(),
            )),
            (None, Some(_)) => Err(ConfigError::Invalid(
                "bedrock.secret_access_key is set but bedrock.access_key_id is not".to_string(),
            )),
            (None, None) => Ok(match &self.profile {
                Some(profile) if !profile.trim().is_empty() => {
                    CredentialSource::Profile(profile.clone())
                }
                _ => CredentialSource::Environment,
            }),
        }
    }

    /// Validate and convert into the provider-neutral domain type.
    pub fn to_provider_config(&self) -> Result<BedrockProviderConfig, ConfigError> {
        let endpoint = ModelEndpoint::new(&self.model_id, &self.region)?;

        if self.max_tokens == 0 {
            return Err(ConfigError::Invalid("bedrock.max_tokens cannot be 0".to_string()));
        }
        check_unit_range("bedrock.temperature", self.temperature)?;
        check_unit_range("bedrock.top_p", self.top_p)?;

        Ok(BedrockProviderConfig {
            endpoint,
            credentials: self.credential_source()?,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            streaming: self.streaming,
        })
    }

    /// Copy with credential values masked, for display.
    pub fn redacted(&self) -> Self {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "********".to_string());
        Self {
            access_key_id: mask(&self.access_key_id),
            secret_access_key: mask(&self.secret_access_key),
            session_token: mask(&self.session_token),
            ..self.clone()
        }
    }
}

fn check_unit_range(key: &str, value: Option<f32>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v) => Err(ConfigError::Invalid(format!(
            "{key} must be between 0 and 1 (got {v})"
        ))),
        _ => Ok(()),
    }
}
