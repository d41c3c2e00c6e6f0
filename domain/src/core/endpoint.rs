//! Model endpoint reference

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default hosted model used when nothing is configured.
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-express-v1";

/// Default service region used when nothing is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Identifies which hosted model handles a request, and where (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelEndpoint {
    model_id: String,
    region: String,
}

impl ModelEndpoint {
    /// Create a new endpoint reference.
    ///
    /// Both parts must be non-blank.
    pub fn new(model_id: impl Into<String>, region: impl Into<String>) -> Result<Self, DomainError> {
        let model_id = model_id.into();
        let region = region.into();

        if model_id.trim().is_empty() {
            return Err(DomainError::InvalidEndpoint(
                "model identifier cannot be empty".to_string(),
            ));
        }
        if region.trim().is_empty() {
            return Err(DomainError::InvalidEndpoint(
                "region cannot be empty".to_string(),
            ));
        }

        Ok(Self { model_id, region })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl Default for ModelEndpoint {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl std::fmt::Display for ModelEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.model_id, self.region)
    }
}
