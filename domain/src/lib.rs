//! Domain layer for bedrock-ask
//!
//! This crate contains the value objects the rest of the workspace passes
//! around. It has no dependencies on infrastructure or presentation concerns.
//!
//! - [`PromptTemplate`]: the fixed prompt with its `question` slot
//! - [`Question`]: one user submission
//! - [`ModelEndpoint`]: which hosted model answers, and in which region
//! - [`ProgressEvent`]: what gets rendered live during generation

pub mod core;
pub mod progress;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use core::{
    endpoint::{DEFAULT_MODEL_ID, DEFAULT_REGION, ModelEndpoint},
    error::DomainError,
    question::Question,
};
pub use progress::event::ProgressEvent;
pub use prompt::{DEFAULT_TEMPLATE, PromptTemplate, QUESTION_VARIABLE, TemplateVariables};
pub use providers::{BedrockProviderConfig, CredentialSource};
