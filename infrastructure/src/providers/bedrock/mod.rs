//! AWS Bedrock Converse API provider
//!
//! Provides text generation through AWS IAM authentication
//! using the Bedrock Converse and ConverseStream APIs.

mod adapter;
mod types;

pub use adapter::{BedrockLlmGateway, STATUS_COMPLETE, STATUS_THINKING};
