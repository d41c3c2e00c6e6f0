//! Application layer for bedrock-ask
//!
//! This crate contains the chain use case and the port definitions it
//! depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{ChannelProgress, NoProgress, ProgressNotifier, RecordingProgress},
};
pub use use_cases::run_chain::{RunChainError, RunChainUseCase};
