//! LLM provider adapters

pub mod bedrock;
