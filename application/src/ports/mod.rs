//! Port definitions (interfaces) for the application layer.
//!
//! Adapters implementing these live in the infrastructure and
//! presentation crates.

pub mod llm_gateway;
pub mod progress;
