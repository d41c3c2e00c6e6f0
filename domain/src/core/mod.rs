//! Core domain concepts shared across the crate.
//!
//! - [`question::Question`]: a validated user question
//! - [`endpoint::ModelEndpoint`]: which hosted model answers, and in which region
//! - [`error::DomainError`]: domain-level errors

pub mod endpoint;
pub mod error;
pub mod question;
