//! Presentation layer for bedrock-ask
//!
//! This crate contains CLI definitions, the web page, the one-shot
//! console surface, output formatters and progress reporters.

pub mod cli;
pub mod console;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use console::ask_once;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ConsoleProgress, SimpleProgress};
pub use web::{AppError, AppState, PageRenderer, router, serve};
