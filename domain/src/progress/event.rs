//! Progress events emitted while a model generates text.
//!
//! [`ProgressEvent`] is what the display surfaces render live while waiting
//! for the final answer. It carries no structure beyond its text.

use serde::Serialize;

/// An intermediate signal emitted during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// A lifecycle label, e.g. "Thinking..." or "Complete!".
    Status(String),
    /// A chunk of generated text.
    Delta(String),
}

impl ProgressEvent {
    pub fn status(text: impl Into<String>) -> Self {
        ProgressEvent::Status(text.into())
    }

    pub fn delta(text: impl Into<String>) -> Self {
        ProgressEvent::Delta(text.into())
    }

    /// The renderable text of this event.
    pub fn text(&self) -> &str {
        match self {
            ProgressEvent::Status(s) | ProgressEvent::Delta(s) => s,
        }
    }
}

impl std::fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
