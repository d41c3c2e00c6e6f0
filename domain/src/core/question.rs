//! Question value object

use serde::{Deserialize, Serialize};

/// A question submitted by the user (Value Object)
///
/// Created per submission and discarded once the answer is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if the content is empty.
    ///
    /// Whitespace counts as content and is kept verbatim.
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
