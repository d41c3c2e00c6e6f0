//! Prompt construction

pub mod template;

pub use template::{DEFAULT_TEMPLATE, PromptTemplate, QUESTION_VARIABLE, TemplateVariables};
