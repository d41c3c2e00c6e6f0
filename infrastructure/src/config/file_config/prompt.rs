//! Prompt configuration from TOML (`[prompt]` section)

use super::ConfigError;
use ask_domain::{DEFAULT_TEMPLATE, PromptTemplate, QUESTION_VARIABLE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Template text; `{name}` marks a slot, `{{`/`}}` are literal braces
    pub template: String,
    /// Declared slots. Inferred from the template when omitted.
    pub input_variables: Option<Vec<String>>,
}

impl Default for FilePromptConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            input_variables: None,
        }
    }
}

impl FilePromptConfig {
    pub fn to_template(&self) -> Result<PromptTemplate, ConfigError> {
        let template = match &self.input_variables {
            Some(vars) => PromptTemplate::new(vars.iter().cloned(), self.template.clone())?,
            None => PromptTemplate::from_template(self.template.clone())?,
        };

        // The display surfaces only ever supply the question.
        if template.input_variables() != [QUESTION_VARIABLE] {
            return Err(ConfigError::Invalid(format!(
                "prompt.template must use exactly one slot named '{QUESTION_VARIABLE}' (found: [{}])",
                template.input_variables().join(", ")
            )));
        }
        Ok(template)
    }
}
