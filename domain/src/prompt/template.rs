//! Prompt template with named slots
//!
//! A template is parsed once at construction into literal text and named
//! slots. Slots are written `{name}`; `{{` and `}}` produce literal braces.
//! Values are inserted verbatim when the template is filled.

use crate::core::error::DomainError;
use std::collections::{BTreeSet, HashMap};

/// Name of the slot the default template exposes.
pub const QUESTION_VARIABLE: &str = "question";

/// Template text used when nothing is configured.
pub const DEFAULT_TEMPLATE: &str = "Answer the following question: {question}";

/// Variables supplied when filling a template.
pub type TemplateVariables = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(String),
}

/// A parameterized prompt (Value Object)
///
/// Immutable after construction. Construction checks that the slots in the
/// text are exactly the declared input variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    source: String,
    input_variables: Vec<String>,
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse `template` and check it against `input_variables`.
    pub fn new<I, S>(input_variables: I, template: impl Into<String>) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let source = template.into();
        let input_variables: Vec<String> = input_variables.into_iter().map(Into::into).collect();
        let segments = parse(&source)?;

        let declared: BTreeSet<&str> = input_variables.iter().map(String::as_str).collect();
        let found: BTreeSet<&str> = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Slot(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect();

        if declared != found {
            let missing: Vec<&str> = declared.difference(&found).copied().collect();
            let extra: Vec<&str> = found.difference(&declared).copied().collect();
            return Err(DomainError::InvalidTemplate(format!(
                "slots do not match input variables (declared but unused: [{}], used but undeclared: [{}])",
                missing.join(", "),
                extra.join(", ")
            )));
        }

        Ok(Self {
            source,
            input_variables,
            segments,
        })
    }

    /// Parse `template`, taking its input variables from the slots it contains.
    pub fn from_template(template: impl Into<String>) -> Result<Self, DomainError> {
        let source = template.into();
        let mut seen = BTreeSet::new();
        let input_variables: Vec<String> = parse(&source)?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Slot(name) if seen.insert(name.clone()) => Some(name),
                _ => None,
            })
            .collect();
        Self::new(input_variables, source)
    }

    /// Variables that must be supplied to [`fill`](Self::fill).
    pub fn input_variables(&self) -> &[String] {
        &self.input_variables
    }

    /// Substitute every slot with its value from `variables`.
    ///
    /// Extra entries in `variables` are ignored.
    pub fn fill(&self, variables: &TemplateVariables) -> Result<String, DomainError> {
        let mut prompt = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => prompt.push_str(text),
                Segment::Slot(name) => {
                    let value = variables
                        .get(name)
                        .ok_or_else(|| DomainError::MissingVariable(name.clone()))?;
                    prompt.push_str(value);
                }
            }
        }
        Ok(prompt)
    }

    /// Fill the single `question` slot.
    pub fn fill_question(&self, question: &str) -> Result<String, DomainError> {
        let mut variables = TemplateVariables::new();
        variables.insert(QUESTION_VARIABLE.to_string(), question.to_string());
        self.fill(&variables)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            input_variables: vec![QUESTION_VARIABLE.to_string()],
            segments: vec![
                Segment::Literal("Answer the following question: ".to_string()),
                Segment::Slot(QUESTION_VARIABLE.to_string()),
            ],
        }
    }
}

fn parse(template: &str) -> Result<Vec<Segment>, DomainError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(DomainError::InvalidTemplate(
                        "unterminated '{' in template".to_string(),
                    ));
                }
                if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                    return Err(DomainError::InvalidTemplate(format!(
                        "invalid slot name '{{{name}}}'"
                    )));
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Slot(name));
            }
            '}' => {
                return Err(DomainError::InvalidTemplate(
                    "single '}' encountered in template".to_string(),
                ));
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}
