//! Run Chain use case.
//!
//! Fills the prompt template with the user's question, submits the prompt
//! through the [`LlmGateway`], and returns the generated text.
//!
//! The chain adds no events of its own: an observer sees exactly what the
//! gateway emits. Failures from the template or the gateway propagate
//! unchanged.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use ask_domain::{DomainError, PromptTemplate, TemplateVariables};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running the chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunChainError {
    #[error(transparent)]
    Template(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Template + gateway, bound once at startup and shared read-only.
#[derive(Clone)]
pub struct RunChainUseCase {
    gateway: Arc<dyn LlmGateway>,
    template: PromptTemplate,
}

impl RunChainUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, template: PromptTemplate) -> Self {
        Self { gateway, template }
    }

    /// Answer a single question.
    pub async fn run(
        &self,
        question: &str,
        observer: Option<&dyn ProgressNotifier>,
    ) -> Result<String, RunChainError> {
        let prompt = self.template.fill_question(question)?;
        self.submit(prompt, observer).await
    }

    /// Run with an arbitrary variable mapping, for templates with more slots.
    pub async fn run_with_inputs(
        &self,
        inputs: &TemplateVariables,
        observer: Option<&dyn ProgressNotifier>,
    ) -> Result<String, RunChainError> {
        let prompt = self.template.fill(inputs)?;
        self.submit(prompt, observer).await
    }

    async fn submit(
        &self,
        prompt: String,
        observer: Option<&dyn ProgressNotifier>,
    ) -> Result<String, RunChainError> {
        info!(endpoint = %self.gateway.endpoint(), "Running chain");
        debug!(prompt_bytes = prompt.len(), "Prompt filled");

        let answer = match observer {
            Some(progress) => self.gateway.generate_with_progress(&prompt, progress).await?,
            None => self.gateway.generate_with_progress(&prompt, &NoProgress).await?,
        };

        debug!(answer_bytes = answer.len(), "Chain finished");
        Ok(answer)
    }
}
