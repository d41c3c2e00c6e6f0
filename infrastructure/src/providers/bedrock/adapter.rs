//! Bedrock LLM gateway
//!
//! Implements [`LlmGateway`] on top of the Converse / ConverseStream APIs.
//! Handles AWS credential initialization and client creation.

use super::types;
use ask_application::{GatewayError, LlmGateway, ProgressNotifier};
use ask_domain::{BedrockProviderConfig, CredentialSource, ModelEndpoint, ProgressEvent};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::config::Credentials;
use aws_sdk_bedrockruntime::types as bedrock;
use tracing::{debug, info};

/// Status shown when a request is sent.
pub const STATUS_THINKING: &str = "Thinking...";
/// Status shown when generation finishes.
pub const STATUS_COMPLETE: &str = "Complete!";

pub struct BedrockLlmGateway {
    client: BedrockClient,
    endpoint: ModelEndpoint,
    max_tokens: u32,
    temperature: Option<f32>,
    top_p: Option<f32>,
    streaming: bool,
}

impl BedrockLlmGateway {
    /// Create a new Bedrock gateway.
    ///
    /// Resolves the AWS configuration for the configured region and
    /// credential source. Credentials are loaded lazily by the SDK, so a
    /// broken credential chain is reported on the first request.
    pub async fn new(config: &BedrockProviderConfig) -> Self {
        let region = aws_config::Region::new(config.endpoint.region().to_string());
        let mut aws_config_loader =
            aws_config::defaults(aws_config::BehaviorVersion::latest()).region(region);

        match &config.credentials {
            CredentialSource::Environment => {}
            CredentialSource::Profile(profile) => {
                aws_config_loader = aws_config_loader.profile_name(profile);
            }
            CredentialSource::Static {
                access_key_id,
                secret_access_key,
                session_token,
            } => {
                aws_config_loader = aws_config_loader.credentials_provider(Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token.clone(),
                    None,
                    "bedrock-ask-config",
                ));
            }
        }

        let aws_config = aws_config_loader.load().await;
        info!(
            endpoint = %config.endpoint,
            credentials = %config.credentials.describe(),
            streaming = config.streaming,
            "Bedrock gateway initialized"
        );

        Self::with_client(BedrockClient::new(&aws_config), config)
    }

    /// Wrap an already configured client.
    pub fn with_client(client: BedrockClient, config: &BedrockProviderConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
            streaming: config.streaming,
        }
    }

    fn inference_config(&self) -> bedrock::InferenceConfiguration {
        types::inference_config(self.max_tokens, self.temperature, self.top_p)
    }

    /// Single Converse API call.
    async fn converse(&self, prompt: &str) -> Result<String, GatewayError> {
        debug!(model = %self.endpoint.model_id(), "Calling Bedrock Converse API");

        let response = self
            .client
            .converse()
            .model_id(self.endpoint.model_id())
            .messages(types::user_message(prompt)?)
            .inference_config(self.inference_config())
            .send()
            .await
            .map_err(|e| types::convert_sdk_error(&e))?;

        debug!(stop_reason = ?response.stop_reason(), "Bedrock Converse API returned");

        Ok(response.output().map(types::output_text).unwrap_or_default())
    }

    /// ConverseStream API call, forwarding each text delta as it arrives.
    async fn converse_stream(
        &self,
        prompt: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, GatewayError> {
        debug!(model = %self.endpoint.model_id(), "Calling Bedrock ConverseStream API");

        let mut output = self
            .client
            .converse_stream()
            .model_id(self.endpoint.model_id())
            .messages(types::user_message(prompt)?)
            .inference_config(self.inference_config())
            .send()
            .await
            .map_err(|e| types::convert_sdk_error(&e))?;

        let mut text = String::new();
        while let Some(event) = output
            .stream
            .recv()
            .await
            .map_err(|e| types::convert_sdk_error(&e))?
        {
            if let Some(chunk) = types::stream_text_delta(&event) {
                progress.on_event(&ProgressEvent::delta(chunk));
                text.push_str(chunk);
            }
        }

        debug!(bytes = text.len(), "Bedrock stream closed");
        Ok(text)
    }
}

#[async_trait]
impl LlmGateway for BedrockLlmGateway {
    fn endpoint(&self) -> &ModelEndpoint {
        &self.endpoint
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.converse(prompt).await
    }

    async fn generate_with_progress(
        &self,
        prompt: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, GatewayError> {
        progress.on_event(&ProgressEvent::status(STATUS_THINKING));

        let text = if self.streaming {
            self.converse_stream(prompt, progress).await?
        } else {
            self.converse(prompt).await?
        };

        progress.on_event(&ProgressEvent::status(STATUS_COMPLETE));
        Ok(text)
    }
}
