//! Type conversions between AWS Bedrock SDK and domain types
//!
//! Builds Converse API requests from a prompt, extracts generated text from
//! responses and stream events, and maps SDK errors onto [`GatewayError`].

use ask_application::GatewayError;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::types as bedrock;

// ─── Domain → Bedrock ────────────────────────────────────────────

/// Wrap a prompt as the single user message of a Converse request.
pub fn user_message(prompt: &str) -> Result<bedrock::Message, GatewayError> {
    bedrock::Message::builder()
        .role(bedrock::ConversationRole::User)
        .content(bedrock::ContentBlock::Text(prompt.to_string()))
        .build()
        .map_err(|e| GatewayError::InvalidRequest(format!("Failed to build message: {}", e)))
}

/// Build the inference settings sent with every request.
pub fn inference_config(
    max_tokens: u32,
    temperature: Option<f32>,
    top_p: Option<f32>,
) -> bedrock::InferenceConfiguration {
    bedrock::InferenceConfiguration::builder()
        .max_tokens(i32::try_from(max_tokens).unwrap_or(i32::MAX))
        .set_temperature(temperature)
        .set_top_p(top_p)
        .build()
}

// ─── Bedrock → Domain ────────────────────────────────────────────

/// Concatenate the text blocks of a Converse response.
///
/// Non-text blocks are skipped. A response without a message yields "".
pub fn output_text(output: &bedrock::ConverseOutput) -> String {
    match output {
        bedrock::ConverseOutput::Message(message) => message
            .content()
            .iter()
            .filter_map(|block| match block {
                bedrock::ContentBlock::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect(),
        _ => String::new(),
    }
}

/// Text carried by a stream event, if it is a text delta.
pub fn stream_text_delta(event: &bedrock::ConverseStreamOutput) -> Option<&str> {
    match event {
        bedrock::ConverseStreamOutput::ContentBlockDelta(delta_event) => {
            match delta_event.delta()? {
                bedrock::ContentBlockDelta::Text(text) => Some(text.as_str()),
                _ => None,
            }
        }
        _ => None,
    }
}

// ─── Errors ──────────────────────────────────────────────────────

/// Map an AWS error code onto the gateway taxonomy.
pub fn classify_service_error(code: Option<&str>, message: String) -> GatewayError {
    match code {
        Some(
            "AccessDeniedException"
            | "UnrecognizedClientException"
            | "InvalidSignatureException"
            | "ExpiredTokenException"
            | "MissingAuthenticationTokenException",
        ) => GatewayError::AuthenticationFailed(message),
        Some("ValidationException" | "ResourceNotFoundException") => {
            GatewayError::InvalidRequest(message)
        }
        _ => GatewayError::ServiceUnavailable(message),
    }
}

/// Map a failure that never reached the service.
///
/// Identity resolution happens just before dispatch, so a missing or broken
/// credential chain surfaces here rather than as a service error.
pub fn classify_transport_failure(message: String) -> GatewayError {
    if message.to_ascii_lowercase().contains("credential") {
        GatewayError::AuthenticationFailed(message)
    } else {
        GatewayError::ServiceUnavailable(message)
    }
}

/// Convert a Bedrock SDK error to a GatewayError.
///
/// Works for both the request errors of `converse`/`converse_stream` and the
/// errors raised while reading the event stream.
pub fn convert_sdk_error<E, R>(err: &SdkError<E, R>) -> GatewayError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(service_err) => {
            let inner = service_err.err();
            let message = inner
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| DisplayErrorContext(inner).to_string());
            classify_service_error(inner.code(), format!("Bedrock: {}", message))
        }
        SdkError::ConstructionFailure(_) => GatewayError::InvalidRequest(format!(
            "Bedrock request could not be built: {}",
            DisplayErrorContext(err)
        )),
        _ => classify_transport_failure(format!("Bedrock SDK error: {}", DisplayErrorContext(err))),
    }
}
