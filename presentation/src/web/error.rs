//! Error responses for the web surface
//!
//! Chain failures are not recovered from. They are turned into a plain-text
//! error response carrying the original message.

use ask_application::{GatewayError, RunChainError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Chain(#[from] RunChainError),

    #[error("Failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Chain(RunChainError::Gateway(GatewayError::ServiceUnavailable(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Chain(RunChainError::Gateway(GatewayError::AuthenticationFailed(_))) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (self.status(), format!("Error: {}", self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ask_domain::DomainError;

    #[test]
    fn status_mapping() {
        let unavailable: AppError =
            RunChainError::from(GatewayError::ServiceUnavailable("down".to_string())).into();
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let auth: AppError =
            RunChainError::from(GatewayError::AuthenticationFailed("expired".to_string())).into();
        assert_eq!(auth.status(), StatusCode::BAD_GATEWAY);

        let missing: AppError =
            RunChainError::from(DomainError::MissingVariable("question".to_string())).into();
        assert_eq!(missing.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn message_is_passed_through() {
        let err: AppError =
            RunChainError::from(GatewayError::InvalidRequest("bad model id".to_string())).into();
        assert_eq!(err.to_string(), "Invalid request: bad model id");
    }
}
