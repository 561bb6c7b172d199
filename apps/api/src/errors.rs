use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("Evaluation request failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Could not parse evaluation response as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Input problems the user can fix by resubmitting the form.
    pub fn is_user_input(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Upload(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Upload(e) => (e.status(), "VALIDATION_ERROR"),
            AppError::Upstream(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
            }
            AppError::Parse(e) => {
                tracing::error!("Evaluation parse error: {e}");
                (StatusCode::BAD_GATEWAY, "PARSE_ERROR")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let message = match &self {
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_user_input() {
        assert!(AppError::Validation("x".into()).is_user_input());
        assert!(!AppError::Upstream(LlmError::EmptyContent).is_user_input());
    }

    #[test]
    fn test_status_codes() {
        let parse_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream(LlmError::EmptyContent)
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Parse(parse_err).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_message_carries_cause() {
        let err = AppError::Upstream(LlmError::Api {
            status: 403,
            message: "API key not valid".into(),
        });
        assert_eq!(
            err.to_string(),
            "Evaluation request failed: API error (status 403): API key not valid"
        );
    }
}
