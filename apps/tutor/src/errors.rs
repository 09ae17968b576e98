use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::tutor::policy::Action;
use crate::tutor::ExerciseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as a flat `{ "error": "..." }` body. Generation
/// failures never leak their fine-grained kind to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid action")]
    InvalidAction,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{action} generation failed: {source}")]
    Generation {
        action: Action,
        #[source]
        source: ExerciseError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidAction => (StatusCode::BAD_REQUEST, "Invalid action".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Generation { action, source } => {
                tracing::error!(%action, "Generation error: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    action.failure_message().to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_action_is_bad_request() {
        let response = AppError::InvalidAction.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid action" }));
    }

    #[tokio::test]
    async fn test_generation_error_hides_failure_kind() {
        let response = AppError::Generation {
            action: Action::Vocabulary,
            source: ExerciseError::NotFound,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to generate word exercises" })
        );
    }
}
