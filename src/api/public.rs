//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::chat::ChatError;
use crate::openai::CompletionError;

// Errors

#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0.downcast_ref::<ChatError>() {
            Some(ChatError::NotFound(_) | ChatError::InvalidId(_)) => StatusCode::NOT_FOUND,
            Some(ChatError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(ChatError::Completion(CompletionError::Timeout(_))) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Always log the error
        if status.is_server_error() {
            tracing::error!("{}", self.0);
        } else {
            tracing::debug!("{}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` or `Result<_, ChatError>` to turn them into
/// `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Shared response bodies

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

// Re-export public types from each route

pub mod history {
    pub use crate::api::routes::history::public::*;
}

pub mod messages {
    pub use crate::api::routes::messages::public::*;
}
