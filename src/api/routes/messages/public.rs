//! Public types for the messages API
use axum::extract::{FromRequestParts, Path};
use http::request::Parts;
use serde::Deserialize;

use crate::api::public::ApiError;
use crate::chat::{ChatError, Role};

#[derive(Deserialize, Debug)]
pub struct MessageRequest {
    pub role: Role,
    pub content: String,
}

/// Message id taken from the path. Anything that isn't a valid id is
/// reported as a missing message.
#[derive(Debug, Clone, Copy)]
pub struct MessageId(pub u64);

impl<S> FromRequestParts<S> for MessageId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        match raw.parse() {
            Ok(id) => Ok(MessageId(id)),
            Err(_) => Err(ApiError::from(ChatError::InvalidId(raw))),
        }
    }
}
