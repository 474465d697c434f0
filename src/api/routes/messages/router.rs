//! Router for single message CRUD

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use super::public::{self, MessageId};
use crate::api::public::{ApiError, SuccessResponse};
use crate::api::state::SharedState;
use crate::chat::{Message, validate_role};

/// Get a single message by ID
async fn get_message(
    State(state): State<SharedState>,
    MessageId(id): MessageId,
) -> Result<Json<Message>, ApiError> {
    let log = state.log.read().await;
    let msg = log.transcript().get(id)?.clone();
    Ok(Json(msg))
}

/// Append a message to the end of the transcript
async fn create_message(
    State(state): State<SharedState>,
    Json(payload): Json<public::MessageRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    validate_role(&payload.role, state.config.strict_roles)?;
    state
        .log
        .write()
        .await
        .append(payload.role, &payload.content)
        .await?;
    Ok(SuccessResponse::ok())
}

/// Replace the role and content of an existing message
async fn update_message(
    State(state): State<SharedState>,
    MessageId(id): MessageId,
    Json(payload): Json<public::MessageRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    validate_role(&payload.role, state.config.strict_roles)?;
    state
        .log
        .write()
        .await
        .update(id, payload.role, &payload.content)
        .await?;
    Ok(SuccessResponse::ok())
}

/// Create the messages router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(create_message))
        .route("/{id}", get(get_message).put(update_message))
}
