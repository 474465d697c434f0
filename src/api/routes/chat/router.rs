//! Router for the chat API

use axum::{Json, Router, extract::State, routing::post};

use crate::api::public::{ApiError, SuccessResponse};
use crate::api::state::SharedState;
use crate::chat::run_turn;

/// Run one completion turn against the current transcript and append
/// the assistant's reply
async fn chat_handler(State(state): State<SharedState>) -> Result<Json<SuccessResponse>, ApiError> {
    let params = state.config.completion_params();
    let reply = run_turn(&state.log, &params).await?;
    tracing::info!("Assistant replied with message {}", reply.id);
    Ok(SuccessResponse::ok())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
