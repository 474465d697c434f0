//! Router for the transcript as a whole

use axum::{Json, Router, extract::State, routing::get};

use super::public;
use crate::api::public::{ApiError, SuccessResponse};
use crate::api::state::SharedState;
use crate::chat::Message;

/// Get the full transcript in arrival order
async fn history(State(state): State<SharedState>) -> Json<Vec<Message>> {
    Json(state.log.read().await.transcript().list())
}

/// Clear the transcript and delete the history file. The seed
/// message is put back right away.
async fn reset_history(
    State(state): State<SharedState>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.log.write().await.reset().await?;
    Ok(SuccessResponse::ok())
}

/// Report whether the history file is in sync with memory
async fn status(State(state): State<SharedState>) -> Json<public::StatusResponse> {
    let log = state.log.read().await;
    Json(public::StatusResponse {
        dirty: log.is_dirty(),
        message_count: log.transcript().len(),
        next_id: log.transcript().next_id(),
        history_path: log.file().path().display().to_string(),
    })
}

/// Create the history router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(history).delete(reset_history))
}

/// Create the status router
pub fn status_router() -> Router<SharedState> {
    Router::new().route("/status", get(status))
}
