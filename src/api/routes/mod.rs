//! API routes module

pub mod chat;
pub mod history;
pub mod messages;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Full transcript and reset
        .nest("/history", history::router())
        // Single message CRUD
        .nest("/messages", messages::router())
        // Completion turns
        .nest("/chat", chat::router())
        .merge(history::status_router())
}
