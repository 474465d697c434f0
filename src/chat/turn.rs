use tokio::sync::RwLock;

use super::{ChatError, ChatLog, Message};
use crate::openai::{CompletionParams, complete};

/// Runs one completion turn against the current transcript and
/// appends the reply.
///
/// The lock is not held while waiting on the remote so reads are not
/// blocked for the length of the call. A failed call leaves the
/// transcript untouched.
pub async fn run_turn(
    log: &RwLock<ChatLog>,
    params: &CompletionParams<'_>,
) -> Result<Message, ChatError> {
    let history = log.read().await.transcript().list();

    let reply = complete(&history, params).await.inspect_err(|e| {
        tracing::error!("Completion turn failed: {}", e);
    })?;

    let mut log = log.write().await;
    log.append(reply.role, &reply.content).await
}
