use thiserror::Error;

use super::PersistenceError;
use crate::openai::CompletionError;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message {0} not found")]
    NotFound(u64),

    #[error("Message {0} not found")]
    InvalidId(String),

    #[error("No message ids left")]
    IdsExhausted,

    #[error("Invalid message: {0}")]
    Validation(String),

    #[error("Failed to save history: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),
}
