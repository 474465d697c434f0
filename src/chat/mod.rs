//! The conversation transcript, its backing file, and completion
//! turns that extend it.
mod error;
mod file;
mod log;
mod models;
mod turn;

pub use error::ChatError;
pub use file::{HistoryFile, PersistenceError};
pub use log::ChatLog;
pub use models::{INITIAL_ID, Message, Role, SEED_ID, Transcript, validate_role};
pub use turn::run_turn;
