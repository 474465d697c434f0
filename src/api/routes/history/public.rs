//! Public types for the history API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    // In-memory transcript has changes the history file is missing
    pub dirty: bool,
    pub message_count: usize,
    pub next_id: u64,
    pub history_path: String,
}
