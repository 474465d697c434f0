use std::sync::Arc;

use tokio::sync::RwLock;

use crate::chat::{ChatLog, HistoryFile};
use crate::core::AppConfig;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    // Writers hold the lock across the save so only one mutation is
    // ever in flight
    pub log: RwLock<ChatLog>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(log: ChatLog, config: AppConfig) -> Self {
        Self {
            log: RwLock::new(log),
            config,
        }
    }

    /// Loads the transcript from the configured history file.
    pub async fn load(config: AppConfig) -> Self {
        let file = HistoryFile::new(&config.history_path);
        let log = ChatLog::open(file, &config.system_message).await;
        Self::new(log, config)
    }
}
