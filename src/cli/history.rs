use anyhow::Result;

use crate::chat::{ChatLog, HistoryFile};
use crate::core::AppConfig;

pub async fn run(json: bool, config: AppConfig) -> Result<()> {
    let log = ChatLog::open(
        HistoryFile::new(&config.history_path),
        &config.system_message,
    )
    .await;
    let messages = log.transcript().list();

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    for msg in messages {
        println!("[{}] {}:\n{}\n", msg.id, msg.role.as_str().to_uppercase(), msg.content);
    }

    Ok(())
}
