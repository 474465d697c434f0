use anyhow::{Context, Result};

use crate::chat::HistoryFile;
use crate::core::AppConfig;

pub async fn run(config: AppConfig) -> Result<()> {
    let file = HistoryFile::new(&config.history_path);
    file.erase()
        .await
        .with_context(|| format!("Failed to delete {}", file.path().display()))?;
    println!("Deleted {}", file.path().display());
    Ok(())
}
