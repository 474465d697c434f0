use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::RwLock;

use crate::chat::{ChatLog, HistoryFile, Role, run_turn};
use crate::core::AppConfig;

pub async fn run(config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new().context("Editor failed")?;

    let log = ChatLog::open(
        HistoryFile::new(&config.history_path),
        &config.system_message,
    )
    .await;
    println!(
        "Continuing {} ({} messages)",
        log.file().path().display(),
        log.transcript().len()
    );
    let log = RwLock::new(log);
    let params = config.completion_params();

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                log.write().await.append(Role::User, line).await?;
                match run_turn(&log, &params).await {
                    Ok(msg) => println!("{}", msg.content),
                    // The user message is kept so the turn can be retried
                    Err(err) => println!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
