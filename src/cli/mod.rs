use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod history;
pub mod reset;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, env = "PORT", default_value = "3000")]
        port: String,
    },
    /// Chat from the terminal using the same history file
    Chat {},
    /// Print the saved transcript
    History {
        /// Print raw JSON instead of formatted messages
        #[arg(long, action, default_value = "false")]
        json: bool,
    },
    /// Delete the saved transcript
    Reset {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Chat {}) => {
            chat::run(config).await?;
        }
        Some(Command::History { json }) => {
            history::run(json, config).await?;
        }
        Some(Command::Reset {}) => {
            reset::run(config).await?;
        }
        None => {}
    }

    Ok(())
}
