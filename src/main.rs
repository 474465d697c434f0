use anyhow::Result;
use chatpad::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
