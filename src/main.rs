use clap::Parser;
use pagepilot_cli::cli::{self, telemetry, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let cli = Cli::parse();
    cli::dispatch(cli).await
}
