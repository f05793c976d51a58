//! SPX CLI - serve the S&P 500 dashboard or query its figures headless.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "spx-cli",
    version,
    about = "S&P 500 market data dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: spx_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("spx-cli starting");
    spx_cmd::run(cli.command).await
}
