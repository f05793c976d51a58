//! Command implementations for the SPX CLI.
//!
//! Provides subcommands for serving the dashboard over HTTP and for running
//! the chart handler headless against a market data CSV.

use clap::Subcommand;
use spx_core::PriceField;
use std::path::PathBuf;

pub mod error;
pub mod report;
pub mod serve;

/// Market data loaded when no `--csv` is given.
pub const DEFAULT_CSV: &str = "fixtures/SP500_data_.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;
/// Output of `dx build` for the dashboard app.
pub const DEFAULT_STATIC_DIR: &str = "sp500-dashboard/dist";

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dashboard bundle and the figures API
    Serve {
        /// Path to the market data CSV
        #[arg(short = 'c', long, default_value = DEFAULT_CSV)]
        csv: PathBuf,

        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory holding the built dashboard bundle
        #[arg(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
    },

    /// Print row count and date bounds of a market data CSV
    Summary {
        /// Path to the market data CSV
        #[arg(short = 'c', long, default_value = DEFAULT_CSV)]
        csv: PathBuf,
    },

    /// Print the line and bar figures for a field and date range as JSON
    Figures {
        /// Path to the market data CSV
        #[arg(short = 'c', long, default_value = DEFAULT_CSV)]
        csv: PathBuf,

        /// Price field for the line chart (Open or Close)
        #[arg(short = 'f', long, default_value_t = PriceField::Close)]
        field: PriceField,

        /// First date to include (YYYY-MM-DD); open when omitted
        #[arg(short = 's', long)]
        start: Option<String>,

        /// Last date to include (YYYY-MM-DD); open when omitted
        #[arg(short = 'e', long)]
        end: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            csv,
            host,
            port,
            static_dir,
        } => {
            serve::run_serve(serve::ServeConfig {
                csv_path: csv,
                host,
                port,
                static_dir,
            })
            .await
        }
        Command::Summary { csv } => report::run_summary(&csv),
        Command::Figures {
            csv,
            field,
            start,
            end,
        } => report::run_figures(&csv, field, start.as_deref(), end.as_deref()),
    }
}
