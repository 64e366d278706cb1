//! bondsim - premium bond Monte Carlo simulator CLI
//!
//! Operational entry point for the simulator:
//!
//! - `bondsim run` - simulate draw-years and write the results to Parquet
//! - `bondsim tiers` - print the prize table a run would use
//!
//! Logging verbosity follows `RUST_LOG`; `--verbose` is a shorthand for
//! info-level output.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Premium bond Monte Carlo simulator
#[derive(Parser)]
#[command(name = "bondsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable info-level output without setting RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and write the aggregated dataset to Parquet
    Run(commands::run::RunArgs),

    /// Print the prize tier table a run would use
    Tiers {
        /// Prize table JSON file (amount -> per-draw count)
        #[arg(short, long)]
        tiers: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Run(args) => commands::run::run(&args),
        Commands::Tiers { tiers } => commands::tiers::run(tiers.as_deref()),
    }
}
