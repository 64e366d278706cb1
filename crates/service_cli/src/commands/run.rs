//! Run command: simulate, aggregate, persist.

use std::time::Instant;

use clap::Args;
use tracing::info;

use bondsim_core::PrizeCatalog;
use bondsim_engine::{
    write_parquet, AggregatedDataset, FailureMode, Orchestrator, RunConfig,
};

use crate::commands::table::load_tiers;
use crate::Result;

/// Arguments for `bondsim run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Bonds held
    #[arg(long, default_value = "100000")]
    pub holding: u32,

    /// Winning odds denominator (1-in-N per bond per draw)
    #[arg(long, default_value = "21000")]
    pub odds: u32,

    /// Number of independent trials
    #[arg(short = 'n', long, default_value = "50000")]
    pub num_trials: u32,

    /// Monthly draws per trial
    #[arg(long, default_value = "12")]
    pub periods: u32,

    /// Worker pool size (default: one per logical CPU)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Base seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Prize table JSON file (amount -> per-draw count)
    #[arg(short, long)]
    pub tiers: Option<String>,

    /// Record failed trials as omissions instead of aborting
    #[arg(long)]
    pub tolerant: bool,

    /// Output Parquet file
    #[arg(short, long, default_value = "bond_sim.parquet")]
    pub output: String,
}

/// Run the simulation described by `args` and write the dataset.
pub fn run(args: &RunArgs) -> Result<()> {
    let tiers = load_tiers(args.tiers.as_deref())?;
    let catalog = PrizeCatalog::new(tiers, args.odds)?;

    let mut builder = RunConfig::builder()
        .catalog(catalog)
        .holding_size(args.holding)
        .periods_per_trial(args.periods)
        .num_trials(args.num_trials);
    if let Some(workers) = args.workers {
        builder = builder.worker_count(workers);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if args.tolerant {
        builder = builder.failure_mode(FailureMode::Tolerant);
    }
    let config = builder.build()?;
    let num_trials = config.num_trials();
    let periods = config.periods_per_trial();

    let start = Instant::now();
    let report = Orchestrator::new(config).run()?;
    info!("completed {} trials in {:.2} s", report.records.len(), start.elapsed().as_secs_f64());

    let start = Instant::now();
    let dataset = AggregatedDataset::from_records(&report.records);
    info!("aggregated results in {:.2} s", start.elapsed().as_secs_f64());

    let start = Instant::now();
    write_parquet(&dataset, args.output.as_ref())?;
    info!("wrote output file in {:.2} s", start.elapsed().as_secs_f64());

    println!("base seed:        {}", report.base_seed);
    println!("trials completed: {}", report.records.len());
    if !report.failures.is_empty() {
        println!("trials omitted:   {}", report.failures.len());
        for failure in &report.failures {
            println!("  trial {}: {}", failure.trial_id, failure.cause);
        }
    }
    println!("winning rows:     {}", dataset.len());
    println!(
        "mean winners/draw: {:.4}",
        dataset.mean_winners_per_draw(num_trials, periods)
    );
    println!(
        "mean winnings/trial: £{:.2}",
        dataset.total_prize() as f64 / num_trials as f64
    );
    println!("output: {}", args.output);
    Ok(())
}
