//! Parallel trial execution.
//!
//! The orchestrator fans `num_trials` independent trial simulations out
//! over an explicitly sized rayon pool. Each trial derives its own seed
//! from the run-level base seed and its trial id, executes atomically on
//! one worker, and returns a [`TrialRecord`] tagged with its id; nothing
//! is inferred from completion order. A fixed base seed therefore gives
//! bitwise-identical results for any worker count.

use bondsim_core::{simulate_trial, DrawError, DrawRng, TrialRecord};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::{FailureMode, RunConfig};
use crate::error::EngineError;

/// One tolerated trial failure: which trial was omitted and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialFailure {
    /// Identifier of the omitted trial.
    pub trial_id: u32,
    /// The draw failure that ended it.
    pub cause: DrawError,
}

/// Outcome of a simulation run.
///
/// In fail-fast mode `failures` is always empty (a failed trial ends the
/// run with an error instead). In tolerant mode the surviving records and
/// the omission list travel together, so a partial dataset can never be
/// mistaken for a complete one.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Completed trials, one per surviving trial id, in trial-id order.
    pub records: Vec<TrialRecord>,
    /// Trials omitted under [`FailureMode::Tolerant`].
    pub failures: Vec<TrialFailure>,
    /// The base seed actually used (logged for reproducing unseeded runs).
    pub base_seed: u64,
}

/// Runs independent trials across a bounded worker pool.
///
/// # Examples
///
/// ```rust
/// use bondsim_engine::{Orchestrator, RunConfig};
///
/// let config = RunConfig::builder()
///     .holding_size(10_000)
///     .num_trials(8)
///     .worker_count(2)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let report = Orchestrator::new(config).run().unwrap();
/// assert_eq!(report.records.len(), 8);
/// ```
pub struct Orchestrator {
    config: RunConfig,
}

impl Orchestrator {
    /// Creates an orchestrator for the given run configuration.
    #[inline]
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Returns the run configuration.
    #[inline]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Executes the run and collects every trial's record.
    ///
    /// # Errors
    ///
    /// - `EngineError::Pool` if the worker pool cannot be built.
    /// - `EngineError::Trial` on the first failed trial in fail-fast
    ///   mode; remaining trials are abandoned and no partial dataset is
    ///   returned.
    pub fn run(&self) -> Result<RunReport, EngineError> {
        let config = &self.config;
        let base_seed = config.seed().unwrap_or_else(rand::random);
        info!(
            base_seed,
            num_trials = config.num_trials(),
            worker_count = config.worker_count(),
            holding_size = config.holding_size(),
            periods = config.periods_per_trial(),
            "starting simulation run"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_count())
            .build()?;

        let run_one = |trial_id: u32| -> Result<TrialRecord, DrawError> {
            let mut rng = DrawRng::for_trial(base_seed, trial_id);
            let outcomes = simulate_trial(
                config.holding_size(),
                config.periods_per_trial(),
                config.catalog(),
                &mut rng,
            )?;
            Ok(TrialRecord { trial_id, outcomes })
        };

        let report = match config.failure_mode() {
            FailureMode::FailFast => {
                // Collecting into Result short-circuits: rayon abandons
                // unstarted trials once one has failed.
                let records: Vec<TrialRecord> = pool.install(|| {
                    (0..config.num_trials())
                        .into_par_iter()
                        .map(|trial_id| {
                            run_one(trial_id)
                                .map_err(|source| EngineError::Trial { trial_id, source })
                        })
                        .collect::<Result<_, _>>()
                })?;
                RunReport {
                    records,
                    failures: Vec::new(),
                    base_seed,
                }
            }
            FailureMode::Tolerant => {
                let outcomes: Vec<Result<TrialRecord, TrialFailure>> = pool.install(|| {
                    (0..config.num_trials())
                        .into_par_iter()
                        .map(|trial_id| {
                            run_one(trial_id)
                                .map_err(|cause| TrialFailure { trial_id, cause })
                        })
                        .collect()
                });
                let mut records = Vec::with_capacity(outcomes.len());
                let mut failures = Vec::new();
                for outcome in outcomes {
                    match outcome {
                        Ok(record) => records.push(record),
                        Err(failure) => failures.push(failure),
                    }
                }
                if !failures.is_empty() {
                    warn!(
                        failed = failures.len(),
                        completed = records.len(),
                        "run completed with omitted trials"
                    );
                }
                RunReport {
                    records,
                    failures,
                    base_seed,
                }
            }
        };

        info!(
            completed = report.records.len(),
            total_outcomes = report.records.iter().map(TrialRecord::len).sum::<usize>(),
            "simulation run finished"
        );
        Ok(report)
    }
}
