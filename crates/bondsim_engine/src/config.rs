//! Simulation run configuration.
//!
//! [`RunConfig`] is an immutable, validated description of one run. Use
//! [`RunConfigBuilder`] to construct instances; defaults mirror the
//! production configuration (100,000-bond holding, 1-in-21,000 odds,
//! 12 monthly draws per trial, 50,000 trials per output file).

use bondsim_core::PrizeCatalog;

use crate::error::ConfigError;

/// Maximum bond holding the simulator accepts.
pub const MAX_HOLDING: u32 = 1_000_000;

/// Maximum number of trials per run.
pub const MAX_TRIALS: u32 = 100_000_000;

/// Maximum periods (monthly draws) per trial.
pub const MAX_PERIODS: u32 = 1_200;

/// Maximum worker pool size.
pub const MAX_WORKERS: usize = 1_024;

/// Default trials per run: one 50k-trial chunk per output file.
pub const DEFAULT_TRIALS: u32 = 50_000;

/// How the orchestrator responds to a failed trial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FailureMode {
    /// Abort the run on the first failed trial; no partial dataset is
    /// emitted.
    #[default]
    FailFast,

    /// Record failed trials as omissions and keep going; the omission
    /// list travels with the run report so partial output is explicit.
    Tolerant,
}

/// Immutable configuration for one simulation run.
///
/// # Examples
///
/// ```rust
/// use bondsim_engine::RunConfig;
///
/// let config = RunConfig::builder()
///     .holding_size(50_000)
///     .num_trials(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.holding_size(), 50_000);
/// assert_eq!(config.periods_per_trial(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Prize catalog shared (read-only) by every trial.
    catalog: PrizeCatalog,
    /// Bonds held, constant across the simulated horizon.
    holding_size: u32,
    /// Monthly draws per trial.
    periods_per_trial: u32,
    /// Independent trials to run.
    num_trials: u32,
    /// Worker pool size.
    worker_count: usize,
    /// Optional base seed for reproducible runs.
    seed: Option<u64>,
    /// Failed-trial policy.
    failure_mode: FailureMode,
}

impl RunConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Returns the prize catalog for this run.
    #[inline]
    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    /// Returns the bond holding size.
    #[inline]
    pub fn holding_size(&self) -> u32 {
        self.holding_size
    }

    /// Returns the number of monthly draws per trial.
    #[inline]
    pub fn periods_per_trial(&self) -> u32 {
        self.periods_per_trial
    }

    /// Returns the number of independent trials.
    #[inline]
    pub fn num_trials(&self) -> u32 {
        self.num_trials
    }

    /// Returns the worker pool size.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Returns the optional base seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the failed-trial policy.
    #[inline]
    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }
}

/// Builder for [`RunConfig`].
///
/// Unset fields take production defaults; the prize catalog defaults to
/// the current NS&I table. Validation runs at build time so a built
/// configuration is always internally consistent.
#[derive(Clone, Debug, Default)]
pub struct RunConfigBuilder {
    catalog: Option<PrizeCatalog>,
    holding_size: Option<u32>,
    periods_per_trial: Option<u32>,
    num_trials: Option<u32>,
    worker_count: Option<usize>,
    seed: Option<u64>,
    failure_mode: FailureMode,
}

impl RunConfigBuilder {
    /// Sets the prize catalog (default: [`PrizeCatalog::nsandi_2024`]).
    #[inline]
    pub fn catalog(mut self, catalog: PrizeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the bond holding size in `[1, MAX_HOLDING]` (default: 100,000).
    #[inline]
    pub fn holding_size(mut self, holding_size: u32) -> Self {
        self.holding_size = Some(holding_size);
        self
    }

    /// Sets monthly draws per trial in `[1, MAX_PERIODS]` (default: 12).
    #[inline]
    pub fn periods_per_trial(mut self, periods: u32) -> Self {
        self.periods_per_trial = Some(periods);
        self
    }

    /// Sets the trial count in `[1, MAX_TRIALS]` (default: 50,000).
    #[inline]
    pub fn num_trials(mut self, num_trials: u32) -> Self {
        self.num_trials = Some(num_trials);
        self
    }

    /// Sets the worker pool size in `[1, MAX_WORKERS]`
    /// (default: one worker per logical CPU).
    #[inline]
    pub fn worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = Some(worker_count);
        self
    }

    /// Sets the base seed for a reproducible run. Unset means the base
    /// seed is drawn from OS entropy at run start.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the failed-trial policy (default: fail fast).
    #[inline]
    pub fn failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any parameter is out of range or the
    /// default catalog fails to build.
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => PrizeCatalog::nsandi_2024()?,
        };
        let holding_size = self.holding_size.unwrap_or(100_000);
        if holding_size == 0 || holding_size > MAX_HOLDING {
            return Err(ConfigError::InvalidHoldingSize(holding_size));
        }
        let periods_per_trial = self.periods_per_trial.unwrap_or(12);
        if periods_per_trial == 0 || periods_per_trial > MAX_PERIODS {
            return Err(ConfigError::InvalidPeriodCount(periods_per_trial));
        }
        let num_trials = self.num_trials.unwrap_or(DEFAULT_TRIALS);
        if num_trials == 0 || num_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(num_trials));
        }
        let worker_count = self.worker_count.unwrap_or_else(num_cpus::get);
        if worker_count == 0 || worker_count > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount(worker_count));
        }
        Ok(RunConfig {
            catalog,
            holding_size,
            periods_per_trial,
            num_trials,
            worker_count,
            seed: self.seed,
            failure_mode: self.failure_mode,
        })
    }
}
