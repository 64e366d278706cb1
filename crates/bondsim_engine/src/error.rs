//! Error types for the orchestration layer.
//!
//! This module provides:
//! - `ConfigError`: run configuration validation failures
//! - `EngineError`: everything that can end a run early

use bondsim_core::{CatalogError, DrawError};
use thiserror::Error;

use crate::config::{MAX_HOLDING, MAX_PERIODS, MAX_TRIALS, MAX_WORKERS};

/// Run configuration errors.
///
/// All run parameters are validated when the configuration is built;
/// none of these can surface mid-run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Holding size outside `[1, MAX_HOLDING]`.
    #[error("invalid holding size {0}: must be in range [1, {MAX_HOLDING}]")]
    InvalidHoldingSize(u32),

    /// Trial count outside `[1, MAX_TRIALS]`.
    #[error("invalid trial count {0}: must be in range [1, {MAX_TRIALS}]")]
    InvalidTrialCount(u32),

    /// Periods per trial outside `[1, MAX_PERIODS]`.
    #[error("invalid period count {0}: must be in range [1, {MAX_PERIODS}]")]
    InvalidPeriodCount(u32),

    /// Worker count outside `[1, MAX_WORKERS]`.
    #[error("invalid worker count {0}: must be in range [1, {MAX_WORKERS}]")]
    InvalidWorkerCount(usize),

    /// The prize catalog itself failed validation.
    #[error("invalid prize catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors that terminate a simulation run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The run configuration is invalid.
    #[error("invalid run configuration: {0}")]
    Config(#[from] ConfigError),

    /// A trial failed during execution.
    ///
    /// In fail-fast mode this aborts the run; in tolerant mode trial
    /// failures are collected on the [`crate::RunReport`] instead.
    #[error("trial {trial_id} failed: {source}")]
    Trial {
        /// Identifier of the failed trial.
        trial_id: u32,
        /// The underlying draw failure.
        source: DrawError,
    },

    /// The worker pool could not be built.
    #[error("worker pool failure: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// The aggregated dataset could not be written.
    #[error("failed to write dataset: {0}")]
    Persist(#[from] parquet::errors::ParquetError),

    /// Filesystem failure while persisting.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
