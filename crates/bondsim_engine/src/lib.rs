//! Parallel orchestration layer for the bond draw simulator.
//!
//! This crate takes the pure sampling kernel from `bondsim_core` and
//! scales it to millions of independent trials:
//!
//! ```text
//! RunConfig            (validated run parameters + prize catalog)
//! └── Orchestrator     (rayon worker pool, one seed stream per trial)
//!     ├── TrialRecord* (collected per trial, tagged with trial_id)
//!     └── RunReport    (records + any tolerated failures)
//!         └── AggregatedDataset  (columnar merge)
//!             └── write_parquet  (persistence hand-off)
//! ```
//!
//! # Example
//!
//! ```rust
//! use bondsim_engine::{AggregatedDataset, Orchestrator, RunConfig};
//!
//! let config = RunConfig::builder()
//!     .holding_size(10_000)
//!     .num_trials(100)
//!     .periods_per_trial(12)
//!     .worker_count(4)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let report = Orchestrator::new(config).run().unwrap();
//! let dataset = AggregatedDataset::from_records(&report.records);
//! assert_eq!(dataset.len(), report.records.iter().map(|r| r.len()).sum());
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod persist;

// Re-exports for convenient access
pub use aggregate::AggregatedDataset;
pub use config::{FailureMode, RunConfig, RunConfigBuilder};
pub use error::{ConfigError, EngineError};
pub use orchestrator::{Orchestrator, RunReport, TrialFailure};
pub use persist::write_parquet;
