//! CLI error type.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// A prize-table file was requested but does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument combination the engine cannot express.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Prize catalog construction failed.
    #[error(transparent)]
    Catalog(#[from] bondsim_core::CatalogError),

    /// Run configuration validation failed.
    #[error(transparent)]
    Config(#[from] bondsim_engine::ConfigError),

    /// The simulation run itself failed.
    #[error(transparent)]
    Engine(#[from] bondsim_engine::EngineError),

    /// Prize-table JSON could not be parsed.
    #[error("invalid prize table: {0}")]
    PrizeTable(#[from] serde_json::Error),

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
