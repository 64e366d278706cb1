//! CLI command implementations.

pub mod run;
pub mod tiers;

pub(crate) mod table;
