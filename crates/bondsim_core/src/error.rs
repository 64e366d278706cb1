//! Error types for the sampling kernel.
//!
//! This module provides:
//! - `CatalogError`: prize catalog construction failures
//! - `DrawError`: failures while simulating a draw

use thiserror::Error;

/// Prize catalog construction errors.
///
/// All catalog invariants are checked eagerly at construction; a
/// successfully built [`crate::PrizeCatalog`] can never fail validation
/// mid-run.
///
/// # Examples
/// ```
/// use bondsim_core::{CatalogError, PrizeCatalog};
///
/// let err = PrizeCatalog::new(vec![], 21_000).unwrap_err();
/// assert_eq!(err, CatalogError::EmptyTierTable);
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The tier table contains no tiers at all.
    #[error("prize tier table is empty")]
    EmptyTierTable,

    /// A tier has a zero or otherwise invalid prize value.
    #[error("invalid prize value {value}: prize amounts must be positive")]
    InvalidPrizeValue {
        /// The offending prize amount.
        value: u32,
    },

    /// The same prize value appears in more than one tier.
    #[error("duplicate prize value {value} in tier table")]
    DuplicatePrizeValue {
        /// The duplicated prize amount.
        value: u32,
    },

    /// Every tier has a zero count, so the population is empty.
    #[error("prize population is empty: all tier counts are zero")]
    EmptyPopulation,

    /// Winning odds denominator must be positive.
    #[error("invalid odds {odds}: win denominator must be positive")]
    InvalidOdds {
        /// The offending odds value.
        odds: u32,
    },
}

/// Errors raised while simulating a prize draw.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DrawError {
    /// More bonds won than there are prize units left to assign.
    ///
    /// Sampling without replacement cannot be satisfied; this signals a
    /// structurally misconfigured odds/holding/tier ratio rather than a
    /// recoverable runtime condition, so it is never retried.
    #[error(
        "prize population exhausted: {winners} winners but only {units} prize units available"
    )]
    PopulationExhausted {
        /// Number of winning bonds in the draw.
        winners: usize,
        /// Number of prize units available when the draw started.
        units: usize,
    },

    /// The holding size is zero.
    #[error("holding size must be positive")]
    EmptyHolding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::InvalidOdds { odds: 0 };
        assert!(err.to_string().contains("invalid odds 0"));

        let err = CatalogError::DuplicatePrizeValue { value: 25 };
        assert!(err.to_string().contains("duplicate prize value 25"));
    }

    #[test]
    fn test_draw_error_display() {
        let err = DrawError::PopulationExhausted {
            winners: 3,
            units: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("3 winners"));
        assert!(msg.contains("2 prize units"));
    }
}
