//! Prize catalog: the fixed tier table and its derived sampling population.
//!
//! A [`PrizeCatalog`] is an immutable description of one month's draw:
//! which prize amounts exist, how many of each are awarded, and the
//! per-bond winning odds. From it a [`PrizePopulation`] is derived, a
//! logical multiset with one entry per prize unit. The population stores
//! per-tier unit counts rather than materialising millions of repeated
//! amounts; [`PopulationSampler`] draws from it without replacement with
//! the same output distribution as sampling the expanded array.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, DrawError};
use crate::rng::DrawRng;

/// Winning odds used by the monthly draw since the 2024 rate change:
/// each £1 bond wins with probability 1 in 21,000.
pub const NSANDI_ODDS: u32 = 21_000;

/// One prize tier: an amount and how many units of it are awarded per draw.
///
/// # Examples
/// ```
/// use bondsim_core::PrizeTier;
///
/// let tier = PrizeTier::new(25, 1_475_218);
/// assert_eq!(tier.value, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    /// Prize amount in pounds.
    pub value: u32,
    /// Units of this prize awarded in one draw. May be zero.
    pub count: u32,
}

impl PrizeTier {
    /// Creates a new tier.
    #[inline]
    pub fn new(value: u32, count: u32) -> Self {
        Self { value, count }
    }
}

/// Immutable prize-tier table plus winning odds.
///
/// Validated once at construction and never mutated afterwards, so it is
/// safe to clone into each worker without synchronisation.
///
/// # Examples
///
/// ```rust
/// use bondsim_core::{PrizeCatalog, PrizeTier};
///
/// let catalog = PrizeCatalog::new(
///     vec![PrizeTier::new(25, 10), PrizeTier::new(100, 2)],
///     1_000,
/// )
/// .unwrap();
///
/// assert_eq!(catalog.odds(), 1_000);
/// assert_eq!(catalog.population().len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeCatalog {
    /// Tier table, sorted ascending by prize value.
    tiers: Vec<PrizeTier>,
    /// Win denominator: each bond wins with probability 1/odds per draw.
    odds: u32,
}

impl PrizeCatalog {
    /// Creates a catalog, validating the tier table and odds eagerly.
    ///
    /// Tiers are stored sorted ascending by prize value so the derived
    /// population is independent of input ordering.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if:
    /// - the tier table is empty, or every tier count is zero
    /// - a prize value is zero or appears in more than one tier
    /// - `odds` is zero
    pub fn new(mut tiers: Vec<PrizeTier>, odds: u32) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::EmptyTierTable);
        }
        if odds == 0 {
            return Err(CatalogError::InvalidOdds { odds });
        }
        tiers.sort_by_key(|tier| tier.value);
        for (i, tier) in tiers.iter().enumerate() {
            if tier.value == 0 {
                return Err(CatalogError::InvalidPrizeValue { value: tier.value });
            }
            if i > 0 && tiers[i - 1].value == tier.value {
                return Err(CatalogError::DuplicatePrizeValue { value: tier.value });
            }
        }
        if tiers.iter().all(|tier| tier.count == 0) {
            return Err(CatalogError::EmptyPopulation);
        }
        Ok(Self { tiers, odds })
    }

    /// The NS&I prize structure effective from the 2024 rate change,
    /// with the standard 1-in-21,000 odds.
    pub fn nsandi_2024() -> Result<Self, CatalogError> {
        Self::new(
            vec![
                PrizeTier::new(25, 1_475_218),
                PrizeTier::new(50, 2_190_094),
                PrizeTier::new(100, 2_190_094),
                PrizeTier::new(500, 54_807),
                PrizeTier::new(1_000, 18_269),
                PrizeTier::new(5_000, 1_747),
                PrizeTier::new(10_000, 874),
                PrizeTier::new(25_000, 350),
                PrizeTier::new(50_000, 175),
                PrizeTier::new(100_000, 87),
                PrizeTier::new(1_000_000, 2),
            ],
            NSANDI_ODDS,
        )
    }

    /// Returns the tier table, sorted ascending by prize value.
    #[inline]
    pub fn tiers(&self) -> &[PrizeTier] {
        &self.tiers
    }

    /// Returns the win denominator W: each bond wins with probability 1/W.
    #[inline]
    pub fn odds(&self) -> u32 {
        self.odds
    }

    /// Derives the sampling population from the tier table.
    ///
    /// Deterministic function of the tiers; the result is read-only and
    /// reused across every draw of a run.
    pub fn population(&self) -> PrizePopulation {
        PrizePopulation::from_tiers(&self.tiers)
    }
}

/// Derived multiset of prize amounts, one logical entry per prize unit.
///
/// Stored as per-tier counts plus a running total rather than an expanded
/// array of `Σ count` elements (over 5.9 million units for the full NS&I
/// table). Sampling over the counts is distribution-identical to uniform
/// sampling over the expanded array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizePopulation {
    /// Prize amounts, ascending, parallel to `counts`.
    values: Vec<u32>,
    /// Units per amount.
    counts: Vec<u32>,
    /// Σ counts.
    total: usize,
}

impl PrizePopulation {
    fn from_tiers(tiers: &[PrizeTier]) -> Self {
        let values = tiers.iter().map(|tier| tier.value).collect();
        let counts: Vec<u32> = tiers.iter().map(|tier| tier.count).collect();
        let total = counts.iter().map(|&count| count as usize).sum();
        Self {
            values,
            counts,
            total,
        }
    }

    /// Total number of prize units (`Σ tier.count`).
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns whether the population holds no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Units configured for a given prize amount (zero if absent).
    pub fn unit_count(&self, value: u32) -> u32 {
        match self.values.binary_search(&value) {
            Ok(idx) => self.counts[idx],
            Err(_) => 0,
        }
    }

    /// Iterates the expanded multiset, one amount per unit.
    ///
    /// Intended for tests and small populations; the sampler never
    /// expands.
    pub fn iter_units(&self) -> impl Iterator<Item = u32> + '_ {
        self.values
            .iter()
            .zip(&self.counts)
            .flat_map(|(&value, &count)| std::iter::repeat(value).take(count as usize))
    }

    /// Starts a without-replacement sampling pass over this population.
    pub fn sampler(&self) -> PopulationSampler<'_> {
        PopulationSampler {
            population: self,
            remaining: self.counts.clone(),
            left: self.total,
        }
    }
}

/// Without-replacement sampler over a [`PrizePopulation`].
///
/// Each call to [`sample`](Self::sample) picks a unit uniformly from the
/// units not yet issued and removes it, so no prize amount can be drawn
/// more times than its configured tier count. One sampler serves exactly
/// one draw; the population itself is never mutated.
#[derive(Debug, Clone)]
pub struct PopulationSampler<'a> {
    population: &'a PrizePopulation,
    /// Units of each tier not yet issued, parallel to the tier table.
    remaining: Vec<u32>,
    /// Σ remaining.
    left: usize,
}

impl PopulationSampler<'_> {
    /// Units still available to sample.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.left
    }

    /// Draws one prize amount uniformly from the remaining units.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::PopulationExhausted` if no units remain.
    pub fn sample(&mut self, rng: &mut DrawRng) -> Result<u32, DrawError> {
        if self.left == 0 {
            return Err(DrawError::PopulationExhausted {
                winners: self.population.len() + 1,
                units: self.population.len(),
            });
        }
        // Uniform unit index over remaining units, mapped to its tier by
        // walking the remaining-count prefix sums.
        let mut unit = rng.gen_index(self.left);
        for (idx, remaining) in self.remaining.iter_mut().enumerate() {
            let tier_units = *remaining as usize;
            if unit < tier_units {
                *remaining -= 1;
                self.left -= 1;
                return Ok(self.population.values[idx]);
            }
            unit -= tier_units;
        }
        // Unreachable while `left == Σ remaining` holds.
        Err(DrawError::PopulationExhausted {
            winners: self.population.len() + 1,
            units: self.population.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> PrizeCatalog {
        PrizeCatalog::new(
            vec![PrizeTier::new(25, 3), PrizeTier::new(50, 2), PrizeTier::new(100, 1)],
            1_000,
        )
        .expect("valid catalog")
    }

    #[test]
    fn test_population_size_is_sum_of_counts() {
        let population = small_catalog().population();
        assert_eq!(population.len(), 6);
        assert_eq!(population.iter_units().count(), 6);
    }

    #[test]
    fn test_nsandi_population_size() {
        let catalog = PrizeCatalog::nsandi_2024().expect("valid catalog");
        let expected: usize = catalog.tiers().iter().map(|t| t.count as usize).sum();
        assert_eq!(catalog.population().len(), expected);
        assert_eq!(catalog.population().len(), 5_931_717);
        assert_eq!(catalog.odds(), 21_000);
    }

    #[test]
    fn test_tiers_sorted_regardless_of_input_order() {
        let catalog = PrizeCatalog::new(
            vec![PrizeTier::new(100, 1), PrizeTier::new(25, 3)],
            1_000,
        )
        .expect("valid catalog");
        let values: Vec<u32> = catalog.tiers().iter().map(|t| t.value).collect();
        assert_eq!(values, vec![25, 100]);
    }

    #[test]
    fn test_construction_validation() {
        assert_eq!(
            PrizeCatalog::new(vec![], 1_000).unwrap_err(),
            CatalogError::EmptyTierTable
        );
        assert_eq!(
            PrizeCatalog::new(vec![PrizeTier::new(25, 1)], 0).unwrap_err(),
            CatalogError::InvalidOdds { odds: 0 }
        );
        assert_eq!(
            PrizeCatalog::new(vec![PrizeTier::new(0, 1)], 1_000).unwrap_err(),
            CatalogError::InvalidPrizeValue { value: 0 }
        );
        assert_eq!(
            PrizeCatalog::new(
                vec![PrizeTier::new(25, 1), PrizeTier::new(25, 2)],
                1_000
            )
            .unwrap_err(),
            CatalogError::DuplicatePrizeValue { value: 25 }
        );
        assert_eq!(
            PrizeCatalog::new(vec![PrizeTier::new(25, 0)], 1_000).unwrap_err(),
            CatalogError::EmptyPopulation
        );
    }

    #[test]
    fn test_sampler_never_exceeds_tier_counts() {
        let population = small_catalog().population();
        let mut rng = DrawRng::from_seed(7);
        let mut sampler = population.sampler();

        let mut drawn = Vec::new();
        for _ in 0..population.len() {
            drawn.push(sampler.sample(&mut rng).expect("units remain"));
        }
        assert_eq!(sampler.remaining(), 0);

        for tier in small_catalog().tiers() {
            let times = drawn.iter().filter(|&&v| v == tier.value).count();
            assert_eq!(times, tier.count as usize);
        }

        // One more sample must fail.
        assert!(matches!(
            sampler.sample(&mut rng),
            Err(DrawError::PopulationExhausted { .. })
        ));
    }

    #[test]
    fn test_unit_count_lookup() {
        let population = small_catalog().population();
        assert_eq!(population.unit_count(50), 2);
        assert_eq!(population.unit_count(999), 0);
    }
}
