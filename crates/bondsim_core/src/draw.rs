//! Single monthly prize draw over a bond holding.
//!
//! The draw checks every bond for the winning outcome independently, then
//! assigns each winner a prize sampled without replacement from the
//! catalog's population. The winner check and the prize assignment are
//! the only consumers of entropy; there are no other side effects.

use crate::catalog::PrizePopulation;
use crate::error::DrawError;
use crate::rng::DrawRng;

/// One winning bond in one draw: which bond won and what it won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Winning bond position in `[0, holding_size)`.
    pub bond: u32,
    /// Prize amount in pounds.
    pub prize: u32,
}

/// Simulates one prize draw over `holding_size` bonds.
///
/// Each bond draws a uniform integer in `[0, odds)`; exactly zero wins,
/// so each bond wins independently with probability `1/odds`. Winners
/// keep ascending bond order, and each is paired with a prize sampled
/// uniformly without replacement from `population`, so no tier issues
/// more units than its configured count within the draw.
///
/// # Errors
///
/// - `DrawError::EmptyHolding` if `holding_size` is zero.
/// - `DrawError::PopulationExhausted` if more bonds win than there are
///   prize units. This means the odds/holding/tier configuration is
///   structurally bad; it is checked before any prize is issued, so a
///   failed draw samples no units.
///
/// # Examples
///
/// ```rust
/// use bondsim_core::{draw, DrawRng, PrizeCatalog};
///
/// let catalog = PrizeCatalog::nsandi_2024().unwrap();
/// let population = catalog.population();
/// let mut rng = DrawRng::from_seed(42);
///
/// let outcomes = draw(50_000, &population, catalog.odds(), &mut rng).unwrap();
/// for pair in outcomes.windows(2) {
///     assert!(pair[0].bond < pair[1].bond);
/// }
/// ```
pub fn draw(
    holding_size: u32,
    population: &PrizePopulation,
    odds: u32,
    rng: &mut DrawRng,
) -> Result<Vec<DrawOutcome>, DrawError> {
    if holding_size == 0 {
        return Err(DrawError::EmptyHolding);
    }

    // Win check per bond; ascending order falls out of the scan.
    let winners: Vec<u32> = (0..holding_size)
        .filter(|_| rng.gen_outcome(odds) == 0)
        .collect();

    if winners.len() > population.len() {
        return Err(DrawError::PopulationExhausted {
            winners: winners.len(),
            units: population.len(),
        });
    }

    let mut sampler = population.sampler();
    let mut outcomes = Vec::with_capacity(winners.len());
    for bond in winners {
        let prize = sampler.sample(rng)?;
        outcomes.push(DrawOutcome { bond, prize });
    }
    Ok(outcomes)
}
