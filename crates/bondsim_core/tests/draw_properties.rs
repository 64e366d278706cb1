//! Property tests for the draw kernel invariants.

use bondsim_core::{draw, DrawError, DrawRng, PrizeCatalog, PrizeTier};
use proptest::prelude::*;

/// Tier tables with 1..6 tiers, distinct values, non-trivial counts.
fn arb_tiers() -> impl Strategy<Value = Vec<PrizeTier>> {
    proptest::collection::btree_map(1u32..10_000, 0u32..500, 1..6).prop_filter_map(
        "population must be non-empty",
        |map| {
            if map.values().all(|&count| count == 0) {
                None
            } else {
                Some(
                    map.into_iter()
                        .map(|(value, count)| PrizeTier::new(value, count))
                        .collect(),
                )
            }
        },
    )
}

proptest! {
    #[test]
    fn population_size_is_sum_of_tier_counts(tiers in arb_tiers()) {
        let expected: usize = tiers.iter().map(|t| t.count as usize).sum();
        let catalog = PrizeCatalog::new(tiers, 1_000).expect("valid catalog");
        prop_assert_eq!(catalog.population().len(), expected);
        prop_assert_eq!(catalog.population().iter_units().count(), expected);
    }

    #[test]
    fn sampled_units_never_exceed_tier_counts(
        tiers in arb_tiers(),
        seed in any::<u64>(),
        take in 1usize..200,
    ) {
        let catalog = PrizeCatalog::new(tiers, 1_000).expect("valid catalog");
        let population = catalog.population();
        let mut sampler = population.sampler();
        let mut rng = DrawRng::from_seed(seed);

        let mut drawn = Vec::new();
        for _ in 0..take.min(population.len()) {
            drawn.push(sampler.sample(&mut rng).expect("units remain"));
        }
        for tier in catalog.tiers() {
            let times = drawn.iter().filter(|&&v| v == tier.value).count();
            prop_assert!(times <= tier.count as usize);
        }
    }

    #[test]
    fn winners_are_distinct_ordered_and_in_range(
        holding in 1u32..5_000,
        odds in 2u32..500,
        seed in any::<u64>(),
    ) {
        let catalog = PrizeCatalog::nsandi_2024().expect("valid catalog");
        let population = catalog.population();
        let mut rng = DrawRng::from_seed(seed);

        match draw(holding, &population, odds, &mut rng) {
            Ok(outcomes) => {
                for pair in outcomes.windows(2) {
                    prop_assert!(pair[0].bond < pair[1].bond);
                }
                for outcome in &outcomes {
                    prop_assert!(outcome.bond < holding);
                }
            }
            Err(DrawError::PopulationExhausted { winners, units }) => {
                prop_assert!(winners > units);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn same_seed_reproduces_draw(
        holding in 1u32..5_000,
        seed in any::<u64>(),
    ) {
        let catalog = PrizeCatalog::nsandi_2024().expect("valid catalog");
        let population = catalog.population();
        let mut rng1 = DrawRng::from_seed(seed);
        let mut rng2 = DrawRng::from_seed(seed);
        prop_assert_eq!(
            draw(holding, &population, catalog.odds(), &mut rng1),
            draw(holding, &population, catalog.odds(), &mut rng2)
        );
    }
}
