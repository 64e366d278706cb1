//! Prize-draw sampling kernel for premium bond Monte Carlo simulation.
//!
//! This crate is the pure-computation core of the simulator: given a
//! catalog of prize tiers and winning odds, it simulates monthly prize
//! draws over a bond holding and composes them into full simulated years.
//! It performs no I/O and owns no threads; parallel execution and
//! aggregation live in `bondsim_engine`.
//!
//! # Architecture
//!
//! ```text
//! PrizeCatalog            (tier table + odds, validated once)
//! ├── PrizePopulation     (derived multiset of prize units)
//! │   └── PopulationSampler  (without-replacement draws)
//! ├── draw()              (one monthly draw over the holding)
//! └── simulate_trial()    (draws composed over a year)
//! ```
//!
//! # Reproducibility
//!
//! All randomness flows through [`DrawRng`], a seeded generator wrapper.
//! Two trials given the same seed produce identical outcomes; the engine
//! derives one independent seed per trial so results do not depend on
//! worker scheduling.
//!
//! # Example
//!
//! ```rust
//! use bondsim_core::{draw, simulate_trial, DrawRng, PrizeCatalog};
//!
//! let catalog = PrizeCatalog::nsandi_2024().unwrap();
//! let mut rng = DrawRng::from_seed(42);
//!
//! // One monthly draw over a 100,000-bond holding.
//! let population = catalog.population();
//! let outcomes = draw(100_000, &population, catalog.odds(), &mut rng).unwrap();
//! for outcome in &outcomes {
//!     println!("bond {} won £{}", outcome.bond, outcome.prize);
//! }
//!
//! // A full simulated year (12 monthly draws).
//! let year = simulate_trial(100_000, 12, &catalog, &mut rng).unwrap();
//! assert!(year.len() < 100_000);
//! ```

pub mod catalog;
pub mod draw;
pub mod error;
pub mod rng;
pub mod trial;

// Re-exports for convenient access
pub use catalog::{PopulationSampler, PrizeCatalog, PrizePopulation, PrizeTier, NSANDI_ODDS};
pub use draw::{draw, DrawOutcome};
pub use error::{CatalogError, DrawError};
pub use rng::DrawRng;
pub use trial::{simulate_trial, TrialRecord};
