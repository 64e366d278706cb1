//! Tiers command: print the prize table a run would use.

use bondsim_core::{PrizeCatalog, NSANDI_ODDS};

use crate::commands::table::load_tiers;
use crate::Result;

/// Print the tier table from `path`, or the default NS&I table.
pub fn run(path: Option<&str>) -> Result<()> {
    let tiers = load_tiers(path)?;
    let catalog = PrizeCatalog::new(tiers, NSANDI_ODDS)?;

    println!("┌──────────────┬───────────────┐");
    println!("│ Prize        │ Units / draw  │");
    println!("├──────────────┼───────────────┤");
    for tier in catalog.tiers() {
        println!("│ £{:<11} │ {:>13} │", tier.value, tier.count);
    }
    println!("└──────────────┴───────────────┘");
    println!("total units: {}", catalog.population().len());
    println!("odds: 1 in {}", catalog.odds());
    Ok(())
}
