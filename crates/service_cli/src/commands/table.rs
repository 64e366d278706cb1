//! Prize-table loading shared by the commands.

use std::collections::BTreeMap;

use bondsim_core::{PrizeCatalog, PrizeTier};

use crate::{CliError, Result};

/// Loads a tier table from a JSON file of `{"amount": count}` entries,
/// or the default NS&I table when no file is given.
pub fn load_tiers(path: Option<&str>) -> Result<Vec<PrizeTier>> {
    match path {
        Some(path) => {
            if !std::path::Path::new(path).exists() {
                return Err(CliError::FileNotFound(path.to_string()));
            }
            let text = std::fs::read_to_string(path)?;
            let table: BTreeMap<u32, u32> = serde_json::from_str(&text)?;
            Ok(table
                .into_iter()
                .map(|(value, count)| PrizeTier::new(value, count))
                .collect())
        }
        None => Ok(PrizeCatalog::nsandi_2024()?.tiers().to_vec()),
    }
}
