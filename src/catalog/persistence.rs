use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Category, RecipeEntry, RecipePool};

/// Parse a pool from JSON text.
///
/// Names are trimmed and blank entries are dropped.
pub fn parse_pool(json: &str) -> Result<RecipePool> {
    let raw: BTreeMap<Category, Vec<RecipeEntry>> = serde_json::from_str(json)?;

    let groups = raw
        .into_iter()
        .map(|(category, entries)| {
            let before = entries.len();
            let cleaned: Vec<RecipeEntry> = entries
                .into_iter()
                .filter_map(|mut entry| {
                    entry.name = entry.name.trim().to_string();
                    (!entry.name.is_empty()).then_some(entry)
                })
                .collect();

            if cleaned.len() < before {
                warn!(
                    %category,
                    dropped = before - cleaned.len(),
                    "dropped entries with blank names"
                );
            }
            (category, cleaned)
        })
        .collect();

    Ok(RecipePool::new(groups))
}

/// Load a pool from a JSON file mapping category to `[{name, url}]`.
pub fn load_pool<P: AsRef<Path>>(path: P) -> Result<RecipePool> {
    let content = fs::read_to_string(path.as_ref())?;
    let pool = parse_pool(&content)?;
    info!(
        path = %path.as_ref().display(),
        recipes = pool.len(),
        "loaded recipe pool"
    );
    Ok(pool)
}

/// Save a pool as pretty-printed JSON.
pub fn save_pool<P: AsRef<Path>>(path: P, pool: &RecipePool) -> Result<()> {
    let json = serde_json::to_string_pretty(pool)?;
    fs::write(path, json)?;
    Ok(())
}
