mod persistence;

pub use persistence::{load_pool, parse_pool, save_pool};

use crate::error::Result;
use crate::models::RecipePool;

const BUILTIN_POOL_JSON: &str = include_str!("../../data/recipes.json");

/// The recipe pool compiled into the binary.
pub fn builtin_pool() -> Result<RecipePool> {
    parse_pool(BUILTIN_POOL_JSON)
}
