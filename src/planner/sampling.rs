//! The two sampling disciplines used by the planners.
//!
//! Weekly slots draw one item at a time with replacement. Festival menus draw
//! without replacement and must never repeat a dish name.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::RecipeEntry;

/// Draw one item uniformly, with replacement.
pub fn draw_one<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// Draw up to `n` entries without replacement.
///
/// Entries whose name is already in `taken` are skipped, as are repeated names
/// within `pool`. Fewer than `n` entries come back when the pool runs out.
/// Chosen names are added to `taken`.
pub fn draw_distinct<R>(
    rng: &mut R,
    pool: &[RecipeEntry],
    n: usize,
    taken: &mut HashSet<String>,
) -> Vec<RecipeEntry>
where
    R: Rng + ?Sized,
{
    if n == 0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let candidates: Vec<&RecipeEntry> = pool
        .iter()
        .filter(|entry| !taken.contains(&entry.key()) && seen.insert(entry.key()))
        .collect();

    let chosen: Vec<RecipeEntry> = candidates
        .choose_multiple(rng, n)
        .map(|entry| (*entry).clone())
        .collect();

    for entry in &chosen {
        taken.insert(entry.key());
    }

    chosen
}
