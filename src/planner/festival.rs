use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::{
    Category, Festival, FestivalMenu, MenuDish, RecipeEntry, RecipePool, Region,
};
use crate::planner::constants::{
    festival_target, north_dumpling_cap, spring_meat_quota, LANTERN_SOUTH_THEME_DISH,
    LEAFY_GREEN_KEYWORDS, SPRING_THEME_DISHES, STAPLE_KEYWORDS,
};
use crate::planner::exclusion::contains_any;
use crate::planner::sampling::draw_distinct;

/// Reject non-positive headcounts.
fn validate_headcount(headcount: i64) -> Result<u32> {
    if headcount <= 0 {
        return Err(PlannerError::InvalidInput(format!(
            "headcount must be positive, got {}",
            headcount
        )));
    }

    u32::try_from(headcount)
        .map_err(|_| PlannerError::InvalidInput(format!("headcount {} is too large", headcount)))
}

/// Accumulates a menu while keeping dish names unique.
#[derive(Debug, Default)]
struct MenuBuilder {
    dishes: Vec<MenuDish>,
    taken: HashSet<String>,
}

impl MenuBuilder {
    /// Add a fixed dish. Returns false if the name is already on the menu.
    fn push(&mut self, entry: RecipeEntry, category: Category) -> bool {
        if !self.taken.insert(entry.key()) {
            return false;
        }
        self.dishes.push(MenuDish { entry, category });
        true
    }

    /// Draw up to `n` new dishes from a pool category; returns how many landed.
    fn draw<R>(&mut self, rng: &mut R, pool: &RecipePool, category: Category, n: usize) -> usize
    where
        R: Rng + ?Sized,
    {
        let chosen = draw_distinct(rng, pool.entries(category), n, &mut self.taken);
        let drawn = chosen.len();

        if drawn < n {
            warn!(%category, requested = n, drawn, "category exhausted");
        }

        self.dishes.extend(
            chosen
                .into_iter()
                .map(|entry| MenuDish { entry, category }),
        );
        drawn
    }

    fn has_keyword(&self, keywords: &[&str]) -> bool {
        self.dishes
            .iter()
            .any(|dish| contains_any(&dish.entry.name, keywords))
    }

    /// Guarantee a staple and a leafy green, drawing one of each if missing.
    fn ensure_staple_and_greens<R>(
        &mut self,
        rng: &mut R,
        pool: &RecipePool,
        staples: Category,
        greens: Category,
    ) where
        R: Rng + ?Sized,
    {
        if !self.has_keyword(STAPLE_KEYWORDS) {
            debug!(%staples, "menu lacks a staple");
            self.draw(rng, pool, staples, 1);
        }

        if !self.has_keyword(LEAFY_GREEN_KEYWORDS) {
            debug!(%greens, "menu lacks a leafy green");
            self.draw(rng, pool, greens, 1);
        }
    }

    fn finish(self, festival: Festival, headcount: u32, target: usize) -> FestivalMenu {
        FestivalMenu {
            festival,
            headcount,
            target,
            dishes: self.dishes,
        }
    }
}

/// Pool entry for a fixed dish if the pool carries one (to keep its link),
/// else a bare entry.
fn fixed_dish(pool: &RecipePool, category: Category, name: &str) -> RecipeEntry {
    pool.entries(category)
        .iter()
        .find(|entry| entry.canonical_name().to_lowercase() == name.to_lowercase())
        .cloned()
        .unwrap_or_else(|| RecipeEntry::new(name))
}

/// Plan a Spring Festival dinner.
///
/// The three theme dishes always appear and count toward the meat quota
/// `max(3, headcount / 2 + 2)`. Vegetable dishes fill the rest of the
/// `headcount + 1` target, then a staple and a leafy green are added if the
/// menu has neither, which can push the menu past the target.
pub fn plan_spring_festival<R>(
    pool: &RecipePool,
    headcount: i64,
    rng: &mut R,
) -> Result<FestivalMenu>
where
    R: Rng + ?Sized,
{
    let headcount = validate_headcount(headcount)?;
    let target = festival_target(headcount);
    let meat_quota = spring_meat_quota(headcount);
    debug!(headcount, target, meat_quota, "planning spring festival menu");

    let mut menu = MenuBuilder::default();
    for name in SPRING_THEME_DISHES {
        menu.push(fixed_dish(pool, Category::MeatDish, name), Category::MeatDish);
    }

    menu.draw(
        rng,
        pool,
        Category::MeatDish,
        meat_quota.saturating_sub(SPRING_THEME_DISHES.len()),
    );
    menu.draw(
        rng,
        pool,
        Category::VegetableDish,
        target.saturating_sub(meat_quota),
    );
    menu.ensure_staple_and_greens(rng, pool, Category::Staple, Category::GreenVegetable);

    Ok(menu.finish(Festival::Spring, headcount, target))
}

/// Plan a Lantern Festival menu in a regional style.
///
/// - `Direct`: `headcount + 1` classic dishes, no quotas.
/// - `South`: sweet rice balls, traditional dishes, staple/green post-pass.
/// - `North`: one dessert soup, up to half the target in dumplings, the rest
///   from other dishes. Dumplings serve as the staple.
pub fn plan_lantern_festival<R>(
    pool: &RecipePool,
    headcount: i64,
    region: Region,
    rng: &mut R,
) -> Result<FestivalMenu>
where
    R: Rng + ?Sized,
{
    let headcount = validate_headcount(headcount)?;
    let target = festival_target(headcount);
    debug!(headcount, target, %region, "planning lantern festival menu");

    let mut menu = MenuBuilder::default();
    match region {
        Region::Direct => {
            menu.draw(rng, pool, Category::ClassicDish, target);
        }
        Region::South => {
            menu.push(
                fixed_dish(pool, Category::TraditionalDish, LANTERN_SOUTH_THEME_DISH),
                Category::TraditionalDish,
            );
            menu.draw(rng, pool, Category::TraditionalDish, target - 1);
            menu.ensure_staple_and_greens(
                rng,
                pool,
                Category::RegionalStaple,
                Category::RegionalGreen,
            );
        }
        Region::North => {
            let dessert = menu.draw(rng, pool, Category::DessertVariant, 1);
            let dumplings = menu.draw(
                rng,
                pool,
                Category::DumplingVariant,
                north_dumpling_cap(target),
            );
            debug!(dessert, dumplings, "north menu core drawn");
            menu.draw(
                rng,
                pool,
                Category::OtherDish,
                target.saturating_sub(dumplings + 1),
            );
        }
    }

    Ok(menu.finish(Festival::Lantern(region), headcount, target))
}
