pub mod plan;
pub mod preferences;
pub mod recipe;

pub use plan::{
    DayPlan, Festival, FestivalMenu, MenuDish, PlannedDay, Region, Slot, SlotResult, WeekPlan,
};
pub use preferences::{HealthGoal, Preference, PreferenceSet};
pub use recipe::{Category, RecipeEntry, RecipePool};
