pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod lookup;
pub mod models;
pub mod planner;

pub use error::{PlannerError, Result};
pub use models::{Category, FestivalMenu, PreferenceSet, RecipeEntry, RecipePool, WeekPlan};
