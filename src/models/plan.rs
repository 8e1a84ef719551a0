use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, Weekday};
use clap::ValueEnum;

use crate::models::recipe::{Category, RecipeEntry};

/// A meal occasion within a day. Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Breakfast, Slot::Lunch, Slot::Dinner, Slot::Snack];

    /// Pool category that feeds this slot.
    pub fn category(&self) -> Category {
        match self {
            Slot::Breakfast => Category::Breakfast,
            Slot::Lunch => Category::Lunch,
            Slot::Dinner => Category::Dinner,
            Slot::Snack => Category::Snack,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Slot::Breakfast => "Breakfast",
            Slot::Lunch => "Lunch",
            Slot::Dinner => "Dinner",
            Slot::Snack => "Snack",
        };
        f.write_str(label)
    }
}

/// Outcome for one slot: a recipe, or a placeholder explaining why none fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotResult {
    Chosen(RecipeEntry),
    NoEligible { reason: String },
}

impl SlotResult {
    pub fn recipe(&self) -> Option<&RecipeEntry> {
        match self {
            SlotResult::Chosen(entry) => Some(entry),
            SlotResult::NoEligible { .. } => None,
        }
    }
}

pub type DayPlan = BTreeMap<Slot, SlotResult>;

/// One day of a weekly plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDay {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub meals: DayPlan,
}

/// Seven consecutive days, in chronological order.
pub type WeekPlan = Vec<PlannedDay>;

/// Festival a menu was planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Festival {
    Spring,
    Lantern(Region),
}

impl fmt::Display for Festival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Festival::Spring => f.write_str("Spring Festival"),
            Festival::Lantern(region) => write!(f, "Lantern Festival ({region})"),
        }
    }
}

/// Regional style for the Lantern Festival menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Region {
    /// Sweet rice balls plus traditional dishes.
    South,
    /// Dessert soup plus dumplings.
    North,
    /// Plain pick from the classic recommendations.
    Direct,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::South => "south",
            Region::North => "north",
            Region::Direct => "direct",
        };
        f.write_str(label)
    }
}

/// A dish on a festival menu, tagged with the category it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDish {
    pub entry: RecipeEntry,
    pub category: Category,
}

/// Ordered festival menu with no repeated dish names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalMenu {
    pub festival: Festival,
    pub headcount: u32,
    /// Dish count derived from headcount (`headcount + 1`).
    pub target: usize,
    pub dishes: Vec<MenuDish>,
}

impl FestivalMenu {
    pub fn names(&self) -> Vec<&str> {
        self.dishes.iter().map(|d| d.entry.name.as_str()).collect()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.dishes.iter().filter(|d| d.category == category).count()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
