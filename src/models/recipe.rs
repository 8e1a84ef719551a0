use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PlannerError;

/// Separator between the parts of a composite recipe name, e.g.
/// `"Braised Pork + Bok Choy + Rice"`.
pub const COMPONENT_SEPARATOR: &str = " + ";

/// A single recipe in the pool.
///
/// `name` is a display string that is often a composite of dish, side and
/// staple. The optional `url` points at an external write-up and is only
/// carried through to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub name: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub url: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

impl RecipeEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    pub fn with_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }

    /// The dish name: everything before the first `" + "`.
    pub fn canonical_name(&self) -> &str {
        self.name
            .split(COMPONENT_SEPARATOR)
            .next()
            .unwrap_or(&self.name)
            .trim()
    }

    /// Parts of the composite name, trimmed, empty parts skipped.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.name
            .split(COMPONENT_SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
    }

    /// Canonical key for name comparisons (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Named grouping in the recipe pool.
///
/// The first four variants hold the everyday meals; the rest are the
/// festival-specific lists. Variant order is the pool's declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(alias = "早餐")]
    Breakfast,
    #[serde(alias = "午餐")]
    Lunch,
    #[serde(alias = "晚餐")]
    Dinner,
    #[serde(alias = "加餐")]
    Snack,
    MeatDish,
    VegetableDish,
    Staple,
    GreenVegetable,
    DumplingVariant,
    DessertVariant,
    ClassicDish,
    TraditionalDish,
    OtherDish,
    RegionalStaple,
    RegionalGreen,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snack,
        Category::MeatDish,
        Category::VegetableDish,
        Category::Staple,
        Category::GreenVegetable,
        Category::DumplingVariant,
        Category::DessertVariant,
        Category::ClassicDish,
        Category::TraditionalDish,
        Category::OtherDish,
        Category::RegionalStaple,
        Category::RegionalGreen,
    ];

    /// Snake-case identifier, matching the serialized key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Snack => "snack",
            Category::MeatDish => "meat_dish",
            Category::VegetableDish => "vegetable_dish",
            Category::Staple => "staple",
            Category::GreenVegetable => "green_vegetable",
            Category::DumplingVariant => "dumpling_variant",
            Category::DessertVariant => "dessert_variant",
            Category::ClassicDish => "classic_dish",
            Category::TraditionalDish => "traditional_dish",
            Category::OtherDish => "other_dish",
            Category::RegionalStaple => "regional_staple",
            Category::RegionalGreen => "regional_green",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| PlannerError::UnknownCategory(s.to_string()))
    }
}

/// Read-only recipe pool, grouped by category.
///
/// Built once at startup and shared by reference; there are no mutating
/// accessors after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipePool {
    groups: BTreeMap<Category, Vec<RecipeEntry>>,
}

impl RecipePool {
    pub fn new(groups: BTreeMap<Category, Vec<RecipeEntry>>) -> Self {
        Self { groups }
    }

    /// Entries of a category; empty slice for categories the pool lacks.
    pub fn entries(&self, category: Category) -> &[RecipeEntry] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All categories with their entries, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[RecipeEntry])> {
        self.groups
            .iter()
            .map(|(category, entries)| (*category, entries.as_slice()))
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}

impl FromIterator<(Category, Vec<RecipeEntry>)> for RecipePool {
    fn from_iter<I: IntoIterator<Item = (Category, Vec<RecipeEntry>)>>(iter: I) -> Self {
        let mut groups: BTreeMap<Category, Vec<RecipeEntry>> = BTreeMap::new();
        for (category, entries) in iter {
            groups.entry(category).or_default().extend(entries);
        }
        Self { groups }
    }
}
