use std::collections::BTreeSet;
use std::fmt;

use clap::ValueEnum;

/// A named dietary exclusion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Preference {
    NoCoriander,
    NoDairy,
    NoScallion,
    NoSpicy,
    Vegetarian,
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Preference::NoCoriander => "no coriander",
            Preference::NoDairy => "no dairy",
            Preference::NoScallion => "no scallion",
            Preference::NoSpicy => "no spicy",
            Preference::Vegetarian => "vegetarian",
        };
        f.write_str(label)
    }
}

/// Optional health goal that biases or narrows selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum HealthGoal {
    #[default]
    None,
    MuscleGain,
    FatLoss,
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthGoal::None => "none",
            HealthGoal::MuscleGain => "muscle gain",
            HealthGoal::FatLoss => "fat loss",
        };
        f.write_str(label)
    }
}

/// Active exclusion rules plus health goal for one planning request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSet {
    pub preferences: BTreeSet<Preference>,
    pub goal: HealthGoal,
}

impl PreferenceSet {
    pub fn new(preferences: impl IntoIterator<Item = Preference>, goal: HealthGoal) -> Self {
        Self {
            preferences: preferences.into_iter().collect(),
            goal,
        }
    }

    pub fn contains(&self, preference: Preference) -> bool {
        self.preferences.contains(&preference)
    }

    pub fn is_vegetarian(&self) -> bool {
        self.contains(Preference::Vegetarian)
    }
}
