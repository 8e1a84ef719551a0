use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{HealthGoal, Preference, Region};

/// MenuPlanner — weekly meals and festival menus from a recipe pool.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Recipe pool JSON file (defaults to the built-in pool).
    #[arg(short, long, global = true)]
    pub pool: Option<PathBuf>,

    /// Random seed for reproducible plans.
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a week of meals.
    Week {
        /// Start date (YYYY-MM-DD or YYYY年MM月DD日); today when omitted.
        #[arg(long)]
        start: Option<String>,

        /// Health goal biasing the selection.
        #[arg(long, value_enum, default_value = "none")]
        goal: HealthGoal,

        /// Dietary exclusions (repeatable).
        #[arg(long = "avoid", value_enum)]
        avoid: Vec<Preference>,

        /// Also write the plan to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Plan a Spring Festival dinner.
    Spring {
        /// Number of guests.
        #[arg(long, allow_negative_numbers = true)]
        headcount: i64,

        /// Also write the menu to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Plan a Lantern Festival menu.
    Lantern {
        /// Number of guests.
        #[arg(long, allow_negative_numbers = true)]
        headcount: i64,

        /// Regional style of the menu.
        #[arg(long, value_enum, default_value = "south")]
        region: Region,

        /// Also write the menu to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Find recipes whose name contains the query.
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Look up a dish by its exact name.
    Lookup {
        #[arg(default_value = "")]
        query: String,

        /// Offer close matches interactively on a miss.
        #[arg(long)]
        interactive: bool,
    },

    /// List pool categories and their sizes.
    Categories {
        /// Print the entries of one category (e.g. meat_dish).
        #[arg(long)]
        show: Option<String>,

        /// Write the pool in use to this JSON file.
        #[arg(long)]
        dump: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Week {
            start: None,
            goal: HealthGoal::None,
            avoid: Vec::new(),
            csv: None,
        }
    }
}
