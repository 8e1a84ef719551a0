use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use menu_planner_rs::catalog::{builtin_pool, load_pool, save_pool};
use menu_planner_rs::cli::{Cli, Command};
use menu_planner_rs::error::Result;
use menu_planner_rs::interface::{
    display_exact, display_festival_menu, display_search, display_week_plan, prompt_suggestion,
    write_menu_csv, write_week_csv,
};
use menu_planner_rs::lookup::{search, search_exact, ExactOutcome};
use menu_planner_rs::models::{
    Category, FestivalMenu, HealthGoal, Preference, PreferenceSet, RecipePool, Region,
};
use menu_planner_rs::planner::{
    parse_start_date, plan_lantern_festival, plan_spring_festival, plan_week,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    // The pool is built once here and only ever borrowed afterwards.
    let pool = match &cli.pool {
        Some(path) => load_pool(path)?,
        None => builtin_pool()?,
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "random seed");
    let mut rng = StdRng::seed_from_u64(seed);

    match cli.command.unwrap_or_default() {
        Command::Week {
            start,
            goal,
            avoid,
            csv,
        } => cmd_week(&pool, start.as_deref(), goal, avoid, csv, &mut rng),
        Command::Spring { headcount, csv } => {
            let menu = plan_spring_festival(&pool, headcount, &mut rng)?;
            show_menu(&menu, csv)
        }
        Command::Lantern {
            headcount,
            region,
            csv,
        } => cmd_lantern(&pool, headcount, region, csv, &mut rng),
        Command::Search { query } => {
            display_search(&query, &search(&pool, &query));
            Ok(())
        }
        Command::Lookup { query, interactive } => cmd_lookup(&pool, &query, interactive),
        Command::Categories { show, dump } => {
            cmd_categories(&pool, show.as_deref(), dump.as_deref())
        }
    }
}

/// Plan and display a week of meals.
fn cmd_week(
    pool: &RecipePool,
    start: Option<&str>,
    goal: HealthGoal,
    avoid: Vec<Preference>,
    csv: Option<PathBuf>,
    rng: &mut StdRng,
) -> Result<()> {
    let start_date = parse_start_date(start.unwrap_or_default())?;
    let prefs = PreferenceSet::new(avoid, goal);

    if !prefs.preferences.is_empty() {
        let labels: Vec<String> = prefs.preferences.iter().map(|p| p.to_string()).collect();
        println!("Avoiding: {}", labels.join(", "));
    }
    if goal != HealthGoal::None {
        println!("Goal: {}", goal);
    }

    let plan = plan_week(pool, start_date, &prefs, rng)?;
    display_week_plan(&plan);

    if let Some(path) = csv {
        write_week_csv(&plan, &path)?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

/// Plan and display a Lantern Festival menu.
fn cmd_lantern(
    pool: &RecipePool,
    headcount: i64,
    region: Region,
    csv: Option<PathBuf>,
    rng: &mut StdRng,
) -> Result<()> {
    let menu = plan_lantern_festival(pool, headcount, region, rng)?;
    show_menu(&menu, csv)
}

fn show_menu(menu: &FestivalMenu, csv: Option<PathBuf>) -> Result<()> {
    display_festival_menu(menu);

    if let Some(path) = csv {
        write_menu_csv(menu, &path)?;
        println!("Menu written to {}", path.display());
    }

    Ok(())
}

/// Exact lookup, optionally letting the user pick a close match.
fn cmd_lookup(pool: &RecipePool, query: &str, interactive: bool) -> Result<()> {
    let outcome = search_exact(pool, query);
    display_exact(&outcome);

    if let ExactOutcome::NotFound { suggestions, .. } = &outcome {
        if interactive && !suggestions.is_empty() {
            if let Some(choice) = prompt_suggestion(suggestions)? {
                display_exact(&search_exact(pool, &choice));
            }
        }
    }

    Ok(())
}

/// List categories, optionally dumping the pool to a file.
fn cmd_categories(pool: &RecipePool, show: Option<&str>, dump: Option<&Path>) -> Result<()> {
    match show {
        Some(name) => {
            let category: Category = name.parse()?;
            println!("{} ({} recipes)", category, pool.entries(category).len());
            for entry in pool.entries(category) {
                println!("  {}", entry.name);
            }
        }
        None => {
            println!("{} recipes in pool", pool.len());
            for (category, entries) in pool.iter() {
                println!("  {:<18} {:>4}", category.as_str(), entries.len());
            }
        }
    }

    if let Some(path) = dump {
        save_pool(path, pool)?;
        println!("Pool written to {}", path.display());
    }

    Ok(())
}
