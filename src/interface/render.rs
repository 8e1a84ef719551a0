use chrono::Weekday;

use crate::lookup::{ExactOutcome, SearchHit, SearchOutcome};
use crate::models::{FestivalMenu, RecipeEntry, SlotResult, WeekPlan};

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Recipe name followed by its link, if any.
fn with_link(entry: &RecipeEntry) -> String {
    match &entry.url {
        Some(url) => format!("{}  <{}>", entry.name, url),
        None => entry.name.clone(),
    }
}

/// Display a weekly plan, one block per day.
pub fn display_week_plan(plan: &WeekPlan) {
    println!();
    println!("=== Weekly Meal Plan ===");

    for day in plan {
        println!();
        println!("{} ({})", weekday_label(day.weekday), day.date.format("%Y-%m-%d"));
        println!("{}", "-".repeat(30));

        for (slot, result) in &day.meals {
            match result {
                SlotResult::Chosen(entry) => {
                    println!("  {:<10} {}", slot.to_string(), with_link(entry))
                }
                SlotResult::NoEligible { reason } => {
                    println!("  {:<10} ({})", slot.to_string(), reason)
                }
            }
        }
    }

    println!();
}

/// Display a festival menu with its target dish count.
pub fn display_festival_menu(menu: &FestivalMenu) {
    println!();
    println!("=== {} Menu ===", menu.festival);
    println!(
        "Guests: {}  |  Target dishes: {}  |  Planned: {}",
        menu.headcount,
        menu.target,
        menu.len()
    );
    println!();

    if menu.is_empty() {
        println!("No dishes available for this menu.");
        println!();
        return;
    }

    let max_name_len = menu
        .dishes
        .iter()
        .map(|d| d.entry.name.chars().count())
        .max()
        .unwrap_or(10);

    for (i, dish) in menu.dishes.iter().enumerate() {
        let link = dish
            .entry
            .url
            .as_deref()
            .map(|url| format!("  <{}>", url))
            .unwrap_or_default();

        println!(
            "{:>3}. {:<width$}  [{}]{}",
            i + 1,
            dish.entry.name,
            dish.category,
            link,
            width = max_name_len
        );
    }

    println!();
}

fn display_hit(hit: &SearchHit) {
    println!("  [{}] {}", hit.category, with_link(&hit.entry));
}

/// Display substring search results.
pub fn display_search(query: &str, outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::EmptyQuery { prompt } => println!("{}", prompt),
        SearchOutcome::Hits(hits) if hits.is_empty() => {
            println!("No recipes match '{}'.", query.trim());
        }
        SearchOutcome::Hits(hits) => {
            println!("{} recipe(s) match '{}':", hits.len(), query.trim());
            for hit in hits {
                display_hit(hit);
            }
        }
    }
}

/// Display an exact lookup result.
pub fn display_exact(outcome: &ExactOutcome) {
    match outcome {
        ExactOutcome::EmptyQuery { prompt } => println!("{}", prompt),
        ExactOutcome::Found(hit) => display_hit(hit),
        ExactOutcome::NotFound { message, .. } => println!("{}", message),
    }
}
