use std::path::Path;

use crate::error::Result;
use crate::models::{FestivalMenu, SlotResult, WeekPlan};

/// Write a weekly plan as CSV, one row per slot.
pub fn write_week_csv(plan: &WeekPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["date", "weekday", "slot", "dish", "url"])?;

    for day in plan {
        for (slot, result) in &day.meals {
            let (dish, url) = match result {
                SlotResult::Chosen(entry) => {
                    (entry.name.clone(), entry.url.clone().unwrap_or_default())
                }
                SlotResult::NoEligible { .. } => (String::new(), String::new()),
            };

            wtr.write_record([
                day.date.format("%Y-%m-%d").to_string(),
                day.weekday.to_string(),
                slot.to_string(),
                dish,
                url,
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write a festival menu as CSV, one row per dish.
pub fn write_menu_csv(menu: &FestivalMenu, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["index", "category", "dish", "url"])?;

    for (i, dish) in menu.dishes.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            dish.category.to_string(),
            dish.entry.name.clone(),
            dish.entry.url.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
