use chrono::{Datelike, Days, Local, NaiveDate};
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::{
    DayPlan, HealthGoal, PlannedDay, PreferenceSet, RecipeEntry, RecipePool, Slot, SlotResult,
    WeekPlan,
};
use crate::planner::constants::{DAYS_PER_WEEK, NO_ELIGIBLE_REASON, PROTEIN_KEYWORDS};
use crate::planner::exclusion::{contains_any, eligible_for_slot};
use crate::planner::sampling::draw_one;

/// Parse a user-supplied start date.
///
/// Blank input means "today". Accepts `YYYY-MM-DD` and `YYYY年MM月DD日`.
pub fn parse_start_date(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let start = ["%Y-%m-%d", "%Y年%m月%d日"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .ok_or_else(|| {
            PlannerError::InvalidInput(format!(
                "invalid date '{}': expected YYYY-MM-DD or YYYY年MM月DD日",
                input
            ))
        })?;

    week_dates(start)?;
    Ok(Some(start))
}

/// The seven consecutive dates of a week starting at `start`.
///
/// Fails when the week runs past the last date chrono can represent.
fn week_dates(start: NaiveDate) -> Result<Vec<NaiveDate>> {
    (0..DAYS_PER_WEEK)
        .map(|offset| start.checked_add_days(Days::new(offset.into())))
        .collect::<Option<Vec<NaiveDate>>>()
        .ok_or_else(|| {
            PlannerError::InvalidInput(format!(
                "a week starting {} runs past the last supported date",
                start
            ))
        })
}

/// Slots served each day under a health goal; fat loss skips the snack.
pub fn slots_for(goal: HealthGoal) -> Vec<Slot> {
    Slot::ALL
        .into_iter()
        .filter(|slot| !(goal == HealthGoal::FatLoss && *slot == Slot::Snack))
        .collect()
}

/// Pick a recipe for one slot from its eligible candidates.
///
/// Muscle gain draws from the protein-rich subset when it is non-empty.
fn pick_for_slot<R>(rng: &mut R, eligible: &[RecipeEntry], goal: HealthGoal) -> SlotResult
where
    R: Rng + ?Sized,
{
    let chosen = if goal == HealthGoal::MuscleGain {
        let protein: Vec<RecipeEntry> = eligible
            .iter()
            .filter(|entry| contains_any(&entry.name, PROTEIN_KEYWORDS))
            .cloned()
            .collect();

        draw_one(rng, &protein).or_else(|| draw_one(rng, eligible)).cloned()
    } else {
        draw_one(rng, eligible).cloned()
    };

    match chosen {
        Some(entry) => SlotResult::Chosen(entry),
        None => SlotResult::NoEligible {
            reason: NO_ELIGIBLE_REASON.to_string(),
        },
    }
}

/// Plan seven days of meals starting at `start_date` (today when `None`).
///
/// Each slot is an independent draw, so a recipe may repeat across days.
/// A start date too close to chrono's upper bound for a full week is
/// rejected rather than truncated.
pub fn plan_week<R>(
    pool: &RecipePool,
    start_date: Option<NaiveDate>,
    prefs: &PreferenceSet,
    rng: &mut R,
) -> Result<WeekPlan>
where
    R: Rng + ?Sized,
{
    let start = start_date.unwrap_or_else(|| Local::now().date_naive());
    let dates = week_dates(start)?;
    let slots = slots_for(prefs.goal);

    // Eligibility depends only on slot and preferences, not on the day.
    let candidates: Vec<(Slot, Vec<RecipeEntry>)> = slots
        .iter()
        .map(|slot| (*slot, eligible_for_slot(pool, *slot, prefs)))
        .collect();

    for (slot, eligible) in &candidates {
        debug!(%slot, eligible = eligible.len(), "slot candidates");
        if eligible.is_empty() {
            warn!(%slot, "no eligible recipe for slot");
        }
    }

    let plan = dates
        .into_iter()
        .map(|date| {
            let meals: DayPlan = candidates
                .iter()
                .map(|(slot, eligible)| (*slot, pick_for_slot(rng, eligible, prefs.goal)))
                .collect();

            PlannedDay {
                date,
                weekday: date.weekday(),
                meals,
            }
        })
        .collect();

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Preference};
    use chrono::Weekday;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_pool() -> RecipePool {
        vec![
            (
                Category::Breakfast,
                vec![
                    RecipeEntry::new("Oatmeal + Milk + Banana"),
                    RecipeEntry::new("Boiled Egg + Congee"),
                ],
            ),
            (
                Category::Lunch,
                vec![
                    RecipeEntry::new("Kung Pao Chicken + Rice"),
                    RecipeEntry::new("Stir-fried Cabbage + Rice"),
                ],
            ),
            (
                Category::Dinner,
                vec![
                    RecipeEntry::new("Steamed Fish + Rice"),
                    RecipeEntry::new("Garlic Spinach + Rice"),
                ],
            ),
            (
                Category::Snack,
                vec![RecipeEntry::new("Apple"), RecipeEntry::new("Cheesecake")],
            ),
        ]
        .into_iter()
        .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_start_date_formats() {
        assert_eq!(parse_start_date("").unwrap(), None);
        assert_eq!(parse_start_date("  ").unwrap(), None);
        assert_eq!(parse_start_date("2024-01-15").unwrap(), Some(date(2024, 1, 15)));
        assert_eq!(
            parse_start_date("2024年01月15日").unwrap(),
            Some(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_parse_start_date_rejects_garbage() {
        assert!(matches!(
            parse_start_date("15/01/2024"),
            Err(PlannerError::InvalidInput(_))
        ));
        assert!(parse_start_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_start_date_rejects_truncated_week() {
        let near_max = NaiveDate::MAX.checked_sub_days(Days::new(2)).unwrap();
        let input = near_max.format("%Y-%m-%d").to_string();
        assert!(matches!(
            parse_start_date(&input),
            Err(PlannerError::InvalidInput(_))
        ));

        let last_full_week = NaiveDate::MAX.checked_sub_days(Days::new(6)).unwrap();
        assert!(week_dates(last_full_week).is_ok());
    }

    #[test]
    fn test_plan_week_never_returns_short_week() {
        let near_max = NaiveDate::MAX.checked_sub_days(Days::new(2)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let result = plan_week(
            &sample_pool(),
            Some(near_max),
            &PreferenceSet::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));

        let last_full_week = NaiveDate::MAX.checked_sub_days(Days::new(6)).unwrap();
        let plan = plan_week(
            &sample_pool(),
            Some(last_full_week),
            &PreferenceSet::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[6].date, NaiveDate::MAX);
    }

    #[test]
    fn test_week_has_seven_consecutive_days() {
        let mut rng = StdRng::seed_from_u64(42);
        let plan = plan_week(
            &sample_pool(),
            Some(date(2024, 1, 15)),
            &PreferenceSet::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(plan.len(), 7);
        assert_eq!(plan[0].date, date(2024, 1, 15));
        assert_eq!(plan[0].weekday, Weekday::Mon);
        assert_eq!(plan[6].date, date(2024, 1, 21));
        assert_eq!(plan[6].weekday, Weekday::Sun);

        for day in &plan {
            let slots: Vec<Slot> = day.meals.keys().copied().collect();
            assert_eq!(slots, Slot::ALL.to_vec());
        }
    }

    #[test]
    fn test_fat_loss_drops_snack() {
        let mut rng = StdRng::seed_from_u64(42);
        let prefs = PreferenceSet::new([], HealthGoal::FatLoss);
        let plan =
            plan_week(&sample_pool(), Some(date(2024, 1, 15)), &prefs, &mut rng).unwrap();

        for day in &plan {
            assert!(!day.meals.contains_key(&Slot::Snack));
            assert_eq!(day.meals.len(), 3);
        }
    }

    #[test]
    fn test_muscle_gain_prefers_protein() {
        let mut rng = StdRng::seed_from_u64(9);
        let prefs = PreferenceSet::new([], HealthGoal::MuscleGain);
        let plan =
            plan_week(&sample_pool(), Some(date(2024, 1, 15)), &prefs, &mut rng).unwrap();

        for day in &plan {
            let lunch = day.meals[&Slot::Lunch].recipe().unwrap();
            assert_eq!(lunch.name, "Kung Pao Chicken + Rice");
            let dinner = day.meals[&Slot::Dinner].recipe().unwrap();
            assert_eq!(dinner.name, "Steamed Fish + Rice");
        }
    }

    #[test]
    fn test_muscle_gain_falls_back_to_full_subset() {
        let mut rng = StdRng::seed_from_u64(9);
        let prefs = PreferenceSet::new([], HealthGoal::MuscleGain);
        let plan =
            plan_week(&sample_pool(), Some(date(2024, 1, 15)), &prefs, &mut rng).unwrap();

        // No snack carries a protein keyword, yet every snack slot is filled.
        assert!(plan
            .iter()
            .all(|day| day.meals[&Slot::Snack].recipe().is_some()));
    }

    #[test]
    fn test_empty_slot_gets_sentinel() {
        let mut rng = StdRng::seed_from_u64(1);
        let prefs = PreferenceSet::new([Preference::Vegetarian], HealthGoal::None);
        let pool: RecipePool = vec![(
            Category::Lunch,
            vec![RecipeEntry::new("Braised Pork + Rice")],
        )]
        .into_iter()
        .collect();

        let plan = plan_week(&pool, Some(date(2024, 1, 15)), &prefs, &mut rng).unwrap();
        for day in &plan {
            assert!(matches!(
                day.meals[&Slot::Lunch],
                SlotResult::NoEligible { .. }
            ));
        }
    }

    #[test]
    fn test_same_seed_same_plan() {
        let prefs = PreferenceSet::new([Preference::NoSpicy], HealthGoal::None);
        let start = Some(date(2024, 1, 15));

        let first =
            plan_week(&sample_pool(), start, &prefs, &mut StdRng::seed_from_u64(5)).unwrap();
        let second =
            plan_week(&sample_pool(), start, &prefs, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(first, second);
    }
}
