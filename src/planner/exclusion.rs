use tracing::debug;

use crate::models::recipe::COMPONENT_SEPARATOR;
use crate::models::{
    Category, HealthGoal, Preference, PreferenceSet, RecipeEntry, RecipePool, Slot,
};
use crate::planner::constants::{
    preference_keywords, DAIRY_KEYWORDS, FAT_LOSS_KEYWORDS, FRUIT_KEYWORDS,
};

/// Case-insensitive substring test against a keyword table.
pub fn contains_any(name: &str, keywords: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Whether a recipe passes every active preference and the health goal.
///
/// A name is rejected if it contains any keyword of any active preference.
/// The fat-loss goal also rejects fried, sugary and dessert names.
pub fn is_eligible(entry: &RecipeEntry, prefs: &PreferenceSet) -> bool {
    let blocked_by_preference = prefs
        .preferences
        .iter()
        .any(|preference| contains_any(&entry.name, preference_keywords(*preference)));

    if blocked_by_preference {
        return false;
    }

    !(prefs.goal == HealthGoal::FatLoss && contains_any(&entry.name, FAT_LOSS_KEYWORDS))
}

/// Screen an entry for a specific slot, possibly rewriting it.
///
/// Breakfast under "no dairy" keeps the rest of a composite breakfast: the
/// dairy components are dropped and the remainder is re-joined. Nothing left
/// means the entry is rejected.
pub fn screen_for_slot(
    entry: &RecipeEntry,
    slot: Slot,
    prefs: &PreferenceSet,
) -> Option<RecipeEntry> {
    if slot == Slot::Breakfast && prefs.contains(Preference::NoDairy) {
        let kept: Vec<&str> = entry
            .components()
            .filter(|part| !contains_any(part, DAIRY_KEYWORDS))
            .collect();

        if kept.is_empty() {
            return None;
        }

        let rewritten = RecipeEntry {
            name: kept.join(COMPONENT_SEPARATOR),
            url: entry.url.clone(),
        };
        return is_eligible(&rewritten, prefs).then_some(rewritten);
    }

    is_eligible(entry, prefs).then(|| entry.clone())
}

/// Snack fruits offered as breakfast when vegetarian leaves nothing else.
fn fruit_breakfast_fallback(pool: &RecipePool, prefs: &PreferenceSet) -> Vec<RecipeEntry> {
    pool.entries(Category::Snack)
        .iter()
        .filter(|entry| contains_any(&entry.name, FRUIT_KEYWORDS) && is_eligible(entry, prefs))
        .cloned()
        .collect()
}

/// All candidates for a slot after exclusions, including the breakfast
/// rewrite and the vegetarian fruit fallback.
pub fn eligible_for_slot(
    pool: &RecipePool,
    slot: Slot,
    prefs: &PreferenceSet,
) -> Vec<RecipeEntry> {
    let eligible: Vec<RecipeEntry> = pool
        .entries(slot.category())
        .iter()
        .filter_map(|entry| screen_for_slot(entry, slot, prefs))
        .collect();

    if eligible.is_empty() && slot == Slot::Breakfast && prefs.is_vegetarian() {
        let fallback = fruit_breakfast_fallback(pool, prefs);
        debug!(
            candidates = fallback.len(),
            "vegetarian breakfast empty, using fruit fallback"
        );
        return fallback;
    }

    eligible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(list: &[Preference], goal: HealthGoal) -> PreferenceSet {
        PreferenceSet::new(list.iter().copied(), goal)
    }

    fn sample_pool() -> RecipePool {
        vec![
            (
                Category::Breakfast,
                vec![
                    RecipeEntry::new("Oatmeal + Milk + Banana"),
                    RecipeEntry::new("Milk + Yogurt"),
                    RecipeEntry::new("Congee + Pickles + Steamed Bun"),
                ],
            ),
            (
                Category::Snack,
                vec![
                    RecipeEntry::new("Apple"),
                    RecipeEntry::new("Cheesecake"),
                    RecipeEntry::new("Mixed Nuts"),
                ],
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_preferences_accept_everything() {
        let none = PreferenceSet::default();
        assert!(is_eligible(&RecipeEntry::new("Fried Chicken + Rice"), &none));
        assert!(is_eligible(&RecipeEntry::new("Cheesecake"), &none));
    }

    #[test]
    fn test_preference_keywords_exclude() {
        let no_spicy = prefs(&[Preference::NoSpicy], HealthGoal::None);
        assert!(!is_eligible(&RecipeEntry::new("Mapo Tofu + Rice"), &no_spicy));
        assert!(is_eligible(&RecipeEntry::new("Tomato and Egg + Rice"), &no_spicy));

        let no_coriander = prefs(&[Preference::NoCoriander], HealthGoal::None);
        assert!(!is_eligible(&RecipeEntry::new("Cilantro Beef Salad"), &no_coriander));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let no_scallion = prefs(&[Preference::NoScallion], HealthGoal::None);
        assert!(!is_eligible(&RecipeEntry::new("SCALLION Pancake"), &no_scallion));
    }

    #[test]
    fn test_vegetarian_rejects_animal_products() {
        let veg = prefs(&[Preference::Vegetarian], HealthGoal::None);
        assert!(!is_eligible(&RecipeEntry::new("Steamed Fish + Rice"), &veg));
        assert!(!is_eligible(&RecipeEntry::new("Boiled Egg"), &veg));
        assert!(!is_eligible(&RecipeEntry::new("红烧肉 + 米饭"), &veg));
        assert!(is_eligible(&RecipeEntry::new("Stir-fried Bok Choy + Rice"), &veg));
    }

    #[test]
    fn test_fat_loss_applies_without_preferences() {
        let fat_loss = prefs(&[], HealthGoal::FatLoss);
        assert!(!is_eligible(&RecipeEntry::new("Fried Dough Sticks"), &fat_loss));
        assert!(!is_eligible(&RecipeEntry::new("Sweet and Sour Pork"), &fat_loss));
        assert!(is_eligible(&RecipeEntry::new("Steamed Fish + Rice"), &fat_loss));
    }

    #[test]
    fn test_breakfast_drops_dairy_components() {
        let no_dairy = prefs(&[Preference::NoDairy], HealthGoal::None);
        let entry = RecipeEntry::with_url("Oatmeal + Milk + Banana", "https://example.org/oats");

        let screened = screen_for_slot(&entry, Slot::Breakfast, &no_dairy).unwrap();
        assert_eq!(screened.name, "Oatmeal + Banana");
        assert_eq!(screened.url.as_deref(), Some("https://example.org/oats"));
        assert!(is_eligible(&screened, &no_dairy));
    }

    #[test]
    fn test_breakfast_all_dairy_is_rejected() {
        let no_dairy = prefs(&[Preference::NoDairy], HealthGoal::None);
        let entry = RecipeEntry::new("Milk + Yogurt");
        assert!(screen_for_slot(&entry, Slot::Breakfast, &no_dairy).is_none());
    }

    #[test]
    fn test_dairy_rewrite_only_applies_to_breakfast() {
        let no_dairy = prefs(&[Preference::NoDairy], HealthGoal::None);
        let entry = RecipeEntry::new("Oatmeal + Milk + Banana");
        assert!(screen_for_slot(&entry, Slot::Snack, &no_dairy).is_none());
    }

    #[test]
    fn test_vegetarian_breakfast_uses_fruit_fallback() {
        let pool: RecipePool = vec![
            (
                Category::Breakfast,
                vec![RecipeEntry::new("Boiled Egg + Congee")],
            ),
            (
                Category::Snack,
                vec![
                    RecipeEntry::new("Apple"),
                    RecipeEntry::new("Banana"),
                    RecipeEntry::new("Mixed Nuts"),
                ],
            ),
        ]
        .into_iter()
        .collect();
        let veg = prefs(&[Preference::Vegetarian], HealthGoal::None);

        let eligible = eligible_for_slot(&pool, Slot::Breakfast, &veg);
        let names: Vec<&str> = eligible.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_vegetarian_breakfast_without_eligible_fruit_is_empty() {
        let veg = prefs(&[Preference::Vegetarian], HealthGoal::None);
        let no_fruit: RecipePool = vec![
            (Category::Breakfast, Vec::new()),
            (Category::Snack, vec![RecipeEntry::new("Mixed Nuts")]),
        ]
        .into_iter()
        .collect();
        assert!(eligible_for_slot(&no_fruit, Slot::Breakfast, &veg).is_empty());

        let veg_no_dairy = prefs(&[Preference::Vegetarian, Preference::NoDairy], HealthGoal::None);
        let dairy_fruit: RecipePool = vec![(
            Category::Snack,
            vec![RecipeEntry::new("Banana Milkshake")],
        )]
        .into_iter()
        .collect();
        assert!(eligible_for_slot(&dairy_fruit, Slot::Breakfast, &veg_no_dairy).is_empty());
    }

    #[test]
    fn test_fallback_not_used_when_breakfast_has_candidates() {
        let veg = prefs(&[Preference::Vegetarian], HealthGoal::None);
        let eligible = eligible_for_slot(&sample_pool(), Slot::Breakfast, &veg);
        assert_eq!(eligible.len(), 3);
        assert!(eligible.iter().all(|e| e.name != "Apple"));
    }

    #[test]
    fn test_eligibility_is_idempotent() {
        let set = prefs(&[Preference::NoDairy, Preference::Vegetarian], HealthGoal::FatLoss);
        let pool = sample_pool();
        for (_, entries) in pool.iter() {
            for entry in entries {
                assert_eq!(is_eligible(entry, &set), is_eligible(entry, &set));
            }
        }
    }
}
