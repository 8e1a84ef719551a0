//! Keyword tables and quota policy for the planners.
//!
//! Every table is matched as a case-insensitive substring of the recipe's
//! display name. English and Chinese terms sit side by side so pools built
//! from either catalog are screened the same way.

use crate::models::Preference;

// ─────────────────────────────────────────────────────────────────────────────
// Exclusion keywords
// ─────────────────────────────────────────────────────────────────────────────

pub const CORIANDER_KEYWORDS: &[&str] = &["coriander", "cilantro", "香菜", "芫荽"];

pub const DAIRY_KEYWORDS: &[&str] = &[
    "milk", "cheese", "butter", "yogurt", "yoghurt", "cream", "latte", "牛奶", "奶酪", "芝士",
    "黄油", "酸奶", "奶油",
];

pub const SCALLION_KEYWORDS: &[&str] = &["scallion", "green onion", "spring onion", "葱"];

pub const SPICY_KEYWORDS: &[&str] = &[
    "spicy", "chili", "chilli", "kung pao", "mapo", "sichuan", "mala", "辣", "麻婆", "宫保",
    "水煮", "剁椒",
];

/// Animal products screened out by the vegetarian preference.
pub const ANIMAL_KEYWORDS: &[&str] = &[
    "chicken", "duck", "goose", "pork", "beef", "lamb", "mutton", "meat", "rib", "bacon", "ham",
    "sausage", "fish", "shrimp", "prawn", "crab", "squid", "clam", "oyster", "scallop", "egg",
    "鸡", "鸭", "鹅", "猪", "牛肉", "羊", "肉", "排骨", "鱼", "虾", "蟹", "贝", "蛋",
];

/// Fried, sugary and dessert terms excluded under the fat-loss goal.
pub const FAT_LOSS_KEYWORDS: &[&str] = &[
    "fried", "deep-fried", "sugar", "sweet", "dessert", "cake", "candy", "syrup", "caramel",
    "donut", "doughnut", "炸", "油条", "糖", "甜", "蛋糕", "奶茶",
];

/// Fruits accepted as breakfast stand-ins when vegetarian leaves none.
pub const FRUIT_KEYWORDS: &[&str] = &[
    "apple", "banana", "orange", "grape", "strawberry", "blueberry", "kiwi", "pomelo", "pear",
    "peach", "苹果", "香蕉", "橙", "葡萄", "草莓", "蓝莓", "猕猴桃", "柚", "梨", "桃",
];

/// Protein sources favoured under the muscle-gain goal.
pub const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken", "duck", "beef", "pork", "lamb", "fish", "shrimp", "egg", "tofu", "bean", "lentil",
    "鸡", "鸭", "牛肉", "猪", "羊", "鱼", "虾", "蛋", "豆",
];

/// Staple keywords checked by the festival post-pass.
pub const STAPLE_KEYWORDS: &[&str] = &["rice", "bun", "roll", "bao", "米饭", "馒头", "包", "卷"];

/// Leafy greens checked by the festival post-pass.
pub const LEAFY_GREEN_KEYWORDS: &[&str] = &[
    "spinach", "bok choy", "choy sum", "lettuce", "cabbage", "kale", "greens", "青菜", "菠菜",
    "白菜", "生菜", "油麦菜", "菜心",
];

/// Keyword table backing a preference.
pub fn preference_keywords(preference: Preference) -> &'static [&'static str] {
    match preference {
        Preference::NoCoriander => CORIANDER_KEYWORDS,
        Preference::NoDairy => DAIRY_KEYWORDS,
        Preference::NoScallion => SCALLION_KEYWORDS,
        Preference::NoSpicy => SPICY_KEYWORDS,
        Preference::Vegetarian => ANIMAL_KEYWORDS,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Weekly planner
// ─────────────────────────────────────────────────────────────────────────────

/// Days in a weekly plan.
pub const DAYS_PER_WEEK: u32 = 7;

/// Placeholder text for a slot with no eligible recipe.
pub const NO_ELIGIBLE_REASON: &str =
    "No recipe matches the current preferences; try relaxing some restrictions";

// ─────────────────────────────────────────────────────────────────────────────
// Festival planners
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed Spring Festival dishes; all three count toward the meat quota.
pub const SPRING_THEME_DISHES: [&str; 3] = [
    "Steamed Whole Fish",
    "Braised Pork Belly",
    "Pork and Chive Dumplings",
];

/// Floor of the Spring Festival meat quota.
pub const SPRING_MIN_MEAT_DISHES: usize = 3;

/// Mandatory dish of the southern Lantern Festival menu.
pub const LANTERN_SOUTH_THEME_DISH: &str = "Sweet Rice Balls";

/// Dishes on a festival menu for a given headcount.
pub fn festival_target(headcount: u32) -> usize {
    headcount as usize + 1
}

/// Spring Festival meat quota: `max(3, floor(headcount / 2) + 2)`.
pub fn spring_meat_quota(headcount: u32) -> usize {
    SPRING_MIN_MEAT_DISHES.max(headcount as usize / 2 + 2)
}

/// Northern Lantern Festival dumpling cap: `ceil(target / 2)`.
pub fn north_dumpling_cap(target: usize) -> usize {
    target.div_ceil(2)
}
