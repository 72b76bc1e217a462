//! Meal-slot layout: which slots a day has for a given meal count and what
//! fraction of the daily calorie target each slot receives.

use crate::models::MealType;

const RATIOS_4: &[(&str, f64)] = &[
    ("breakfast", 0.25),
    ("lunch", 0.40),
    ("dinner", 0.25),
    ("snack1", 0.10),
];

const RATIOS_5: &[(&str, f64)] = &[
    ("breakfast", 0.25),
    ("snack1", 0.10),
    ("lunch", 0.35),
    ("dinner", 0.20),
    ("snack2", 0.10),
];

const RATIOS_6: &[(&str, f64)] = &[
    ("breakfast", 0.20),
    ("snack1", 0.10),
    ("lunch", 0.30),
    ("afternoon1", 0.10),
    ("dinner", 0.20),
    ("bedtime", 0.10),
];

const RATIOS_7: &[(&str, f64)] = &[
    ("breakfast", 0.20),
    ("snack1", 0.10),
    ("snack2", 0.05),
    ("lunch", 0.25),
    ("afternoon1", 0.10),
    ("afternoon2", 0.05),
    ("dinner", 0.20),
    ("bedtime", 0.05),
];

/// Ordered slot ids for a requested meal count. Counts outside 4..=7 get the
/// 5-slot default set.
pub fn active_slots(meal_count: u32) -> Vec<&'static str> {
    match meal_count {
        4 => vec!["breakfast", "lunch", "dinner", "snack1"],
        5 => vec!["breakfast", "snack1", "lunch", "dinner", "snack2"],
        6 => vec!["breakfast", "snack1", "lunch", "afternoon1", "dinner", "bedtime"],
        7 => vec!["breakfast", "snack1", "snack2", "lunch", "afternoon1", "dinner", "bedtime"],
        _ => vec!["breakfast", "snack1", "lunch", "afternoon1", "dinner"],
    }
}

/// The full ratio table for a meal count; unrecognized counts use the 5-meal
/// table. The 7-meal table carries eight entries, one more than its active
/// slot set.
pub fn ratio_table(meal_count: u32) -> &'static [(&'static str, f64)] {
    match meal_count {
        4 => RATIOS_4,
        6 => RATIOS_6,
        7 => RATIOS_7,
        _ => RATIOS_5,
    }
}

/// Fraction of the daily target assigned to a slot. Slot ids missing from
/// the table get 0.10 for snack-like names and 0.25 otherwise.
pub fn calorie_ratio(meal_count: u32, slot_id: &str) -> f64 {
    if let Some((_, ratio)) = ratio_table(meal_count).iter().find(|(slot, _)| *slot == slot_id) {
        return *ratio;
    }
    if slot_id.contains("snack") || slot_id.contains("afternoon") || slot_id.contains("bedtime") {
        0.10
    } else {
        0.25
    }
}

/// Rounded calorie target for one slot.
pub fn slot_target_calories(daily_target: u32, meal_count: u32, slot_id: &str) -> u32 {
    (f64::from(daily_target) * calorie_ratio(meal_count, slot_id)).round() as u32
}

/// Coarse meal-type used for recipe pool matching. Every slot that is not
/// breakfast, lunch or dinner selects from the snack pool.
pub fn meal_type_for(slot_id: &str) -> MealType {
    match slot_id {
        "breakfast" => MealType::Breakfast,
        "lunch" => MealType::Lunch,
        "dinner" => MealType::Dinner,
        _ => MealType::Snack,
    }
}
