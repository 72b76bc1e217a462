use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::context::DailyContext;

/// Coarse classification derived from a slot-id, used for recipe pool
/// matching. Every slot that is not breakfast/lunch/dinner counts as snack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

/// A generated (or hand-edited) meal occupying one slot of a day.
/// Once `locked` is set the meal survives regeneration unchanged and its
/// stored calories are trusted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietMeal {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub recipe_name: String, // may diverge from the catalog name after edits
    pub description: String,
    pub calories: u32,
    pub meal_type: MealType,
    pub ingredients: Vec<MealIngredient>,
    pub locked: bool,
}

/// Scaled ingredient line inside a generated meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealIngredient {
    pub name: String,
    pub amount: f64, // display amount after scaling and cooked conversion
    pub unit: String,
    pub food_id: Option<Uuid>,
}

/// Day-level macro totals, rounded once after summing unrounded
/// per-meal values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTotals {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub day_number: u32, // 1-based within the week
    pub meals: BTreeMap<String, DietMeal>,
    pub total_calories: u32,
    pub macros: MacroTotals,
    pub context: Option<DailyContext>,
}

/// Exactly seven days plus the rounded mean of their calorie totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub days: Vec<DailyPlan>,
    pub average_calories: u32,
}

/// Generation inputs chosen in the plan form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSettings {
    pub target_calories: u32,
    pub meal_count: u32, // 4..=7, anything else falls back to the 5-meal layout
    pub start_date: NaiveDate,
    #[serde(default)]
    pub daily_contexts: Vec<DailyContext>,
    #[serde(default)]
    pub randomize: bool,
}

impl PlanSettings {
    pub fn new(target_calories: u32, meal_count: u32, start_date: NaiveDate) -> Self {
        Self {
            target_calories,
            meal_count,
            start_date,
            daily_contexts: Vec::new(),
            randomize: false,
        }
    }
}

/// Persisted unit of meal-plan authoring: the settings used and the week
/// they produced, kept per client under the store's `mealPlans` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub settings: PlanSettings,
    pub week: WeeklyPlan,
    pub created_at: DateTime<Utc>,
}

impl MealPlanRecord {
    pub fn new(client_id: Uuid, name: impl Into<String>, settings: PlanSettings, week: WeeklyPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            name: name.into(),
            settings,
            week,
            created_at: Utc::now(),
        }
    }
}
