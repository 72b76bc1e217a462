use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::food::CostTier;

/// Catalog recipe. The per-serving macro snapshot is authoritative at
/// generation time and is never recomputed from the ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub category: RecipeCategory,
    pub description: String,
    pub instructions: Vec<String>,
    pub servings: u32,
    pub time: TimeTier,
    pub difficulty: DifficultyTier,
    pub cost: CostTier,
    pub tags: Vec<String>,
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub macros: RecipeMacros,
}

/// One ingredient line: the name is a snapshot, the id links back to the
/// food catalog and may be unresolved for hand-entered rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub food_id: Option<Uuid>,
    pub name: String,
    pub amount: f64, // grams, raw weight
    #[serde(default = "default_unit")]
    pub unit: String,
    pub note: Option<String>,
}

fn default_unit() -> String {
    "g".to_string()
}

/// Per-serving macro snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMacros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeCategory {
    Breakfast,
    Snack,
    Main,
    Dinner,
    Dessert,
    Salad,
    Smoothie,
    MealPrep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeTier {
    VeryFast,
    Fast,
    Moderate,
    Slow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Main-dish membership: the shared lunch/dinner pool accepts the main
    /// category and the "main" tag interchangeably.
    pub fn is_main_dish(&self) -> bool {
        self.category == RecipeCategory::Main || self.has_tag("main")
    }

    pub fn is_salad(&self) -> bool {
        self.category == RecipeCategory::Salad || self.has_tag("salad")
    }

    pub fn is_smoothie(&self) -> bool {
        self.category == RecipeCategory::Smoothie || self.has_tag("smoothie")
    }
}
