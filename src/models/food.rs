use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference food item with per-100g macros, as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub form: FoodForm,
    pub conversion_factor: f64, // raw-weight × factor = cooked-weight
    pub macros: FoodMacros,
    pub micronutrients: Option<HashMap<String, f64>>, // mg or µg per 100g
    pub tags: Vec<String>,
    pub cost: Option<CostTier>,
}

/// Macro values per 100g of the food as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodMacros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: Option<f64>,
    pub sugars: Option<f64>,
    pub saturated_fat: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Starch,
    Vegetables,
    Fruits,
    Dairy,
    Fats,
    Snacks,
    Other,
}

impl FoodCategory {
    pub fn from_string(s: &str) -> Option<FoodCategory> {
        match s.to_lowercase().as_str() {
            "protein" => Some(FoodCategory::Protein),
            "starch" => Some(FoodCategory::Starch),
            "vegetables" => Some(FoodCategory::Vegetables),
            "fruits" => Some(FoodCategory::Fruits),
            "dairy" => Some(FoodCategory::Dairy),
            "fats" => Some(FoodCategory::Fats),
            "snacks" => Some(FoodCategory::Snacks),
            "other" => Some(FoodCategory::Other),
            _ => None,
        }
    }
}

/// Whether the stored amount and macros describe the raw or cooked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodForm {
    Raw,
    Cooked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Cheap,
    Moderate,
    Expensive,
}
