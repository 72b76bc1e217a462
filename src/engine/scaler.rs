//! Scales a selected recipe to a slot's calorie target and formats the
//! resulting meal.
//!
//! The recipe's per-serving macro snapshot is authoritative: the scale
//! factor is `target / recipe.calories` and every ingredient amount is
//! multiplied by it before cooked-weight conversion and display rounding.
//! The macros carried out for day aggregation stay unrounded; the daily
//! builder sums them across meals and rounds once.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::models::{DietMeal, MealIngredient, MealType, Recipe};

/// One freshly scaled meal plus its unrounded macro contribution.
#[derive(Debug, Clone)]
pub struct ScaledMeal {
    pub meal: DietMeal,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Tiered display rounding for ingredient amounts: up to 10 to the nearest
/// integer, up to 100 to the nearest 5, from 100 to the nearest 10.
pub fn smart_round(amount: f64) -> f64 {
    if amount <= 10.0 {
        amount.round()
    } else if amount < 100.0 {
        (amount / 5.0).round() * 5.0
    } else {
        (amount / 10.0).round() * 10.0
    }
}

/// Scales `recipe` so its calories hit `target_calories`.
///
/// Returns `None` when the recipe's calorie snapshot is zero, negative or
/// not finite; the caller leaves the slot unset instead of propagating a
/// division artifact.
pub fn scale_recipe(
    catalog: &Catalog,
    recipe: &Recipe,
    target_calories: u32,
    meal_type: MealType,
) -> Option<ScaledMeal> {
    if recipe.macros.calories <= 0.0 || !recipe.macros.calories.is_finite() {
        return None;
    }

    let factor = f64::from(target_calories) / recipe.macros.calories;
    let final_calories = (recipe.macros.calories * factor).round() as u32;

    let mut ingredients = Vec::with_capacity(recipe.ingredients.len());
    let mut parts = Vec::with_capacity(recipe.ingredients.len());
    for ingredient in &recipe.ingredients {
        let conversion = catalog.conversion_factor(ingredient.food_id);
        let display_amount = smart_round(ingredient.amount * factor * conversion);

        let mut part = format!("{}{} {}", display_amount, ingredient.unit, ingredient.name);
        if conversion != 1.0 {
            part.push_str(" (μαγ.)");
        }
        parts.push(part);

        ingredients.push(MealIngredient {
            name: ingredient.name.clone(),
            amount: display_amount,
            unit: ingredient.unit.clone(),
            food_id: ingredient.food_id,
        });
    }

    let meal = DietMeal {
        id: Uuid::new_v4(),
        recipe_id: recipe.id,
        recipe_name: recipe.name.clone(),
        description: parts.join(", "),
        calories: final_calories,
        meal_type,
        ingredients,
        locked: false,
    };

    Some(ScaledMeal {
        meal,
        protein: recipe.macros.protein * factor,
        carbs: recipe.macros.carbs * factor,
        fat: recipe.macros.fat * factor,
    })
}
