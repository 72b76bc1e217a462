//! Substitution queries for the meal-editing flows.
//!
//! Alternates apply the same hard filters as selection (pool, dislikes,
//! gluten, easy/cheap context) but never score; listings come back in
//! catalog order, capped at five. This asymmetry with the selector is
//! intentional and mirrors how the editing screens behave.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::models::{ClientProfile, ContextCondition, DailyContext, MealType, Recipe, TimeTier};

use super::matcher;
use super::selector::{has_disliked_ingredient, matches_meal_type};

const MAX_SUGGESTIONS: usize = 5;

/// Candidate row for the ingredient-swap picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSubstitute {
    pub food_id: Uuid,
    pub name: String,
}

/// Up to five replacement recipes for a meal, excluding the one currently
/// in the slot. Hard filters only, no scoring.
pub fn recipe_alternates<'a>(
    catalog: &'a Catalog,
    current_recipe_id: Uuid,
    meal_type: MealType,
    client: &ClientProfile,
    context: Option<&DailyContext>,
) -> Vec<&'a Recipe> {
    let disliked = matcher::split_terms(&client.disliked_foods);
    let gluten_free_only = matcher::requires_gluten_free(&client.conditions);
    let easy_only = context.is_some_and(|ctx| ctx.has(ContextCondition::EasyFood));
    let cheap_only = context.is_some_and(|ctx| ctx.has(ContextCondition::CheapFood));

    catalog
        .recipes()
        .iter()
        .filter(|recipe| recipe.id != current_recipe_id)
        .filter(|recipe| matches_meal_type(recipe, meal_type))
        .filter(|recipe| !has_disliked_ingredient(recipe, &disliked))
        .filter(|recipe| !gluten_free_only || recipe.has_tag("gluten-free"))
        .filter(|recipe| {
            !easy_only || matches!(recipe.time, TimeTier::VeryFast | TimeTier::Fast)
        })
        .filter(|recipe| !cheap_only || recipe.cost == crate::models::CostTier::Cheap)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Up to five foods sharing the given food's category and form, in catalog
/// order. Unknown ids yield an empty list.
pub fn ingredient_substitutes(catalog: &Catalog, food_id: Uuid) -> Vec<IngredientSubstitute> {
    let Some(current) = catalog.food_by_id(food_id) else {
        return Vec::new();
    };

    catalog
        .foods()
        .iter()
        .filter(|food| food.id != food_id)
        .filter(|food| food.category == current.category && food.form == current.form)
        .take(MAX_SUGGESTIONS)
        .map(|food| IngredientSubstitute {
            food_id: food.id,
            name: food.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CostTier, DifficultyTier, FoodCategory, FoodForm, FoodItem, FoodMacros, RecipeCategory,
        RecipeIngredient, RecipeMacros,
    };

    fn recipe(name: &str, category: RecipeCategory, ingredient: &str) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            description: String::new(),
            instructions: Vec::new(),
            servings: 1,
            time: TimeTier::Moderate,
            difficulty: DifficultyTier::Easy,
            cost: CostTier::Moderate,
            tags: Vec::new(),
            ingredients: vec![RecipeIngredient {
                food_id: None,
                name: ingredient.to_string(),
                amount: 100.0,
                unit: "g".to_string(),
                note: None,
            }],
            macros: RecipeMacros {
                calories: 400.0,
                protein: 20.0,
                carbs: 40.0,
                fat: 15.0,
                fiber: None,
            },
        }
    }

    fn food(name: &str, category: FoodCategory, form: FoodForm) -> FoodItem {
        FoodItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            form,
            conversion_factor: 1.0,
            macros: FoodMacros {
                calories: 100.0,
                protein: 5.0,
                carbs: 10.0,
                fat: 2.0,
                fiber: None,
                sugars: None,
                saturated_fat: None,
            },
            micronutrients: None,
            tags: Vec::new(),
            cost: None,
        }
    }

    #[test]
    fn test_alternates_exclude_current_and_respect_dislikes() {
        let current = recipe("Κοτόπουλο με ρύζι", RecipeCategory::Main, "Κοτόπουλο");
        let with_tomato = recipe("Μοσχάρι κοκκινιστό", RecipeCategory::Main, "Ντομάτα");
        let clean = recipe("Φακές σούπα", RecipeCategory::Main, "Φακές");
        let current_id = current.id;
        let catalog = Catalog::new(Vec::new(), vec![current, with_tomato, clean]);

        let mut client = ClientProfile::new("Πελάτης");
        client.disliked_foods = "ντομάτα".to_string();

        let names: Vec<_> = recipe_alternates(&catalog, current_id, MealType::Lunch, &client, None)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Φακές σούπα"]);
    }

    #[test]
    fn test_alternates_cap_at_five_in_catalog_order() {
        let current = recipe("Τρέχον", RecipeCategory::Main, "Κοτόπουλο");
        let current_id = current.id;
        let mut recipes = vec![current];
        for i in 1..=8 {
            recipes.push(recipe(&format!("Πιάτο {i}"), RecipeCategory::Main, "Φακές"));
        }
        let catalog = Catalog::new(Vec::new(), recipes);

        let names: Vec<_> = recipe_alternates(
            &catalog,
            current_id,
            MealType::Lunch,
            &ClientProfile::new("Πελάτης"),
            None,
        )
        .iter()
        .map(|r| r.name.clone())
        .collect();
        assert_eq!(names, vec!["Πιάτο 1", "Πιάτο 2", "Πιάτο 3", "Πιάτο 4", "Πιάτο 5"]);
    }

    #[test]
    fn test_alternates_apply_context_hard_filters_without_scoring() {
        let current = recipe("Τρέχον", RecipeCategory::Snack, "Μήλο");
        let mut quick = recipe("Γρήγορο", RecipeCategory::Snack, "Μπανάνα");
        quick.time = TimeTier::VeryFast;
        let slow = recipe("Αργό", RecipeCategory::Snack, "Κινόα");
        let current_id = current.id;
        let catalog = Catalog::new(Vec::new(), vec![current, slow, quick]);

        let mut ctx = DailyContext::new(0);
        ctx.conditions.push(ContextCondition::EasyFood);

        let names: Vec<_> = recipe_alternates(
            &catalog,
            current_id,
            MealType::Snack,
            &ClientProfile::new("Πελάτης"),
            Some(&ctx),
        )
        .iter()
        .map(|r| r.name.as_str())
        .collect();
        assert_eq!(names, vec!["Γρήγορο"]);
    }

    #[test]
    fn test_substitutes_match_category_and_form() {
        let chicken = food("Κοτόπουλο", FoodCategory::Protein, FoodForm::Raw);
        let beef = food("Μοσχάρι", FoodCategory::Protein, FoodForm::Raw);
        let tuna_cooked = food("Τόνος κονσέρβα", FoodCategory::Protein, FoodForm::Cooked);
        let rice = food("Ρύζι", FoodCategory::Starch, FoodForm::Raw);
        let chicken_id = chicken.id;
        let catalog = Catalog::new(vec![chicken, beef, tuna_cooked, rice], Vec::new());

        let subs = ingredient_substitutes(&catalog, chicken_id);
        let names: Vec<_> = subs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Μοσχάρι"]);
    }

    #[test]
    fn test_substitutes_cap_at_five() {
        let base = food("Βάση", FoodCategory::Fruits, FoodForm::Raw);
        let base_id = base.id;
        let mut foods = vec![base];
        for i in 1..=7 {
            foods.push(food(&format!("Φρούτο {i}"), FoodCategory::Fruits, FoodForm::Raw));
        }
        let catalog = Catalog::new(foods, Vec::new());

        assert_eq!(ingredient_substitutes(&catalog, base_id).len(), 5);
    }

    #[test]
    fn test_unknown_food_id_yields_empty_list() {
        let catalog = Catalog::new(Vec::new(), Vec::new());
        assert!(ingredient_substitutes(&catalog, Uuid::new_v4()).is_empty());
    }
}
