use anyhow::{Context, Result};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::{Catalog, CatalogSource};
use crate::engine::{ingredient_substitutes, recipe_alternates, IngredientSubstitute};
use crate::engine::selector::matches_meal_type;
use crate::error::CatalogError;
use crate::models::{ClientProfile, DailyContext, FoodItem, MealType, Recipe};

/// Lookup and substitution facade over the catalog, used by the editing
/// screens outside this crate.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn from_source(source: &dyn CatalogSource) -> Result<Self> {
        let catalog = source.load().context("failed to load catalog")?;
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn food(&self, id: Uuid) -> Result<&FoodItem, CatalogError> {
        self.catalog
            .food_by_id(id)
            .ok_or(CatalogError::FoodNotFound(id))
    }

    pub fn recipe(&self, id: Uuid) -> Result<&Recipe, CatalogError> {
        self.catalog
            .recipe_by_id(id)
            .ok_or(CatalogError::RecipeNotFound(id))
    }

    /// Full pool for a meal-type, in catalog order.
    pub fn recipes_for(&self, meal_type: MealType) -> Vec<&Recipe> {
        self.catalog
            .recipes()
            .iter()
            .filter(|recipe| matches_meal_type(recipe, meal_type))
            .collect()
    }

    /// Up to five replacement recipes for the meal currently in a slot.
    pub fn recipe_alternates(
        &self,
        current_recipe_id: Uuid,
        meal_type: MealType,
        client: &ClientProfile,
        context: Option<&DailyContext>,
    ) -> Vec<&Recipe> {
        let alternates =
            recipe_alternates(&self.catalog, current_recipe_id, meal_type, client, context);
        debug!(
            %current_recipe_id,
            meal_type = meal_type.as_str(),
            found = alternates.len(),
            "listed recipe alternates"
        );
        alternates
    }

    /// Up to five same-category, same-form swaps for an ingredient.
    pub fn ingredient_substitutes(&self, food_id: Uuid) -> Vec<IngredientSubstitute> {
        ingredient_substitutes(&self.catalog, food_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    #[test]
    fn test_lookups_return_typed_errors() {
        let service = CatalogService::new(seed_catalog());
        let missing = Uuid::new_v4();

        assert!(matches!(
            service.food(missing),
            Err(CatalogError::FoodNotFound(id)) if id == missing
        ));
        assert!(matches!(
            service.recipe(missing),
            Err(CatalogError::RecipeNotFound(id)) if id == missing
        ));

        let known = service.catalog().foods()[0].id;
        assert!(service.food(known).is_ok());
    }

    #[test]
    fn test_pool_listing_matches_selector_membership() {
        let service = CatalogService::new(seed_catalog());
        for meal_type in [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack] {
            let pool = service.recipes_for(meal_type);
            assert!(!pool.is_empty());
            assert!(pool.iter().all(|r| matches_meal_type(r, meal_type)));
        }
    }
}
