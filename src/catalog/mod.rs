// In-memory catalog snapshot and the source abstraction the storage layer
// implements

pub mod seed;

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::CatalogError;
use crate::models::{FoodItem, Recipe};

pub use seed::{seed_catalog, SeedSource};

/// Immutable snapshot of the food/recipe reference data for one generation
/// run. Iteration order is the stored catalog order; selection fallbacks and
/// substitution listings depend on it being stable.
#[derive(Debug, Clone)]
pub struct Catalog {
    foods: Vec<FoodItem>,
    recipes: Vec<Recipe>,
    food_index: HashMap<Uuid, usize>,
    recipe_index: HashMap<Uuid, usize>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodItem>, recipes: Vec<Recipe>) -> Self {
        let food_index = foods.iter().enumerate().map(|(i, f)| (f.id, i)).collect();
        let recipe_index = recipes.iter().enumerate().map(|(i, r)| (r.id, i)).collect();
        Self {
            foods,
            recipes,
            food_index,
            recipe_index,
        }
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn food_by_id(&self, id: Uuid) -> Option<&FoodItem> {
        self.food_index.get(&id).map(|&i| &self.foods[i])
    }

    pub fn recipe_by_id(&self, id: Uuid) -> Option<&Recipe> {
        self.recipe_index.get(&id).map(|&i| &self.recipes[i])
    }

    /// Cooked-weight conversion factor for an ingredient reference.
    /// Unresolved or missing ids fall back to 1.0 so the raw amount is used.
    pub fn conversion_factor(&self, food_id: Option<Uuid>) -> f64 {
        food_id
            .and_then(|id| self.food_by_id(id))
            .map_or(1.0, |food| food.conversion_factor)
    }
}

/// Where catalog snapshots come from. The built-in seed implements this;
/// the JSON file store outside this crate implements the same trait.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError>;
}
