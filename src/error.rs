use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by catalog lookups and catalog sources.
///
/// The generation engine itself never returns these: data-quality problems
/// during generation degrade to fallbacks or unset slots. Only id-based
/// lookups on behalf of the editing UI and source loading are fallible.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("food {0} not found in catalog")]
    FoodNotFound(Uuid),

    #[error("recipe {0} not found in catalog")]
    RecipeNotFound(Uuid),

    #[error("catalog source unavailable: {0}")]
    SourceUnavailable(String),
}
