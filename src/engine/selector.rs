//! Recipe selection for one slot: pool filtering, preference and condition
//! scoring, fallback chain and the final deterministic or random pick.

use rand::Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{
    ClientProfile, ContextCondition, DailyContext, MealType, Recipe, RecipeCategory, TimeTier,
};

use super::matcher;

const LOVED_BOOST: i32 = 5;
const LIKED_BOOST: i32 = 2;
const SCORE_BAND: i32 = 2;

/// Pool membership for a coarse meal-type. Lunch has no category of its
/// own and draws from the main-dish pool; dinner draws from its own
/// category plus the main-dish pool.
pub fn matches_meal_type(recipe: &Recipe, meal_type: MealType) -> bool {
    match meal_type {
        MealType::Breakfast => recipe.category == RecipeCategory::Breakfast,
        MealType::Snack => recipe.category == RecipeCategory::Snack,
        MealType::Lunch => recipe.is_main_dish(),
        MealType::Dinner => recipe.category == RecipeCategory::Dinner || recipe.is_main_dish(),
    }
}

pub(crate) fn has_disliked_ingredient(recipe: &Recipe, disliked_terms: &[String]) -> bool {
    recipe
        .ingredients
        .iter()
        .any(|ingredient| matcher::contains_term(&ingredient.name, disliked_terms))
}

fn matches_preference(recipe: &Recipe, terms: &[String]) -> bool {
    matcher::contains_term(&recipe.name, terms)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| matcher::contains_term(&ingredient.name, terms))
}

fn score_recipe(
    recipe: &Recipe,
    liked: &[String],
    loved: &[String],
    chronic: &[matcher::ChronicCondition],
    context: Option<&DailyContext>,
) -> i32 {
    let mut score = 0;

    if matches_preference(recipe, loved) {
        score += LOVED_BOOST;
    }
    if matches_preference(recipe, liked) {
        score += LIKED_BOOST;
    }

    for condition in chronic {
        if condition.friendly_tags().iter().any(|tag| recipe.has_tag(tag)) {
            score += 1;
        }
    }

    if let Some(ctx) = context {
        if ctx.has(ContextCondition::Sick) {
            if recipe.has_tag("easy-digest") {
                score += 5;
            }
            if recipe.is_salad() {
                score -= 5;
            }
        }
        if ctx.has(ContextCondition::SoreThroat) {
            if recipe.is_smoothie() || recipe.has_tag("easy-digest") {
                score += 3;
            }
            if recipe.is_salad() {
                score -= 10;
            }
        }
        if ctx.has(ContextCondition::Constipation)
            && (recipe.has_tag("constipation-friendly") || recipe.has_tag("high-fiber"))
        {
            score += 3;
        }
        if ctx.has(ContextCondition::Ibs)
            && (recipe.has_tag("ibs-friendly") || recipe.has_tag("low-fodmap"))
        {
            score += 5;
        }
        if ctx.has(ContextCondition::Gerd) && recipe.has_tag("gastritis-friendly") {
            score += 5;
        }
        if ctx.has(ContextCondition::SoftFood) && recipe.has_tag("easy-digest") {
            score += 2;
        }
    }

    score
}

/// Picks one recipe for a slot, or `None` when the catalog has nothing
/// usable for the meal-type.
///
/// The filter order is fixed: category pool, dislike exclusion, gluten
/// exclusion (the fallback set is snapshotted here), context hard filters,
/// then preference/condition scoring with a band of `SCORE_BAND` points
/// below the best score whenever the best score is positive. An empty
/// survivor set falls back to the first element of the snapshot. The final
/// pick rotates by `(day_number + slot_id.len()) % len` unless `randomize`
/// asks for a uniform random choice.
#[allow(clippy::too_many_arguments)]
pub fn select_recipe<'a>(
    catalog: &'a Catalog,
    client: &ClientProfile,
    meal_type: MealType,
    day_number: u32,
    slot_id: &str,
    context: Option<&DailyContext>,
    randomize: bool,
) -> Option<&'a Recipe> {
    let disliked = matcher::split_terms(&client.disliked_foods);
    let gluten_free_only = matcher::requires_gluten_free(&client.conditions);

    let mut candidates: Vec<&Recipe> = catalog
        .recipes()
        .iter()
        .filter(|recipe| matches_meal_type(recipe, meal_type))
        .filter(|recipe| !has_disliked_ingredient(recipe, &disliked))
        .filter(|recipe| !gluten_free_only || recipe.has_tag("gluten-free"))
        .collect();

    // Fallback pool: everything that passed the category, dislike and
    // gluten filters, before context narrowing and scoring.
    let base_pool = candidates.clone();

    if let Some(ctx) = context {
        if ctx.has(ContextCondition::EasyFood) {
            candidates.retain(|recipe| matches!(recipe.time, TimeTier::VeryFast | TimeTier::Fast));
        }
        if ctx.has(ContextCondition::CheapFood) {
            candidates.retain(|recipe| recipe.cost == crate::models::CostTier::Cheap);
        }
    }

    let chronic = matcher::detect_chronic_conditions(&client.conditions);
    let liked = matcher::split_terms(&client.liked_foods);
    let loved = matcher::split_terms(&client.loved_foods);
    let scoring_active = !chronic.is_empty()
        || context.is_some_and(|ctx| !ctx.conditions.is_empty())
        || !liked.is_empty()
        || !loved.is_empty();

    if scoring_active && !candidates.is_empty() {
        let scored: Vec<(&Recipe, i32)> = candidates
            .iter()
            .map(|recipe| (*recipe, score_recipe(recipe, &liked, &loved, &chronic, context)))
            .collect();
        let best = scored.iter().map(|(_, score)| *score).max().unwrap_or(0);
        if best > 0 {
            candidates = scored
                .into_iter()
                .filter(|(_, score)| *score >= best - SCORE_BAND)
                .map(|(recipe, _)| recipe)
                .collect();
        }
    }

    if candidates.is_empty() {
        if !base_pool.is_empty() {
            debug!(
                meal_type = meal_type.as_str(),
                slot_id, "no candidate survived filtering, using fallback pool"
            );
        }
        return base_pool.first().copied();
    }

    let index = if randomize {
        rand::thread_rng().gen_range(0..candidates.len())
    } else {
        (day_number as usize + slot_id.len()) % candidates.len()
    };
    Some(candidates[index])
}
