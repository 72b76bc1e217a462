// Rule-based generation engine. Pure functions over explicit catalog,
// client and settings inputs; no I/O and no shared state.

pub mod builder;
pub mod energy;
pub mod matcher;
pub mod scaler;
pub mod selector;
pub mod slots;
pub mod substitute;

pub use builder::{build_daily_plan, build_weekly_plan};
pub use energy::{suggest_target_calories, TargetError};
pub use scaler::{scale_recipe, smart_round, ScaledMeal};
pub use selector::select_recipe;
pub use slots::{active_slots, calorie_ratio, meal_type_for, slot_target_calories};
pub use substitute::{ingredient_substitutes, recipe_alternates, IngredientSubstitute};
