//! Assembles daily and weekly plans from the selector and scaler.
//!
//! A slot is either locked (an existing meal with the locked flag set is
//! carried over byte-for-byte and its stored calories trusted) or
//! regenerated. Locked meals are excluded from macro aggregation because
//! their raw macros are not recomputed.

use chrono::Duration;

use crate::catalog::Catalog;
use crate::models::{ClientProfile, DailyPlan, MacroTotals, PlanSettings, WeeklyPlan};

use super::scaler::scale_recipe;
use super::selector::select_recipe;
use super::slots::{active_slots, meal_type_for, slot_target_calories};

/// Builds one day of the plan. `day_number` is 1-based; the day's context
/// is looked up in the settings by `day_index == day_number - 1` and echoed
/// onto the result. A slot stays unset only when selection or scaling finds
/// nothing usable for its meal-type.
pub fn build_daily_plan(
    catalog: &Catalog,
    day_number: u32,
    client: &ClientProfile,
    settings: &PlanSettings,
    slots: &[&str],
    existing_day: Option<&DailyPlan>,
) -> DailyPlan {
    let date = settings.start_date + Duration::days(i64::from(day_number) - 1);
    let context = settings
        .daily_contexts
        .iter()
        .find(|ctx| ctx.day_index == day_number - 1);

    let mut plan = DailyPlan {
        date,
        day_number,
        meals: Default::default(),
        total_calories: 0,
        macros: MacroTotals::default(),
        context: context.cloned(),
    };

    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;

    for &slot_id in slots {
        let locked = existing_day
            .and_then(|day| day.meals.get(slot_id))
            .filter(|meal| meal.locked);
        if let Some(meal) = locked {
            plan.total_calories += meal.calories;
            plan.meals.insert(slot_id.to_string(), meal.clone());
            continue;
        }

        let meal_type = meal_type_for(slot_id);
        let target = slot_target_calories(settings.target_calories, settings.meal_count, slot_id);
        let Some(recipe) = select_recipe(
            catalog,
            client,
            meal_type,
            day_number,
            slot_id,
            context,
            settings.randomize,
        ) else {
            continue;
        };
        let Some(scaled) = scale_recipe(catalog, recipe, target, meal_type) else {
            continue;
        };

        plan.total_calories += scaled.meal.calories;
        protein += scaled.protein;
        carbs += scaled.carbs;
        fat += scaled.fat;
        plan.meals.insert(slot_id.to_string(), scaled.meal);
    }

    plan.macros = MacroTotals {
        protein: protein.round() as u32,
        carbs: carbs.round() as u32,
        fat: fat.round() as u32,
    };
    plan
}

/// Builds the full seven-day plan, carrying locked meals forward from the
/// corresponding day of `existing` when one is supplied.
pub fn build_weekly_plan(
    catalog: &Catalog,
    client: &ClientProfile,
    settings: &PlanSettings,
    existing: Option<&WeeklyPlan>,
) -> WeeklyPlan {
    let slots = active_slots(settings.meal_count);

    let mut days = Vec::with_capacity(7);
    let mut total = 0u32;
    for day_number in 1..=7 {
        let existing_day = existing.and_then(|plan| {
            plan.days.iter().find(|day| day.day_number == day_number)
        });
        let day = build_daily_plan(catalog, day_number, client, settings, &slots, existing_day);
        total += day.total_calories;
        days.push(day);
    }

    let average_calories = (f64::from(total) / 7.0).round() as u32;
    WeeklyPlan {
        days,
        average_calories,
    }
}
