use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::catalog::{Catalog, CatalogSource};
use crate::engine;
use crate::engine::TargetError;
use crate::models::{ClientProfile, DailyPlan, MealPlanRecord, PlanSettings, WeeklyPlan};

/// Facade over the generation engine for the HTTP/storage layers outside
/// this crate. Owns the catalog snapshot for the duration of a request and
/// adds logging; all decision logic stays in [`crate::engine`].
#[derive(Clone)]
pub struct PlanGenerationService {
    catalog: Catalog,
}

impl PlanGenerationService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn from_source(source: &dyn CatalogSource) -> Result<Self> {
        let catalog = source
            .load()
            .context("failed to load catalog for plan generation")?;
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ordered slot ids the given meal count activates.
    pub fn active_slots(&self, meal_count: u32) -> Vec<&'static str> {
        engine::active_slots(meal_count)
    }

    /// Generates the full seven-day plan, carrying locked meals forward
    /// from `existing` when one is supplied.
    pub fn generate_weekly_plan(
        &self,
        client: &ClientProfile,
        settings: &PlanSettings,
        existing: Option<&WeeklyPlan>,
    ) -> WeeklyPlan {
        info!(
            client_id = %client.id,
            target_calories = settings.target_calories,
            meal_count = settings.meal_count,
            randomize = settings.randomize,
            regenerating = existing.is_some(),
            "generating weekly plan"
        );
        engine::build_weekly_plan(&self.catalog, client, settings, existing)
    }

    /// Regenerates a single day, preserving locked meals of `existing_day`.
    pub fn generate_daily_plan(
        &self,
        day_number: u32,
        client: &ClientProfile,
        settings: &PlanSettings,
        active_slots: &[&str],
        existing_day: Option<&DailyPlan>,
    ) -> DailyPlan {
        info!(client_id = %client.id, day_number, "generating daily plan");
        engine::build_daily_plan(
            &self.catalog,
            day_number,
            client,
            settings,
            active_slots,
            existing_day,
        )
    }

    /// Generates a week and wraps it into the record the storage layer
    /// persists under `mealPlans`.
    pub fn build_plan_record(
        &self,
        client: &ClientProfile,
        name: impl Into<String>,
        settings: PlanSettings,
    ) -> MealPlanRecord {
        let week = self.generate_weekly_plan(client, &settings, None);
        MealPlanRecord::new(client.id, name, settings, week)
    }

    /// Pre-fills the plan form's calorie target from the client record,
    /// as of today.
    pub fn suggest_target_calories(&self, client: &ClientProfile) -> Result<u32, TargetError> {
        self.suggest_target_calories_at(client, Utc::now().date_naive())
    }

    /// Same estimate pinned to an explicit reference date.
    pub fn suggest_target_calories_at(
        &self,
        client: &ClientProfile,
        reference_date: NaiveDate,
    ) -> Result<u32, TargetError> {
        engine::suggest_target_calories(client, reference_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    fn service() -> PlanGenerationService {
        PlanGenerationService::new(seed_catalog())
    }

    #[test]
    fn test_plan_record_wraps_settings_and_week() {
        let service = service();
        let client = ClientProfile::new("Δοκιμαστικός Πελάτης");
        let settings = PlanSettings::new(1800, 5, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());

        let record = service.build_plan_record(&client, "Εβδομάδα 1", settings.clone());
        assert_eq!(record.client_id, client.id);
        assert_eq!(record.name, "Εβδομάδα 1");
        assert_eq!(record.settings, settings);
        assert_eq!(record.week.days.len(), 7);
    }

    #[test]
    fn test_active_slots_delegate_to_the_resolver() {
        let service = service();
        assert_eq!(service.active_slots(4).len(), 4);
        assert_eq!(
            service.active_slots(9),
            vec!["breakfast", "snack1", "lunch", "afternoon1", "dinner"]
        );
    }
}
