// Shared fixtures for the integration tests. Everything runs against the
// built-in seed catalog, the same data the office starts with.

#![allow(dead_code)]

use chrono::NaiveDate;
use diaita::models::{ClientProfile, PlanSettings};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

/// Client with no preferences, conditions or measurements.
pub fn plain_client() -> ClientProfile {
    ClientProfile::new("Δοκιμαστικός Πελάτης")
}

/// Scenario-A settings: 1800 kcal over five meals, deterministic.
pub fn settings_1800() -> PlanSettings {
    PlanSettings::new(1800, 5, start_date())
}
