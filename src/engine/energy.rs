//! Calorie-target suggestion used to pre-fill the plan form.
//!
//! Mifflin-St Jeor BMR, multiplied by the activity factor, adjusted by the
//! goal direction read out of the client's free-text goals, rounded to the
//! nearest 50 kcal and clamped to the range the office works in. An office
//! convenience, not a clinical adequacy calculation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{ActivityLevel, ClientProfile, Sex};

use super::matcher::{detect_goal_direction, GoalDirection};

const WEIGHT_LOSS_ADJUSTMENT: f64 = -500.0;
const WEIGHT_GAIN_ADJUSTMENT: f64 = 300.0;
const MIN_TARGET: f64 = 1200.0;
const MAX_TARGET: f64 = 4000.0;

/// A field the estimate cannot proceed without.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    #[error("client record has no sex")]
    MissingSex,
    #[error("client record has no weight")]
    MissingWeight,
    #[error("client record has no height")]
    MissingHeight,
    #[error("client record has no birth date")]
    MissingBirthDate,
}

fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Suggested daily calorie target for `client` as of `reference_date`.
///
/// Clients with no recorded activity level are treated as sedentary; a
/// birth date in the future counts as age zero.
pub fn suggest_target_calories(
    client: &ClientProfile,
    reference_date: NaiveDate,
) -> Result<u32, TargetError> {
    let sex = client.sex.ok_or(TargetError::MissingSex)?;
    let weight_kg = client.weight_kg.ok_or(TargetError::MissingWeight)?;
    let height_cm = client.height_cm.ok_or(TargetError::MissingHeight)?;
    let birth_date = client.birth_date.ok_or(TargetError::MissingBirthDate)?;

    let age_years = reference_date.years_since(birth_date).unwrap_or(0);

    let bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years)
        + match sex {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        };

    let level = client.activity_level.unwrap_or(ActivityLevel::Sedentary);
    let maintenance = bmr * activity_factor(level);

    let adjustment = match detect_goal_direction(&client.goals) {
        GoalDirection::Lose => WEIGHT_LOSS_ADJUSTMENT,
        GoalDirection::Gain => WEIGHT_GAIN_ADJUSTMENT,
        GoalDirection::Maintain => 0.0,
    };

    let target = ((maintenance + adjustment) / 50.0).round() * 50.0;
    Ok(target.clamp(MIN_TARGET, MAX_TARGET) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn measured_client() -> ClientProfile {
        let mut client = ClientProfile::new("Δοκιμαστικός Πελάτης");
        client.sex = Some(Sex::Male);
        client.weight_kg = Some(80.0);
        client.height_cm = Some(180.0);
        client.birth_date = NaiveDate::from_ymd_opt(1990, 1, 6);
        client.activity_level = Some(ActivityLevel::Moderate);
        client
    }

    #[test]
    fn test_maintenance_target_for_moderate_male() {
        // BMR = 10×80 + 6.25×180 − 5×35 + 5 = 1755; ×1.55 = 2720.25 → 2700
        let target = suggest_target_calories(&measured_client(), reference_date()).unwrap();
        assert_eq!(target, 2700);
    }

    #[test]
    fn test_female_offset_applies() {
        let mut client = measured_client();
        client.sex = Some(Sex::Female);
        // BMR = 1755 − 166 = 1589; ×1.55 = 2462.95 → 2450
        let target = suggest_target_calories(&client, reference_date()).unwrap();
        assert_eq!(target, 2450);
    }

    #[test]
    fn test_goal_markers_shift_the_target() {
        let mut client = measured_client();
        client.goals = "Απώλεια βάρους".to_string();
        // 2720.25 − 500 = 2220.25 → 2200
        assert_eq!(suggest_target_calories(&client, reference_date()).unwrap(), 2200);

        client.goals = "Αύξηση βάρους και μυϊκή μάζα".to_string();
        // 2720.25 + 300 = 3020.25 → 3000
        assert_eq!(suggest_target_calories(&client, reference_date()).unwrap(), 3000);
    }

    #[test]
    fn test_missing_activity_level_means_sedentary() {
        let mut client = measured_client();
        client.activity_level = None;
        // 1755 × 1.2 = 2106 → 2100
        assert_eq!(suggest_target_calories(&client, reference_date()).unwrap(), 2100);
    }

    #[test]
    fn test_clamped_to_office_range() {
        let mut client = measured_client();
        client.sex = Some(Sex::Female);
        client.weight_kg = Some(40.0);
        client.height_cm = Some(150.0);
        client.birth_date = NaiveDate::from_ymd_opt(1950, 1, 6);
        client.activity_level = Some(ActivityLevel::Sedentary);
        client.goals = "Απώλεια βάρους".to_string();
        // BMR = 400 + 937.5 − 375 − 161 = 801.5; ×1.2 − 500 = 461.8 → clamp
        assert_eq!(suggest_target_calories(&client, reference_date()).unwrap(), 1200);

        let mut client = measured_client();
        client.weight_kg = Some(140.0);
        client.activity_level = Some(ActivityLevel::VeryActive);
        client.goals = "μυϊκή μάζα".to_string();
        // BMR = 1400 + 1125 − 175 + 5 = 2355; ×1.9 + 300 = 4774.5 → clamp
        assert_eq!(suggest_target_calories(&client, reference_date()).unwrap(), 4000);
    }

    #[test]
    fn test_missing_fields_name_the_field() {
        let client = ClientProfile::new("Χωρίς μετρήσεις");
        assert_eq!(
            suggest_target_calories(&client, reference_date()),
            Err(TargetError::MissingSex)
        );

        let mut client = measured_client();
        client.birth_date = None;
        assert_eq!(
            suggest_target_calories(&client, reference_date()),
            Err(TargetError::MissingBirthDate)
        );
    }
}
