use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Office client record. The generator reads only the preference and
/// condition fields; anthropometrics feed the calorie-target estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub id: Uuid,
    pub full_name: String,
    pub sex: Option<Sex>,
    pub birth_date: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub conditions: Vec<String>, // free-text Greek labels, matched by substring
    pub disliked_foods: String,  // comma-separated terms
    pub liked_foods: String,
    pub loved_foods: String,
    pub goals: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ClientProfile {
    /// Fresh record with empty preference text and no measurements.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            sex: None,
            birth_date: None,
            height_cm: None,
            weight_kg: None,
            activity_level: None,
            conditions: Vec::new(),
            disliked_foods: String::new(),
            liked_foods: String::new(),
            loved_foods: String::new(),
            goals: String::new(),
            notes: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}
