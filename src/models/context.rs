use serde::{Deserialize, Serialize};

/// Per-day override: transient conditions and an optional one-off event.
/// At most one context per day index; the builder looks it up by exact
/// `day_index` match and echoes it onto the generated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyContext {
    pub day_index: u32, // 0-based, 0..=6
    pub conditions: Vec<ContextCondition>,
    pub event: Option<ContextEvent>,
}

impl DailyContext {
    pub fn new(day_index: u32) -> Self {
        Self {
            day_index,
            conditions: Vec::new(),
            event: None,
        }
    }

    pub fn has(&self, condition: ContextCondition) -> bool {
        self.conditions.contains(&condition)
    }
}

/// Transient conditions selectable per day. `Stress` and `BadSleep` are
/// recorded and open preference scoring but carry no boost of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextCondition {
    Sick,
    Constipation,
    Ibs,
    Gerd,
    SoreThroat,
    Stress,
    BadSleep,
    SoftFood,
    EasyFood,
    CheapFood,
}

/// One-off calendar event attached to a day. Carried for display and
/// persistence only; selection does not branch on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextEvent {
    #[serde(rename = "type")]
    pub kind: EventType,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Birthday,
    NightOut,
    Holiday,
    Trip,
    CheatMeal,
}
