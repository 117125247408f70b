use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Plan category derived from the user's stated goal. Never stored; recomputed
/// on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanCategory {
    WeightLoss,
    Strength,
    Balanced,
}

impl PlanCategory {
    /// Parses a category label, case-insensitive. Unknown labels fall back to
    /// `Balanced` rather than erroring; `muscle_gain` is an accepted alias for
    /// `Strength`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "weight_loss" => PlanCategory::WeightLoss,
            "strength" | "muscle_gain" => PlanCategory::Strength,
            _ => PlanCategory::Balanced,
        }
    }
}

impl fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlanCategory::WeightLoss => "weight_loss",
            PlanCategory::Strength => "strength",
            PlanCategory::Balanced => "balanced",
        };
        write!(f, "{label}")
    }
}

/// One week of the 4-week ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTarget {
    pub week_label: String,
    pub step_target: i64,
    pub calorie_target: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Fixed slot order used for every day of the diet plan.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub meal_slot: MealSlot,
    pub calories: i64,
    pub suggestion: String,
}

/// 7-day meal schedule. Keys are "Day 1".."Day 7"; each day carries exactly
/// four meals in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub plan_type: PlanCategory,
    pub calories_target: i64,
    pub meals: BTreeMap<String, Vec<MealEntry>>,
}

/// Full plan returned to the caller: weekly text, numeric targets and the
/// optional diet schedule. Built fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub activity_level: String,
    pub calories_target: i64,
    pub step_goal: i64,
    pub rest_days: u32,
    pub plan: BTreeMap<String, String>,
    pub plan_type: PlanCategory,
    pub weekly_targets: Vec<WeeklyTarget>,
    pub diet_plan: Option<DietPlan>,
}
