use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Survey record submitted by the intake form. Every field is optional so the
/// planner can run on partial data; missing numerics fall back to documented
/// defaults instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub existing_conditions: Option<Vec<String>>,
    pub physical_limitations: Option<Vec<String>>,
    pub doctor_approval: Option<String>,
    pub daily_steps: Option<i64>,
    pub heart_rate: Option<u32>,
    pub calories_burned: Option<u32>,
    pub sleep_duration: Option<f64>,
    pub active_minutes: Option<u32>,
    pub sedentary_minutes: Option<u32>,
    pub goal: Option<String>,
    pub duration_pref: Option<u32>,
    pub days_per_week: Option<u32>,
    pub exercise_types: Option<Vec<String>>,
    /// Embed the synthesized diet plan in the response. Defaults to true.
    #[serde(default = "default_include_diet_plan")]
    pub include_diet_plan: bool,
}

fn default_include_diet_plan() -> bool {
    true
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            name: None,
            age: None,
            gender: None,
            height: None,
            weight: None,
            existing_conditions: None,
            physical_limitations: None,
            doctor_approval: None,
            daily_steps: None,
            heart_rate: None,
            calories_burned: None,
            sleep_duration: None,
            active_minutes: None,
            sedentary_minutes: None,
            goal: None,
            duration_pref: None,
            days_per_week: None,
            exercise_types: None,
            include_diet_plan: true,
        }
    }
}
