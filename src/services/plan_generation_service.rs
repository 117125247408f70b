use std::collections::BTreeMap;

use crate::models::{Plan, UserInput, WeeklyTarget};

use super::diet_plan_service::synthesize_diet;
use super::goal_service::classify_goal;

/// Baseline steps when the survey omits the field.
const DEFAULT_DAILY_STEPS: i64 = 4000;
const MIN_BASE_STEPS: i64 = 2000;
const MAX_BASE_STEPS: i64 = 12000;
const WEEKLY_STEP_INCREMENT: i64 = 500;

const BASE_CALORIES: i64 = 1800;
const WEEKLY_CALORIE_INCREMENT: i64 = 50;

const REST_DAYS: u32 = 2;
const ACTIVITY_LEVEL: &str = "Moderate";

const WEEK_DESCRIPTIONS: [&str; 4] = [
    "Begin with mobility and low-impact cardio.",
    "Increase frequency and include strength/mobility sessions.",
    "Introduce higher intensity intervals or progressive overload.",
    "Taper, focus on recovery and flexibility.",
];

/// Builds the 4-week step and calorie ramp from the reported daily steps.
///
/// The base is clamped to [2000, 12000] before the ramp, so all four weekly
/// values derive from a single clamped baseline. Calories ramp from a fixed
/// 1800 base regardless of input; the schedule is activity-anchored, not
/// goal-anchored.
pub fn generate_schedule(daily_steps: Option<i64>) -> Vec<WeeklyTarget> {
    let base_steps = daily_steps
        .unwrap_or(DEFAULT_DAILY_STEPS)
        .clamp(MIN_BASE_STEPS, MAX_BASE_STEPS);

    (0..4i64)
        .map(|week| WeeklyTarget {
            week_label: format!("Week {}", week + 1),
            step_target: base_steps + week * WEEKLY_STEP_INCREMENT,
            calorie_target: BASE_CALORIES + week * WEEKLY_CALORIE_INCREMENT,
        })
        .collect()
}

fn week_descriptions() -> BTreeMap<String, String> {
    WEEK_DESCRIPTIONS
        .iter()
        .enumerate()
        .map(|(i, text)| (format!("Week {}", i + 1), text.to_string()))
        .collect()
}

/// Assembles the full 4-week plan for a survey record: classify the goal,
/// build the weekly ramp, then synthesize the diet plan from the final week's
/// calorie target. Pure function of the input; never fails.
pub fn generate_plan(input: &UserInput) -> Plan {
    let plan_type = classify_goal(input.goal.as_deref());
    let weekly_targets = generate_schedule(input.daily_steps);

    // Final-week targets become the headline goals.
    let last = &weekly_targets[weekly_targets.len() - 1];
    let step_goal = last.step_target;
    let calories_target = last.calorie_target;

    let diet_plan = input
        .include_diet_plan
        .then(|| synthesize_diet(plan_type, calories_target));

    Plan {
        activity_level: ACTIVITY_LEVEL.to_string(),
        calories_target,
        step_goal,
        rest_days: REST_DAYS,
        plan: week_descriptions(),
        plan_type,
        weekly_targets,
        diet_plan,
    }
}
