use std::collections::BTreeMap;

use crate::models::{DietPlan, MealEntry, MealSlot, PlanCategory};

/// Per-meal calorie split for a category. Fractions sum to 1.0.
struct MealTemplate {
    slot: MealSlot,
    fraction: f64,
    suggestion: &'static str,
}

const WEIGHT_LOSS_MEALS: [MealTemplate; 4] = [
    MealTemplate {
        slot: MealSlot::Breakfast,
        fraction: 0.25,
        suggestion: "Oatmeal with berries and a boiled egg",
    },
    MealTemplate {
        slot: MealSlot::Lunch,
        fraction: 0.35,
        suggestion: "Grilled chicken salad with mixed greens",
    },
    MealTemplate {
        slot: MealSlot::Dinner,
        fraction: 0.30,
        suggestion: "Steamed fish with vegetables",
    },
    MealTemplate {
        slot: MealSlot::Snack,
        fraction: 0.10,
        suggestion: "Greek yogurt or a small handful of nuts",
    },
];

const STRENGTH_MEALS: [MealTemplate; 4] = [
    MealTemplate {
        slot: MealSlot::Breakfast,
        fraction: 0.25,
        suggestion: "Scrambled eggs, wholegrain toast, banana",
    },
    MealTemplate {
        slot: MealSlot::Lunch,
        fraction: 0.30,
        suggestion: "Quinoa bowl with chicken and veggies",
    },
    MealTemplate {
        slot: MealSlot::Dinner,
        fraction: 0.30,
        suggestion: "Beef or tofu stir-fry with brown rice",
    },
    MealTemplate {
        slot: MealSlot::Snack,
        fraction: 0.15,
        suggestion: "Protein shake or cottage cheese",
    },
];

const BALANCED_MEALS: [MealTemplate; 4] = [
    MealTemplate {
        slot: MealSlot::Breakfast,
        fraction: 0.25,
        suggestion: "Greek yogurt with granola and fruit",
    },
    MealTemplate {
        slot: MealSlot::Lunch,
        fraction: 0.30,
        suggestion: "Turkey sandwich and salad",
    },
    MealTemplate {
        slot: MealSlot::Dinner,
        fraction: 0.30,
        suggestion: "Grilled salmon with quinoa and veggies",
    },
    MealTemplate {
        slot: MealSlot::Snack,
        fraction: 0.15,
        suggestion: "Fruit or a small handful of nuts",
    },
];

/// Daily calorie budget for a category, derived from the schedule's final-week
/// calorie target. Weight loss keeps a 1200 kcal floor.
fn daily_calories(category: PlanCategory, calories_target: i64) -> i64 {
    match category {
        PlanCategory::WeightLoss => {
            let reduced = (calories_target as f64 * 0.85).round() as i64;
            reduced.max(1200)
        }
        PlanCategory::Strength => (calories_target as f64 * 1.10).round() as i64,
        PlanCategory::Balanced => calories_target,
    }
}

fn meal_templates(category: PlanCategory) -> &'static [MealTemplate; 4] {
    match category {
        PlanCategory::WeightLoss => &WEIGHT_LOSS_MEALS,
        PlanCategory::Strength => &STRENGTH_MEALS,
        PlanCategory::Balanced => &BALANCED_MEALS,
    }
}

/// Builds the 7-day meal schedule for a plan category.
///
/// Every day repeats the same four meals in slot order; per-meal calories are
/// the floored share of the daily budget. The floor truncation means a day's
/// meals can sum slightly under the daily budget; there is no rebalancing step.
pub fn synthesize_diet(category: PlanCategory, calories_target: i64) -> DietPlan {
    let daily_cal = daily_calories(category, calories_target);
    let templates = meal_templates(category);

    let mut meals = BTreeMap::new();
    for day in 1..=7 {
        let entries: Vec<MealEntry> = templates
            .iter()
            .map(|t| MealEntry {
                meal_slot: t.slot,
                calories: (daily_cal as f64 * t.fraction).floor() as i64,
                suggestion: t.suggestion.to_string(),
            })
            .collect();
        meals.insert(format!("Day {day}"), entries);
    }

    DietPlan {
        plan_type: category,
        calories_target,
        meals,
    }
}
