use crate::models::PlanCategory;

/// Maps the user's stated goal to a plan category.
///
/// Matching is a case-insensitive substring test and the first match wins:
/// "weight" is checked before "strength"/"muscle", so a goal mentioning both
/// keywords classifies as weight loss. Anything else, including an absent or
/// empty goal, falls back to the balanced category.
pub fn classify_goal(goal: Option<&str>) -> PlanCategory {
    let goal = goal.unwrap_or_default().to_lowercase();

    if goal.contains("weight") {
        PlanCategory::WeightLoss
    } else if goal.contains("strength") || goal.contains("muscle") {
        PlanCategory::Strength
    } else {
        PlanCategory::Balanced
    }
}
