use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use thiserror::Error;

use crate::models::{Plan, UserInput};
use crate::services;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error_code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error_code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }
}

/// Transport-level failures. The planner itself is pure and infallible, so the
/// only errors this surface produces are malformed request bodies.
#[derive(Error, Debug)]
pub enum PlanApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for PlanApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            PlanApiError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST_BODY",
                rejection.body_text(),
            ),
        };

        (status, Json(ApiError::new(code, &message))).into_response()
    }
}

pub fn plan_generation_routes() -> Router {
    Router::new().route("/generate-plan", post(generate_plan))
}

/// Generate a 4-week fitness and diet plan from the submitted survey.
///
/// All survey fields are optional; missing values fall back to the planner's
/// documented defaults, so a well-formed body always yields a 200.
pub async fn generate_plan(
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<Plan>, PlanApiError> {
    let Json(input) = payload?;

    tracing::debug!(
        goal = input.goal.as_deref().unwrap_or(""),
        daily_steps = input.daily_steps,
        "generating plan"
    );

    let plan = services::generate_plan(&input);

    tracing::info!(
        plan_type = %plan.plan_type,
        step_goal = plan.step_goal,
        calories_target = plan.calories_target,
        "plan generated"
    );

    Ok(Json(plan))
}
