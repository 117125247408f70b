use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fitness_coach::api::routes::create_routes;

#[cfg(test)]
mod api_integration_tests {
    use super::*;

    fn create_test_app() -> Router {
        create_routes()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn plan_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/generate-plan")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let app = create_test_app();

        let request = Request::builder()
            .method(Method::GET)
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "fitness-coach");
    }

    #[tokio::test]
    async fn test_generate_plan_full_survey() {
        let app = create_test_app();

        let request = plan_request(json!({
            "name": "Jordan",
            "age": 34,
            "gender": "Female",
            "height": 168.0,
            "weight": 64.5,
            "existing_conditions": ["None"],
            "physical_limitations": ["None"],
            "doctor_approval": "Yes",
            "daily_steps": 6000,
            "heart_rate": 72,
            "goal": "Weight loss",
            "duration_pref": 30,
            "days_per_week": 4,
            "exercise_types": ["Walking", "Yoga"]
        }));

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["plan_type"], "weight_loss");
        assert_eq!(body["activity_level"], "Moderate");
        assert_eq!(body["rest_days"], 2);
        assert_eq!(body["step_goal"], 7500);
        assert_eq!(body["calories_target"], 1950);

        let weekly = body["weekly_targets"].as_array().unwrap();
        assert_eq!(weekly.len(), 4);
        assert_eq!(weekly[0]["week_label"], "Week 1");
        assert_eq!(weekly[0]["step_target"], 6000);
        assert_eq!(weekly[3]["step_target"], 7500);
        assert_eq!(weekly[3]["calorie_target"], 1950);

        let meals = body["diet_plan"]["meals"].as_object().unwrap();
        assert_eq!(meals.len(), 7);
        let day1 = meals["Day 1"].as_array().unwrap();
        assert_eq!(day1.len(), 4);
        assert_eq!(day1[0]["meal_slot"], "Breakfast");
        assert_eq!(day1[3]["meal_slot"], "Snack");
    }

    #[tokio::test]
    async fn test_generate_plan_empty_body_uses_defaults() {
        let app = create_test_app();

        let response = app.oneshot(plan_request(json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["plan_type"], "balanced");
        // default 4000 steps ramped to the final week
        assert_eq!(body["step_goal"], 5500);
        assert_eq!(body["calories_target"], 1950);
        assert!(body["diet_plan"].is_object());
    }

    #[tokio::test]
    async fn test_generate_plan_without_diet_plan() {
        let app = create_test_app();

        let response = app
            .oneshot(plan_request(json!({
                "goal": "Strength",
                "include_diet_plan": false
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["plan_type"], "strength");
        assert!(body["diet_plan"].is_null());
    }

    #[tokio::test]
    async fn test_generate_plan_rejects_malformed_json() {
        let app = create_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/generate-plan")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["error_code"], "INVALID_REQUEST_BODY");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let app = create_test_app();

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
