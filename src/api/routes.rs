use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health::health_check;
use super::plan_generation::plan_generation_routes;

pub fn create_routes() -> Router {
    // Allow all origins for local testing (adjust in production)
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", plan_generation_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
