// Business logic services

pub mod diet_plan_service;
pub mod goal_service;
pub mod plan_generation_service;

pub use diet_plan_service::synthesize_diet;
pub use goal_service::classify_goal;
pub use plan_generation_service::{generate_plan, generate_schedule};
