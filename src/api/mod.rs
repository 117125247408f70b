// API routes and handlers

pub mod health;
pub mod plan_generation;
pub mod routes;
