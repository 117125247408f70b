// Data models for survey input and generated plans

pub mod plan;
pub mod user_input;

pub use plan::*;
pub use user_input::*;
