//! Error types for meal-plan generation.

use thiserror::Error;

/// Errors that can occur while building a meal-plan grid.
#[derive(Error, Debug)]
pub enum MealPlanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date: month {month} of year {year} does not exist")]
    InvalidDate { year: i32, month: u32 },
}

/// Result type alias for meal-plan operations.
pub type MealPlanResult<T> = Result<T, MealPlanError>;
