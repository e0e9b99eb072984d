//! Core types for mealcal.
//!
//! This crate provides the domain types shared by the mealcal CLI:
//! - `MealEntry` for the configured meal rotation
//! - `grid` module with the calendar grid builder
//! - error types for grid construction

pub mod error;
pub mod grid;
pub mod meal;

// Re-export the main types at crate root for convenience
pub use error::{MealPlanError, MealPlanResult};
pub use grid::{DayCell, MonthGrid, WeekRow};
pub use meal::MealEntry;
