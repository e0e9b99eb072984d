//! Meal rotation entries read from configuration.

use serde::Deserialize;

/// One reusable (breakfast, dinner) pair from configuration.
///
/// The order of entries defines the rotation sequence: day 1 of the month
/// takes the first entry, day 2 the second, wrapping around when the list
/// is exhausted. A single entry repeats every day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealEntry {
    pub breakfast: String,
    pub dinner: String,
}
