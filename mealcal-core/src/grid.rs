//! Calendar grid builder.
//!
//! Maps the configured meal rotation onto the day cells of a Monday-first
//! month grid, including the blank cells before the first day and after the
//! last day of the month. This is a pure computation; rendering the grid to
//! HTML is the CLI's job.

use chrono::{Datelike, NaiveDate};

use crate::error::{MealPlanError, MealPlanResult};
use crate::meal::MealEntry;

/// One slot of a week row: either padding or a calendar day with its meals.
#[derive(Debug, Clone, PartialEq)]
pub enum DayCell {
    Empty,
    Day {
        number: u32,
        breakfast: String,
        dinner: String,
    },
}

impl DayCell {
    pub fn is_filled(&self) -> bool {
        matches!(self, DayCell::Day { .. })
    }
}

/// Seven day cells, Monday first.
pub type WeekRow = [DayCell; 7];

/// Full calendar layout for one month, as week rows of day cells.
///
/// Every day of the month appears in exactly one `Day` cell, in ascending
/// row-major order. Rows that would contain only padding are not emitted,
/// so a month holds between 4 and 6 rows.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekRow>,
}

/// Build the calendar grid for `(year, month)`, assigning meals to
/// successive days by rotating through `meals` in order.
///
/// Fails with [`MealPlanError::Config`] when `meals` is empty, and with
/// [`MealPlanError::InvalidDate`] when the month does not exist (month
/// outside 1-12, or a year chrono cannot represent).
pub fn build(year: i32, month: u32, meals: &[MealEntry]) -> MealPlanResult<MonthGrid> {
    if meals.is_empty() {
        return Err(MealPlanError::Config(
            "meal list is empty; at least one [[meals]] entry is required".to_string(),
        ));
    }

    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(MealPlanError::InvalidDate { year, month })?;

    // 0 = Monday .. 6 = Sunday
    let first_weekday = first.weekday().num_days_from_monday() as usize;
    let days_in_month = days_in_month(first)?;

    let row_count = (first_weekday + days_in_month as usize).div_ceil(7);

    let mut weeks = Vec::with_capacity(row_count);
    let mut current_day: u32 = 1;

    for week in 0..row_count {
        let row: WeekRow = std::array::from_fn(|slot| {
            if week == 0 && slot < first_weekday {
                // Padding before the month starts
                DayCell::Empty
            } else if current_day <= days_in_month {
                // Rotation advances once per filled day, never for padding
                let entry = &meals[(current_day as usize - 1) % meals.len()];
                let cell = DayCell::Day {
                    number: current_day,
                    breakfast: entry.breakfast.clone(),
                    dinner: entry.dinner.clone(),
                };
                current_day += 1;
                cell
            } else {
                // Padding after the month ends
                DayCell::Empty
            }
        });
        weeks.push(row);
    }

    Ok(MonthGrid { year, month, weeks })
}

/// Number of days in the month whose first day is `first`.
fn days_in_month(first: NaiveDate) -> MealPlanResult<u32> {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(
        MealPlanError::InvalidDate {
            year: first.year(),
            month: first.month(),
        },
    )?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}
