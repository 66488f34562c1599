//! # Calendar Date Arithmetic
//!
//! Adds or subtracts a whole number of days from a date in the proleptic
//! Gregorian calendar and reports the weekday at both ends.
//!
//! Weekdays come from the day count since 0001-01-01 (a Monday in the
//! proleptic calendar), the same count the date arithmetic runs on, so the
//! two can never disagree.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::calendar::{add_subtract_days, parse_date, DateOperation, DayOfWeek};
//!
//! let start = parse_date("2024-01-01").unwrap();
//! let result = add_subtract_days(start, 30, DateOperation::Add).unwrap();
//! assert_eq!(result.result_date.to_string(), "2024-01-31");
//! assert_eq!(result.original_day_of_week, DayOfWeek::Monday);
//! assert_eq!(result.result_day_of_week, DayOfWeek::Wednesday);
//! ```

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Wire format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day of the week, Monday first (ISO 8601 order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// 1 = Monday ... 7 = Sunday
    pub fn iso_number(self) -> u32 {
        self as u32 + 1
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Whether the requested offset moves forward or backward in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateOperation {
    Add,
    Subtract,
}

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> CalcResult<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(CalcError::invalid_input("month", month.to_string(), "Month must be 1-12")),
    }
}

/// Weekday from the day count since 0001-01-01.
pub fn day_of_week(date: NaiveDate) -> DayOfWeek {
    // num_days_from_ce() is 1 for 0001-01-01, which was a Monday
    let index = (i64::from(date.num_days_from_ce()) - 1).rem_euclid(7);
    DayOfWeek::ALL[index as usize]
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> CalcResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| CalcError::invalid_input("date", text, format!("Expected YYYY-MM-DD ({})", e)))
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.num_days_from_ce()) - i64::from(from.num_days_from_ce())
}

/// Input for the add/subtract-days calculator.
///
/// ## JSON Example
///
/// ```json
/// { "date": "2024-03-15", "days": 7, "operation": "Subtract" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateOffsetInput {
    pub date: NaiveDate,

    /// Number of days to move; must not be negative
    pub days: i64,

    pub operation: DateOperation,
}

/// Result of a date offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateOperationResult {
    pub original_date: NaiveDate,
    pub result_date: NaiveDate,
    pub days: u64,
    pub operation: DateOperation,
    pub original_day_of_week: DayOfWeek,
    pub result_day_of_week: DayOfWeek,
}

/// Move `date` by `days` in the direction given by `operation`.
///
/// # Returns
///
/// * `Err(CalcError::InvalidInput)` - `days` is negative
/// * `Err(CalcError::Overflow)` - the result is outside the supported range
pub fn add_subtract_days(date: NaiveDate, days: i64, operation: DateOperation) -> CalcResult<DateOperationResult> {
    let Ok(count) = u64::try_from(days) else {
        debug!(days, "negative day offset rejected");
        return Err(CalcError::invalid_input(
            "days",
            days.to_string(),
            "Days cannot be negative; choose Subtract to go back in time",
        ));
    };

    let result_date = match operation {
        DateOperation::Add => date.checked_add_days(Days::new(count)),
        DateOperation::Subtract => date.checked_sub_days(Days::new(count)),
    }
    .ok_or_else(|| CalcError::overflow("date offset"))?;

    debug!(%date, days, ?operation, %result_date, "date offset");
    Ok(DateOperationResult {
        original_date: date,
        result_date,
        days: count,
        operation,
        original_day_of_week: day_of_week(date),
        result_day_of_week: day_of_week(result_date),
    })
}

/// Run the date calculator.
pub fn calculate(input: &DateOffsetInput) -> CalcResult<DateOperationResult> {
    add_subtract_days(input.date, input.days, input.operation)
}
