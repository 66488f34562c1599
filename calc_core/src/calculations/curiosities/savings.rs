//! # Savings Projection
//!
//! Monthly-compounded growth of an initial amount plus a fixed monthly
//! deposit made at the end of each month:
//!
//! ```text
//! FV = P·(1 + r)^m + D·((1 + r)^m − 1) / r      r = annual% / 12 / 100
//! FV = P + D·m                                  r = 0
//! ```
//!
//! The habit variant turns a daily expense into the monthly deposit
//! (`daily_cost × days_per_month`) and answers "what if I had saved it".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_finite_result, require_non_negative, require_positive, CalcError, CalcResult};
use crate::settings::CalcSettings;

/// Longest accepted projection.
pub const MAX_YEARS: f64 = 100.0;

/// Input for a savings projection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "initial_amount": 1000.0,
///   "monthly_contribution": 100.0,
///   "annual_rate_percent": 5.0,
///   "years": 10.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsInput {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub final_balance: f64,
    /// Initial amount plus every deposit
    pub total_contributed: f64,
    pub interest_earned: f64,
    pub months: u32,
}

/// Input for the "skip a daily habit" projection.
///
/// ## JSON Example
///
/// ```json
/// { "daily_cost": 3.5, "years": 5.0, "annual_rate_percent": 4.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitSavingsInput {
    pub daily_cost: f64,
    pub years: f64,
    pub annual_rate_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitSavingsResult {
    pub monthly_deposit: f64,
    /// Money kept with no interest at all
    pub without_interest: f64,
    pub projection: SavingsResult,
}

/// Future value after `months` at monthly rate `r`.
pub fn future_value(initial: f64, monthly: f64, r: f64, months: u32) -> f64 {
    if r == 0.0 {
        return initial + monthly * f64::from(months);
    }
    let growth = (1.0 + r).powf(f64::from(months));
    initial * growth + monthly * (growth - 1.0) / r
}

fn months_for(years: f64) -> CalcResult<u32> {
    let years = require_positive("years", years)?;
    if years > MAX_YEARS {
        return Err(CalcError::invalid_input(
            "years",
            years.to_string(),
            format!("Projection is limited to {} years", MAX_YEARS),
        ));
    }
    let months = (years * 12.0).round() as u32;
    if months == 0 {
        return Err(CalcError::invalid_input("years", years.to_string(), "Projection must span at least one month"));
    }
    Ok(months)
}

/// Project a savings plan.
pub fn calculate(input: &SavingsInput) -> CalcResult<SavingsResult> {
    let initial = require_non_negative("initial_amount", input.initial_amount)?;
    let monthly = require_non_negative("monthly_contribution", input.monthly_contribution)?;
    let rate = require_non_negative("annual_rate_percent", input.annual_rate_percent)?;
    let months = months_for(input.years)?;

    let r = rate / 12.0 / 100.0;
    let final_balance = require_finite_result("savings projection", future_value(initial, monthly, r, months))?;
    let total_contributed = initial + monthly * f64::from(months);

    debug!(months, r, final_balance, "savings");
    Ok(SavingsResult {
        final_balance,
        total_contributed,
        interest_earned: final_balance - total_contributed,
        months,
    })
}

/// Project the savings from dropping a daily expense.
pub fn calculate_habit_with(input: &HabitSavingsInput, settings: &CalcSettings) -> CalcResult<HabitSavingsResult> {
    let daily = require_positive("daily_cost", input.daily_cost)?;
    let monthly_deposit = require_finite_result("savings projection", daily * settings.days_per_month)?;
    let projection = calculate(&SavingsInput {
        initial_amount: 0.0,
        monthly_contribution: monthly_deposit,
        annual_rate_percent: input.annual_rate_percent,
        years: input.years,
    })?;

    Ok(HabitSavingsResult {
        monthly_deposit,
        without_interest: projection.total_contributed,
        projection,
    })
}

pub fn calculate_habit(input: &HabitSavingsInput) -> CalcResult<HabitSavingsResult> {
    calculate_habit_with(input, &CalcSettings::default())
}
