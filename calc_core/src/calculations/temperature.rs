//! # Temperature Conversion
//!
//! Expresses one temperature on every supported scale at once: Celsius,
//! Fahrenheit, Kelvin and, when it falls inside the oven range, Gas Mark.
//!
//! ## Gas Mark
//!
//! Gas Mark is not a linear scale. It is mapped through the reference table
//! in [`CalcSettings::gas_mark_table`] by piecewise-linear interpolation on
//! the Fahrenheit column. Temperatures outside the table's range have no
//! Gas Mark (`None`) rather than a clamped one. Because the mapping is
//! monotone, Gas Mark → °F → Gas Mark reproduces the input exactly (up to
//! floating rounding); the coarse part of the scale shows up only when a
//! result is snapped to the nearest printed mark (`gas_mark_nearest`).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::temperature::{calculate, TemperatureInput, TemperatureScale};
//!
//! let r = calculate(&TemperatureInput { value: 180.0, scale: TemperatureScale::Celsius }).unwrap();
//! assert_eq!(r.fahrenheit, 356.0);
//! assert_eq!(r.gas_mark_nearest, Some(4.0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_finite_result, CalcError, CalcResult};
use crate::settings::{CalcSettings, GasMarkPoint};
use crate::units::{Celsius, Fahrenheit, Kelvin};

/// Scale of an input temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    GasMark,
}

/// Input for the temperature converter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInput {
    pub value: f64,
    pub scale: TemperatureScale,
}

/// One temperature on every scale.
///
/// ## JSON Example
///
/// ```json
/// {
///   "celsius": 100.0,
///   "fahrenheit": 212.0,
///   "kelvin": 373.15,
///   "gas_mark": null,
///   "gas_mark_nearest": null
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResult {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,

    /// Interpolated Gas Mark, if inside the table range
    pub gas_mark: Option<f64>,

    /// Closest printed Gas Mark from the table
    pub gas_mark_nearest: Option<f64>,
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    Fahrenheit::from(Celsius(celsius)).value()
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    Celsius::from(Fahrenheit(fahrenheit)).value()
}

/// Linear interpolation of `x` across the segment of `table` containing it.
///
/// `key` selects the input column and `value` the output column. Returns
/// `None` when `x` lies outside the table. The two end points match within
/// a relative 1e-9 so that a converted end value (225°F ↔ 107.2°C) still
/// lands on the table.
fn interpolate(
    table: &[GasMarkPoint],
    x: f64,
    key: impl Fn(&GasMarkPoint) -> f64,
    value: impl Fn(&GasMarkPoint) -> f64,
) -> Option<f64> {
    let (first, last) = (table.first()?, table.last()?);
    for end in [first, last] {
        if (x - key(end)).abs() <= 1e-9 * key(end).abs().max(1.0) {
            return Some(value(end));
        }
    }
    table.windows(2).find_map(|pair| {
        let (lo, hi) = (&pair[0], &pair[1]);
        if x > key(lo) && x <= key(hi) {
            let t = (x - key(lo)) / (key(hi) - key(lo));
            Some(value(lo) + t * (value(hi) - value(lo)))
        } else {
            None
        }
    })
}

/// Gas Mark for a Fahrenheit temperature, `None` outside the table.
pub fn fahrenheit_to_gas_mark(fahrenheit: f64, table: &[GasMarkPoint]) -> Option<f64> {
    interpolate(table, fahrenheit, |p| p.fahrenheit, |p| p.gas_mark)
}

/// Fahrenheit temperature for a Gas Mark, `None` outside the table.
pub fn gas_mark_to_fahrenheit(gas_mark: f64, table: &[GasMarkPoint]) -> Option<f64> {
    interpolate(table, gas_mark, |p| p.gas_mark, |p| p.fahrenheit)
}

pub fn celsius_to_gas_mark(celsius: f64, table: &[GasMarkPoint]) -> Option<f64> {
    fahrenheit_to_gas_mark(celsius_to_fahrenheit(celsius), table)
}

pub fn gas_mark_to_celsius(gas_mark: f64, table: &[GasMarkPoint]) -> Option<f64> {
    gas_mark_to_fahrenheit(gas_mark, table).map(fahrenheit_to_celsius)
}

/// Table entry whose Gas Mark is closest to `gas_mark`.
fn nearest_mark(gas_mark: f64, table: &[GasMarkPoint]) -> Option<f64> {
    table
        .iter()
        .map(|p| p.gas_mark)
        .min_by(|a, b| (a - gas_mark).abs().total_cmp(&(b - gas_mark).abs()))
}

/// Convert a temperature using the given settings.
///
/// # Returns
///
/// * `Err(CalcError::InvalidInput)` - non-finite value, below absolute zero,
///   or a Gas Mark outside the reference table
pub fn calculate_with(input: &TemperatureInput, settings: &CalcSettings) -> CalcResult<TemperatureResult> {
    if !input.value.is_finite() {
        return Err(CalcError::invalid_input(
            "value",
            input.value.to_string(),
            "Temperature must be a finite number",
        ));
    }
    let table = settings.gas_mark_table.as_slice();

    // The input's own scale stays exact; the others are derived from it
    let (celsius, fahrenheit) = match input.scale {
        TemperatureScale::Celsius => {
            let c = Celsius(input.value);
            (c, Fahrenheit::from(c))
        }
        TemperatureScale::Fahrenheit => {
            let f = Fahrenheit(input.value);
            (Celsius::from(f), f)
        }
        TemperatureScale::Kelvin => {
            let c = Celsius::from(Kelvin(input.value));
            (c, Fahrenheit::from(c))
        }
        TemperatureScale::GasMark => {
            let f = gas_mark_to_fahrenheit(input.value, table).ok_or_else(|| {
                let (lo, hi) = match (table.first(), table.last()) {
                    (Some(lo), Some(hi)) => (lo.gas_mark, hi.gas_mark),
                    _ => (f64::NAN, f64::NAN),
                };
                CalcError::invalid_input(
                    "value",
                    input.value.to_string(),
                    format!("Gas Mark must be between {} and {}", lo, hi),
                )
            })?;
            let f = Fahrenheit(f);
            (Celsius::from(f), f)
        }
    };

    if !celsius.is_physical() {
        return Err(CalcError::invalid_input(
            "value",
            input.value.to_string(),
            "Temperature is below absolute zero",
        ));
    }

    let kelvin = match input.scale {
        TemperatureScale::Kelvin => input.value,
        _ => Kelvin::from(celsius).value(),
    };
    let celsius = require_finite_result("temperature conversion", celsius.value())?;
    let fahrenheit = require_finite_result("temperature conversion", fahrenheit.value())?;
    let kelvin = require_finite_result("temperature conversion", kelvin)?;

    let gas_mark = match input.scale {
        TemperatureScale::GasMark => Some(input.value),
        _ => fahrenheit_to_gas_mark(fahrenheit, table),
    };

    debug!(value = input.value, scale = ?input.scale, celsius, "temperature");
    Ok(TemperatureResult {
        celsius,
        fahrenheit,
        kelvin,
        gas_mark,
        gas_mark_nearest: gas_mark.and_then(|g| nearest_mark(g, table)),
    })
}

/// Convert a temperature with default settings.
pub fn calculate(input: &TemperatureInput) -> CalcResult<TemperatureResult> {
    calculate_with(input, &CalcSettings::default())
}
