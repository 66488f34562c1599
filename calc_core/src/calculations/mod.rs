//! # Calculations
//!
//! Every calculator follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//! - `calculate_with(input, settings)` - where a result depends on a
//!   configurable constant
//!
//! [`CalculationRequest`] wraps all inputs in one tagged enum so a host can
//! route any request through a single entry point.
//!
//! ## Available Calculations
//!
//! - [`rectangle`], [`triangle`], [`trapezoid`], [`rhombus`] - plane figures
//! - [`fraction`] - exact fraction arithmetic and decimal conversion
//! - [`calendar`] - add or subtract days, weekdays, leap years
//! - [`temperature`] - Celsius, Fahrenheit, Kelvin and Gas Mark
//! - [`color`] - HEX, RGB, CMYK and HSL
//! - [`binomial`] - binomial coefficients
//! - [`derivative`] - numerical derivatives of polynomials
//! - [`curiosities`] - savings, calories, pet age, name compatibility
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{CalculationOutcome, CalculationRequest};
//! use calc_core::settings::CalcSettings;
//!
//! let json = r#"{ "type": "Binomial", "n": 10, "k": 3 }"#;
//! let request: CalculationRequest = serde_json::from_str(json).unwrap();
//! match request.evaluate(&CalcSettings::default()).unwrap() {
//!     CalculationOutcome::Binomial(r) => assert_eq!(r.coefficient, 120),
//!     other => panic!("unexpected outcome {:?}", other),
//! }
//! ```

pub mod binomial;
pub mod calendar;
pub mod color;
pub mod curiosities;
pub mod derivative;
pub mod fraction;
pub mod rectangle;
pub mod rhombus;
pub mod temperature;
pub mod trapezoid;
pub mod triangle;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::CalcSettings;

// Re-export commonly used types
pub use binomial::{BinomialInput, BinomialResult};
pub use calendar::{DateOffsetInput, DateOperation, DateOperationResult, DayOfWeek};
pub use color::{ColorInput, ColorResult};
pub use curiosities::{
    CaloriesInput, CaloriesResult, CompatibilityInput, CompatibilityResult, HabitSavingsInput,
    HabitSavingsResult, PetAgeInput, PetAgeResult, SavingsInput, SavingsResult,
};
pub use derivative::{DerivativeInput, DerivativeResult};
pub use fraction::{DecimalInput, Fraction, FractionInput, FractionOperation, FractionResult};
pub use rectangle::{RectangleInput, RectangleResult};
pub use rhombus::{RhombusInput, RhombusResult};
pub use temperature::{TemperatureInput, TemperatureResult, TemperatureScale};
pub use trapezoid::{TrapezoidInput, TrapezoidResult};
pub use triangle::{TriangleInput, TriangleResult};

/// Any calculator input, tagged by `"type"`.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Rectangle", "mode": "Dimensions", "length": 4.0, "width": 3.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    Rectangle(RectangleInput),
    Triangle(TriangleInput),
    Trapezoid(TrapezoidInput),
    Rhombus(RhombusInput),
    Fraction(FractionInput),
    DecimalToFraction(DecimalInput),
    DateOffset(DateOffsetInput),
    Temperature(TemperatureInput),
    Color(ColorInput),
    Binomial(BinomialInput),
    Derivative(DerivativeInput),
    Savings(SavingsInput),
    HabitSavings(HabitSavingsInput),
    Calories(CaloriesInput),
    PetAge(PetAgeInput),
    Compatibility(CompatibilityInput),
}

/// Result of a [`CalculationRequest`], tagged like the request.
///
/// Serialize only: `BinomialResult` carries a `u128`, which internally
/// tagged enums cannot buffer on the way in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Rectangle(RectangleResult),
    Triangle(TriangleResult),
    Trapezoid(TrapezoidResult),
    Rhombus(RhombusResult),
    Fraction(FractionResult),
    DecimalToFraction(FractionResult),
    DateOffset(DateOperationResult),
    Temperature(TemperatureResult),
    Color(ColorResult),
    Binomial(BinomialResult),
    Derivative(DerivativeResult),
    Savings(SavingsResult),
    HabitSavings(HabitSavingsResult),
    Calories(CaloriesResult),
    PetAge(PetAgeResult),
    Compatibility(CompatibilityResult),
}

impl CalculationRequest {
    /// Run the calculator for this request.
    pub fn evaluate(&self, settings: &CalcSettings) -> CalcResult<CalculationOutcome> {
        use CalculationOutcome as Out;

        Ok(match self {
            CalculationRequest::Rectangle(i) => Out::Rectangle(rectangle::calculate(i)?),
            CalculationRequest::Triangle(i) => Out::Triangle(triangle::calculate(i)?),
            CalculationRequest::Trapezoid(i) => Out::Trapezoid(trapezoid::calculate(i)?),
            CalculationRequest::Rhombus(i) => Out::Rhombus(rhombus::calculate(i)?),
            CalculationRequest::Fraction(i) => Out::Fraction(fraction::calculate(i)?),
            CalculationRequest::DecimalToFraction(i) => {
                Out::DecimalToFraction(fraction::calculate_from_decimal_with(i, settings)?)
            }
            CalculationRequest::DateOffset(i) => Out::DateOffset(calendar::calculate(i)?),
            CalculationRequest::Temperature(i) => Out::Temperature(temperature::calculate_with(i, settings)?),
            CalculationRequest::Color(i) => Out::Color(color::calculate(i)),
            CalculationRequest::Binomial(i) => Out::Binomial(binomial::calculate_with(i, settings)?),
            CalculationRequest::Derivative(i) => Out::Derivative(derivative::calculate_with(i, settings)?),
            CalculationRequest::Savings(i) => Out::Savings(curiosities::savings::calculate(i)?),
            CalculationRequest::HabitSavings(i) => {
                Out::HabitSavings(curiosities::savings::calculate_habit_with(i, settings)?)
            }
            CalculationRequest::Calories(i) => Out::Calories(curiosities::calories::calculate(i)?),
            CalculationRequest::PetAge(i) => Out::PetAge(curiosities::pet_age::calculate_with(i, settings)?),
            CalculationRequest::Compatibility(i) => {
                Out::Compatibility(curiosities::compatibility::calculate(i)?)
            }
        })
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::Rectangle(_) => "Rectangle",
            CalculationRequest::Triangle(_) => "Triangle",
            CalculationRequest::Trapezoid(_) => "Trapezoid",
            CalculationRequest::Rhombus(_) => "Rhombus",
            CalculationRequest::Fraction(_) => "Fraction",
            CalculationRequest::DecimalToFraction(_) => "DecimalToFraction",
            CalculationRequest::DateOffset(_) => "DateOffset",
            CalculationRequest::Temperature(_) => "Temperature",
            CalculationRequest::Color(_) => "Color",
            CalculationRequest::Binomial(_) => "Binomial",
            CalculationRequest::Derivative(_) => "Derivative",
            CalculationRequest::Savings(_) => "Savings",
            CalculationRequest::HabitSavings(_) => "HabitSavings",
            CalculationRequest::Calories(_) => "Calories",
            CalculationRequest::PetAge(_) => "PetAge",
            CalculationRequest::Compatibility(_) => "Compatibility",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: &str) -> CalcResult<CalculationOutcome> {
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        request.evaluate(&CalcSettings::default())
    }

    #[test]
    fn test_nested_mode_tag() {
        let outcome = run(r#"{ "type": "Rectangle", "mode": "FromArea", "area": 24.0, "length": 6.0 }"#).unwrap();
        match outcome {
            CalculationOutcome::Rectangle(r) => assert_eq!(r.width, 4.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_date_request() {
        let outcome =
            run(r#"{ "type": "DateOffset", "date": "2024-01-01", "days": 30, "operation": "Add" }"#).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.starts_with(r#"{"type":"DateOffset""#));
        assert!(json.contains(r#""result_date":"2024-01-31""#));
    }

    #[test]
    fn test_binomial_outcome_serializes_u128() {
        let outcome = run(r#"{ "type": "Binomial", "n": 100, "k": 50 }"#).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("100891344545564193334812497256"));
    }

    #[test]
    fn test_errors_propagate() {
        let err = run(r#"{ "type": "Binomial", "n": 3, "k": 5 }"#).unwrap_err();
        assert!(err.is_validation());
        let err = run(r#"{ "type": "Compatibility", "first_name": "", "second_name": "Ana" }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_color_never_errors() {
        let outcome = run(r##"{ "type": "Color", "format": "Hex", "value": "#GGGGGG" }"##).unwrap();
        match outcome {
            CalculationOutcome::Color(c) => assert!(!c.is_valid),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_settings_reach_calculator() {
        let request = CalculationRequest::Binomial(BinomialInput { n: 20, k: 2 });
        let settings = CalcSettings {
            binomial_max_n: 10,
            ..CalcSettings::default()
        };
        assert!(request.evaluate(&settings).is_err());
        assert!(request.evaluate(&CalcSettings::default()).is_ok());
    }

    #[test]
    fn test_calc_type_matches_tag() {
        let requests = [
            r#"{ "type": "Savings", "initial_amount": 0.0, "monthly_contribution": 10.0, "annual_rate_percent": 1.0, "years": 1.0 }"#,
            r#"{ "type": "PetAge", "species": "Cat", "age_years": 3.0 }"#,
            r#"{ "type": "Fraction", "operation": "Simplify", "left": { "numerator": 2, "denominator": 4 } }"#,
            r#"{ "type": "Temperature", "value": 180.0, "scale": "Celsius" }"#,
        ];
        for json in requests {
            let request: CalculationRequest = serde_json::from_str(json).unwrap();
            let value: serde_json::Value = serde_json::from_str(json).unwrap();
            assert_eq!(request.calc_type(), value["type"]);
            assert!(request.evaluate(&CalcSettings::default()).is_ok(), "{}", json);
        }
    }
}
