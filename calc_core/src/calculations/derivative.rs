//! # Numerical Derivative
//!
//! Finite-difference derivatives of a polynomial at a point. There is no
//! symbolic step: the polynomial is only ever evaluated, so the same
//! routine would work for any function `f(x)`.
//!
//! - First derivative, central difference: `(p(x+h) − p(x−h)) / 2h`,
//!   error O(h²)
//! - Second derivative: `(p(x+h) − 2p(x) + p(x−h)) / h²`
//!
//! The first derivative uses step `h`. The second uses spacing `max(√h, h)`:
//! at the default `h = 1e-5`, dividing by `h²` leaves mostly rounding noise.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::settings::CalcSettings;

/// Polynomial `c0 + c1·x + c2·x² + ...` and the evaluation point.
///
/// ## JSON Example
///
/// ```json
/// { "coefficients": [1.0, 0.0, 3.0], "x": 2.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivativeInput {
    /// Coefficients in ascending powers of x
    pub coefficients: Vec<f64>,

    pub x: f64,

    /// Finite-difference step; the configured default when absent
    #[serde(default)]
    pub step: Option<f64>,
}

/// Function value and numerical derivatives at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivativeResult {
    pub x: f64,
    pub value: f64,
    pub derivative: f64,
    pub second_derivative: f64,
    pub step: f64,
}

/// Evaluate a polynomial by Horner's rule.
pub fn evaluate_polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Central-difference first derivative of `f` at `x`.
pub fn central_difference(f: impl Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Central-difference second derivative of `f` at `x`.
pub fn second_difference(f: impl Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x + h) - 2.0 * f(x) + f(x - h)) / (h * h)
}

/// Differentiate using the given settings.
pub fn calculate_with(input: &DerivativeInput, settings: &CalcSettings) -> CalcResult<DerivativeResult> {
    if input.coefficients.is_empty() {
        return Err(CalcError::missing_field("coefficients"));
    }
    if let Some((i, c)) = input.coefficients.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        return Err(CalcError::invalid_input(
            format!("coefficients[{}]", i),
            c.to_string(),
            "Coefficient must be a finite number",
        ));
    }
    if !input.x.is_finite() {
        return Err(CalcError::invalid_input("x", input.x.to_string(), "x must be a finite number"));
    }
    let h = input.step.unwrap_or(settings.derivative_step);
    if !(h.is_finite() && h > 0.0) {
        return Err(CalcError::invalid_input("step", h.to_string(), "Step must be positive"));
    }

    let p = |x: f64| evaluate_polynomial(&input.coefficients, x);
    let value = p(input.x);
    let derivative = central_difference(p, input.x, h);
    let second_derivative = second_difference(p, input.x, h.sqrt().max(h));

    if !(value.is_finite() && derivative.is_finite() && second_derivative.is_finite()) {
        return Err(CalcError::calculation_failed(
            "derivative",
            "Result is not finite; reduce the coefficients or x",
        ));
    }

    debug!(x = input.x, degree = input.coefficients.len() - 1, h, "derivative");
    Ok(DerivativeResult {
        x: input.x,
        value,
        derivative,
        second_derivative,
        step: h,
    })
}

/// Differentiate with default settings.
pub fn calculate(input: &DerivativeInput) -> CalcResult<DerivativeResult> {
    calculate_with(input, &CalcSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(coefficients: &[f64], x: f64) -> DerivativeInput {
        DerivativeInput {
            coefficients: coefficients.to_vec(),
            x,
            step: None,
        }
    }

    #[test]
    fn test_horner() {
        // 1 + 2x + 3x² at x = 2 → 1 + 4 + 12
        assert_eq!(evaluate_polynomial(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_eq!(evaluate_polynomial(&[5.0], 100.0), 5.0);
    }

    #[test]
    fn test_quadratic() {
        // p = 1 + 3x², p' = 6x, p'' = 6
        let r = calculate(&input(&[1.0, 0.0, 3.0], 2.0)).unwrap();
        assert_eq!(r.value, 13.0);
        assert!((r.derivative - 12.0).abs() < 1e-6, "p'(2) = {}", r.derivative);
        assert!((r.second_derivative - 6.0).abs() < 1e-4, "p''(2) = {}", r.second_derivative);
    }

    #[test]
    fn test_cubic() {
        // p = x³, p'(1.5) = 6.75, p''(1.5) = 9
        let r = calculate(&input(&[0.0, 0.0, 0.0, 1.0], 1.5)).unwrap();
        assert!((r.derivative - 6.75).abs() < 1e-6);
        assert!((r.second_derivative - 9.0).abs() < 1e-3);
    }

    #[test]
    fn test_constant() {
        let r = calculate(&input(&[4.0], -3.0)).unwrap();
        assert_eq!(r.derivative, 0.0);
        assert_eq!(r.second_derivative, 0.0);
    }

    #[test]
    fn test_custom_step() {
        let mut i = input(&[0.0, 1.0], 0.0);
        i.step = Some(0.1);
        let r = calculate(&i).unwrap();
        assert_eq!(r.step, 0.1);
        assert!((r.derivative - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(calculate(&input(&[], 1.0)).unwrap_err().error_code(), "MISSING_FIELD");
        assert!(calculate(&input(&[1.0, f64::NAN], 1.0)).is_err());
        assert!(calculate(&input(&[1.0], f64::INFINITY)).is_err());
        let mut i = input(&[1.0], 0.0);
        i.step = Some(0.0);
        assert!(calculate(&i).is_err());
    }

    #[test]
    fn test_overflowing_polynomial() {
        let err = calculate(&input(&[0.0, 0.0, 1e300], 1e10)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }
}
