//! # Fraction Arithmetic
//!
//! Exact rational arithmetic on `i64` numerator/denominator pairs.
//!
//! ## Invariants
//!
//! A [`Fraction`] is always in lowest terms with a positive denominator:
//! `gcd(|numerator|, denominator) == 1` and the sign lives on the numerator.
//! The fields are private and every constructor (including deserialization)
//! goes through [`Fraction::new`], so no unreduced value can exist.
//!
//! Intermediate products are computed in `i128`, which cannot overflow for
//! `i64` operands; only a reduced result that does not fit back into `i64`
//! is reported as [`CalcError::Overflow`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::fraction::Fraction;
//!
//! let a = Fraction::new(1, 4).unwrap();
//! let b = Fraction::new(1, 3).unwrap();
//! let sum = a.checked_add(&b).unwrap();
//! assert_eq!((sum.numerator(), sum.denominator()), (7, 12));
//!
//! let half = Fraction::new(-4, -8).unwrap();
//! assert_eq!(half.to_string(), "1/2");
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::settings::CalcSettings;

/// Greatest common divisor (Euclidean algorithm).
///
/// `gcd(0, 0)` is 0.
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple; `None` if either argument is zero or the
/// result does not fit in `u64`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return None;
    }
    let g = gcd(u128::from(a), u128::from(b));
    u64::try_from(u128::from(a) / g * u128::from(b)).ok()
}

/// Raw numerator/denominator pair as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionParts {
    pub numerator: i64,
    pub denominator: i64,
}

/// A reduced fraction with positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionParts", into = "FractionParts")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<FractionParts> for Fraction {
    type Error = CalcError;

    fn try_from(parts: FractionParts) -> CalcResult<Self> {
        Fraction::new(parts.numerator, parts.denominator)
    }
}

impl From<Fraction> for FractionParts {
    fn from(f: Fraction) -> Self {
        FractionParts {
            numerator: f.numerator,
            denominator: f.denominator,
        }
    }
}

/// Reduce `n/d` by their GCD and move the sign to the numerator.
fn reduce(n: i128, d: i128, operation: &str) -> CalcResult<Fraction> {
    if d == 0 {
        return Err(CalcError::division_by_zero(operation));
    }
    let g = gcd(n.unsigned_abs(), d.unsigned_abs());
    // g >= 1 because d != 0, and g <= |d| <= 2^126, so the cast is lossless
    let g = g as i128;
    let (mut n, mut d) = (n / g, d / g);
    if d < 0 {
        n = -n;
        d = -d;
    }
    match (i64::try_from(n), i64::try_from(d)) {
        (Ok(numerator), Ok(denominator)) => Ok(Fraction { numerator, denominator }),
        _ => Err(CalcError::overflow(operation)),
    }
}

impl Fraction {
    /// Create a fraction in lowest terms.
    ///
    /// # Returns
    ///
    /// * `Err(CalcError::InvalidInput)` - denominator is zero
    /// * `Err(CalcError::Overflow)` - the reduced value needs `-i64::MIN`
    pub fn new(numerator: i64, denominator: i64) -> CalcResult<Self> {
        if denominator == 0 {
            return Err(CalcError::invalid_input(
                "denominator",
                "0",
                "Denominator cannot be zero",
            ));
        }
        reduce(i128::from(numerator), i128::from(denominator), "simplify")
    }

    /// A whole number as a fraction over 1.
    pub fn from_integer(value: i64) -> Self {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// `(n1·d2 + n2·d1) / (d1·d2)`, reduced.
    pub fn checked_add(&self, other: &Fraction) -> CalcResult<Fraction> {
        let (n1, d1, n2, d2) = self.widen(other);
        reduce(n1 * d2 + n2 * d1, d1 * d2, "add")
    }

    /// `(n1·d2 − n2·d1) / (d1·d2)`, reduced.
    pub fn checked_sub(&self, other: &Fraction) -> CalcResult<Fraction> {
        let (n1, d1, n2, d2) = self.widen(other);
        reduce(n1 * d2 - n2 * d1, d1 * d2, "subtract")
    }

    /// `(n1·n2) / (d1·d2)`, reduced.
    pub fn checked_mul(&self, other: &Fraction) -> CalcResult<Fraction> {
        let (n1, d1, n2, d2) = self.widen(other);
        reduce(n1 * n2, d1 * d2, "multiply")
    }

    /// Multiply by the reciprocal of `other`.
    ///
    /// Dividing by a zero fraction is [`CalcError::DivisionByZero`].
    pub fn checked_div(&self, other: &Fraction) -> CalcResult<Fraction> {
        if other.is_zero() {
            return Err(CalcError::division_by_zero("divide"));
        }
        let (n1, d1, n2, d2) = self.widen(other);
        reduce(n1 * d2, d1 * n2, "divide")
    }

    /// Floating-point value `numerator / denominator`.
    pub fn to_decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Split an improper fraction into whole and proper parts.
    pub fn to_mixed(&self) -> MixedNumber {
        let n = self.numerator.unsigned_abs();
        let d = self.denominator.unsigned_abs();
        MixedNumber {
            negative: self.numerator < 0,
            whole: n / d,
            numerator: n % d,
            denominator: d,
        }
    }

    /// Convert a finite decimal to a fraction.
    ///
    /// Tries denominators `10^0 ..= 10^max_places` and takes the first that
    /// makes `value · 10^k` an integer (within floating tolerance), then
    /// reduces. Values with more significant decimals than `max_places`
    /// are rounded at that scale.
    ///
    /// The tolerance never drops below `1e-12` in absolute terms, so any
    /// input with `|value| < 1e-12` is already an integer at `10^0` and
    /// becomes `0/1`, whatever `max_places` is. Likewise, anything smaller
    /// than half of `10^-max_places` rounds to zero.
    pub fn from_decimal(value: f64, max_places: u32) -> CalcResult<Fraction> {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                "decimal",
                value.to_string(),
                "Value must be a finite number",
            ));
        }
        if max_places > 15 {
            return Err(CalcError::invalid_input(
                "max_decimal_places",
                max_places.to_string(),
                "At most 15 decimal places are supported",
            ));
        }

        let mut places = 0;
        while places < max_places {
            let scaled = value * 10_f64.powi(places as i32);
            if (scaled - scaled.round()).abs() <= scaled.abs().max(1.0) * 1e-12 {
                break;
            }
            places += 1;
        }

        let rounded = (value * 10_f64.powi(places as i32)).round();
        if rounded.abs() >= 9.0e18 {
            return Err(CalcError::overflow("from_decimal"));
        }
        // |rounded| < 9e18 and 10^places <= 10^15 both fit in i64
        reduce(i128::from(rounded as i64), i128::from(10_i64.pow(places)), "from_decimal")
    }

    /// Convert a decimal literal such as `"-2.375"` exactly.
    ///
    /// The denominator is `10^d` where `d` is the number of digits after
    /// the point, so no floating-point rounding is involved.
    pub fn from_decimal_str(text: &str) -> CalcResult<Fraction> {
        let trimmed = text.trim();
        let invalid = |reason: &str| CalcError::invalid_input("decimal", trimmed, reason);

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid("Expected a decimal number"));
        }
        if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("Expected a decimal number"));
        }
        if int_part.len() + frac_part.len() > 36 {
            return Err(invalid("Too many digits"));
        }

        let mut numerator: i128 = 0;
        for c in int_part.chars().chain(frac_part.chars()) {
            numerator = numerator * 10 + i128::from(c as u8 - b'0');
        }
        let denominator = 10_i128.pow(frac_part.len() as u32);
        if negative {
            numerator = -numerator;
        }
        reduce(numerator, denominator, "from_decimal")
    }

    fn widen(&self, other: &Fraction) -> (i128, i128, i128, i128) {
        (
            i128::from(self.numerator),
            i128::from(self.denominator),
            i128::from(other.numerator),
            i128::from(other.denominator),
        )
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (n1, d1, n2, d2) = self.widen(other);
        (n1 * d2).cmp(&(n2 * d1))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Mixed-number view of a fraction, e.g. `-3 1/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedNumber {
    pub negative: bool,
    pub whole: u64,
    pub numerator: u64,
    pub denominator: u64,
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match (self.whole, self.numerator) {
            (0, 0) => write!(f, "0"),
            (w, 0) => write!(f, "{}{}", sign, w),
            (0, n) => write!(f, "{}{}/{}", sign, n, self.denominator),
            (w, n) => write!(f, "{}{} {}/{}", sign, w, n, self.denominator),
        }
    }
}

// =============================================================================
// Calculator surface
// =============================================================================

/// Operation requested from the fraction calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractionOperation {
    Simplify,
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Input for the fraction calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "operation": "Add",
///   "left": { "numerator": 1, "denominator": 4 },
///   "right": { "numerator": 1, "denominator": 3 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionInput {
    pub operation: FractionOperation,
    pub left: FractionParts,
    /// Second operand; ignored by `Simplify`
    #[serde(default)]
    pub right: Option<FractionParts>,
}

/// Result of a fraction calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionResult {
    pub numerator: i64,
    pub denominator: i64,
    pub decimal: Option<f64>,
    /// Present when the fraction is improper (|numerator| > denominator)
    pub mixed: Option<MixedNumber>,
}

impl From<Fraction> for FractionResult {
    fn from(f: Fraction) -> Self {
        let improper = f.numerator.unsigned_abs() > f.denominator.unsigned_abs();
        FractionResult {
            numerator: f.numerator,
            denominator: f.denominator,
            decimal: Some(f.to_decimal()),
            mixed: improper.then(|| f.to_mixed()),
        }
    }
}

/// Run a fraction operation.
pub fn calculate(input: &FractionInput) -> CalcResult<FractionResult> {
    let left = Fraction::try_from(input.left)?;
    let right = || -> CalcResult<Fraction> {
        let parts = input.right.ok_or_else(|| CalcError::missing_field("right"))?;
        Fraction::try_from(parts)
    };

    let result = match input.operation {
        FractionOperation::Simplify => Ok(left),
        FractionOperation::Add => left.checked_add(&right()?),
        FractionOperation::Subtract => left.checked_sub(&right()?),
        FractionOperation::Multiply => left.checked_mul(&right()?),
        FractionOperation::Divide => left.checked_div(&right()?),
    }
    .inspect_err(|e| debug!(code = e.error_code(), "fraction operation failed"))?;

    debug!(operation = ?input.operation, %result, "fraction");
    Ok(result.into())
}

/// Input for decimal to fraction conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimalInput {
    pub decimal: f64,
}

/// Convert a decimal to a reduced fraction using the configured scale cap.
pub fn calculate_from_decimal_with(input: &DecimalInput, settings: &CalcSettings) -> CalcResult<FractionResult> {
    let fraction = Fraction::from_decimal(input.decimal, settings.max_decimal_places)?;
    debug!(decimal = input.decimal, %fraction, "decimal to fraction");
    Ok(fraction.into())
}

/// Convert a decimal to a reduced fraction with default settings.
pub fn calculate_from_decimal(input: &DecimalInput) -> CalcResult<FractionResult> {
    calculate_from_decimal_with(input, &CalcSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 6), None);
    }

    #[test]
    fn test_simplify_and_sign() {
        let f = frac(6, -8);
        assert_eq!((f.numerator(), f.denominator()), (-3, 4));
        let f = frac(-6, -8);
        assert_eq!((f.numerator(), f.denominator()), (3, 4));
        let zero = frac(0, -5);
        assert_eq!((zero.numerator(), zero.denominator()), (0, 1));
    }

    #[test]
    fn test_zero_denominator() {
        let err = Fraction::new(1, 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_add_quarter_and_third() {
        let sum = frac(1, 4).checked_add(&frac(1, 3)).unwrap();
        assert_eq!(sum, frac(7, 12));
    }

    #[test]
    fn test_subtract_multiply_divide() {
        assert_eq!(frac(1, 2).checked_sub(&frac(3, 4)).unwrap(), frac(-1, 4));
        assert_eq!(frac(2, 3).checked_mul(&frac(9, 4)).unwrap(), frac(3, 2));
        assert_eq!(frac(1, 2).checked_div(&frac(1, 4)).unwrap(), frac(2, 1));
        assert_eq!(frac(1, 2).checked_div(&frac(-1, 4)).unwrap(), frac(-2, 1));
    }

    #[test]
    fn test_divide_by_zero_fraction() {
        let err = frac(1, 2).checked_div(&frac(0, 3)).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("divide"));
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Fraction::from_integer(i64::MAX);
        let err = big.checked_mul(&Fraction::from_integer(2)).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
        assert!(Fraction::new(i64::MIN, -1).is_err());
    }

    #[test]
    fn test_large_operands_do_not_overflow_intermediates() {
        let a = frac(i64::MAX, 2);
        let b = frac(i64::MAX, 3);
        // (MAX·3 − MAX·2) / 6 = MAX / 6
        assert_eq!(a.checked_sub(&b).unwrap(), frac(i64::MAX, 6));
    }

    #[test]
    fn test_ordering() {
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < frac(1, 3));
        assert_eq!(frac(2, 4).cmp(&frac(1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(frac(7, 2).to_mixed().to_string(), "3 1/2");
        assert_eq!(frac(-7, 2).to_mixed().to_string(), "-3 1/2");
        assert_eq!(frac(1, 2).to_mixed().to_string(), "1/2");
        assert_eq!(frac(4, 2).to_mixed().to_string(), "2");
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Fraction::from_decimal(0.75, 10).unwrap(), frac(3, 4));
        assert_eq!(Fraction::from_decimal(-0.125, 10).unwrap(), frac(-1, 8));
        assert_eq!(Fraction::from_decimal(0.3, 10).unwrap(), frac(3, 10));
        assert_eq!(Fraction::from_decimal(2.0, 10).unwrap(), frac(2, 1));
        assert_eq!(Fraction::from_decimal(0.123456, 10).unwrap(), frac(1929, 15625));
    }

    #[test]
    fn test_from_decimal_rounds_at_cap() {
        let f = Fraction::from_decimal(1.0 / 3.0, 3).unwrap();
        assert_eq!(f, frac(333, 1000));
    }

    #[test]
    fn test_from_decimal_tiny_values_become_zero() {
        assert_eq!(Fraction::from_decimal(1e-13, 15).unwrap(), frac(0, 1));
        assert!(Fraction::from_decimal(-1e-13, 10).unwrap().is_zero());
        assert!(Fraction::from_decimal(0.0004, 3).unwrap().is_zero());
        // Above the snap tolerance a finer scale is still found
        assert_eq!(Fraction::from_decimal(1e-10, 10).unwrap(), frac(1, 10_000_000_000));
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert!(Fraction::from_decimal(f64::NAN, 10).is_err());
        assert!(Fraction::from_decimal(f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_from_decimal_str() {
        assert_eq!(Fraction::from_decimal_str("0.125").unwrap(), frac(1, 8));
        assert_eq!(Fraction::from_decimal_str("-2.375").unwrap(), frac(-19, 8));
        assert_eq!(Fraction::from_decimal_str(".5").unwrap(), frac(1, 2));
        assert_eq!(Fraction::from_decimal_str("3").unwrap(), frac(3, 1));
        assert!(Fraction::from_decimal_str("1.2.3").is_err());
        assert!(Fraction::from_decimal_str("abc").is_err());
        assert!(Fraction::from_decimal_str("").is_err());
        assert!(Fraction::from_decimal_str("-").is_err());
    }

    #[test]
    fn test_calculate_add() {
        let input = FractionInput {
            operation: FractionOperation::Add,
            left: FractionParts { numerator: 1, denominator: 4 },
            right: Some(FractionParts { numerator: 1, denominator: 3 }),
        };
        let result = calculate(&input).unwrap();
        assert_eq!((result.numerator, result.denominator), (7, 12));
        assert!(result.mixed.is_none());
        assert!((result.decimal.unwrap() - 7.0 / 12.0).abs() < 1e-15);
    }

    #[test]
    fn test_calculate_missing_right() {
        let input = FractionInput {
            operation: FractionOperation::Multiply,
            left: FractionParts { numerator: 1, denominator: 4 },
            right: None,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_calculate_improper_has_mixed() {
        let input = FractionInput {
            operation: FractionOperation::Simplify,
            left: FractionParts { numerator: 10, denominator: 4 },
            right: None,
        };
        let result = calculate(&input).unwrap();
        assert_eq!((result.numerator, result.denominator), (5, 2));
        assert_eq!(result.mixed.unwrap().whole, 2);
    }

    #[test]
    fn test_deserialize_reduces() {
        let f: Fraction = serde_json::from_str(r#"{ "numerator": 4, "denominator": -6 }"#).unwrap();
        assert_eq!((f.numerator(), f.denominator()), (-2, 3));
        assert!(serde_json::from_str::<Fraction>(r#"{ "numerator": 1, "denominator": 0 }"#).is_err());
    }

    #[test]
    fn test_calculate_from_decimal() {
        let result = calculate_from_decimal(&DecimalInput { decimal: 1.5 }).unwrap();
        assert_eq!((result.numerator, result.denominator), (3, 2));
    }
}
