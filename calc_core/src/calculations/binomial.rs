//! # Binomial Coefficients
//!
//! `C(n, k)` = number of ways to choose `k` items from `n`.
//!
//! ## Methods
//!
//! - [`binomial`] - multiplicative formula `∏ (n − i) / (i + 1)` over
//!   `i < min(k, n − k)`, in exact `u128` integer arithmetic. After step `i`
//!   the accumulator equals `C(n, i + 1)`, so every division is exact and
//!   nothing is ever rounded. This is what the calculator uses.
//! - [`binomial_via_factorials`] - textbook `n! / (k! (n − k)!)`. Exact
//!   while `n!` fits in `u128` (n ≤ 34); kept for cross-checking.
//!
//! `C(100, 50) ≈ 1.01e29` is the largest value the default limit admits,
//! well inside `u128`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::binomial::binomial;
//!
//! assert_eq!(binomial(5, 2).unwrap(), 10);
//! assert_eq!(binomial(10, 3).unwrap(), 120);
//! assert_eq!(binomial(10, 7).unwrap(), binomial(10, 3).unwrap());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::settings::CalcSettings;

/// Largest `n` whose factorial fits in `u128`.
pub const MAX_FACTORIAL_N: u64 = 34;

/// Largest `n` whose whole Pascal row fits in `u128`; `C(132, 66) > 2^128`.
pub const MAX_PASCAL_ROW_N: u64 = 131;

/// Exact `C(n, k)` by the multiplicative formula.
///
/// Returns `Ok(0)` for `k > n`, matching the combinatorial definition;
/// the calculator entry point rejects that case as invalid input instead.
pub fn binomial(n: u64, k: u64) -> CalcResult<u128> {
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        let factor = u128::from(n - i);
        acc = acc
            .checked_mul(factor)
            .ok_or_else(|| CalcError::overflow("binomial"))?
            / u128::from(i + 1);
    }
    Ok(acc)
}

/// `n!`, or `Overflow` past [`MAX_FACTORIAL_N`].
pub fn factorial(n: u64) -> CalcResult<u128> {
    (1..=n).try_fold(1u128, |acc, i| {
        acc.checked_mul(u128::from(i))
            .ok_or_else(|| CalcError::overflow("factorial"))
    })
}

/// `C(n, k)` as `n! / (k! (n − k)!)`.
pub fn binomial_via_factorials(n: u64, k: u64) -> CalcResult<u128> {
    if k > n {
        return Ok(0);
    }
    Ok(factorial(n)? / (factorial(k)? * factorial(n - k)?))
}

/// Ordered selections `P(n, k) = n! / (n − k)!`.
pub fn permutations(n: u64, k: u64) -> CalcResult<u128> {
    if k > n {
        return Ok(0);
    }
    (n - k + 1..=n).try_fold(1u128, |acc, i| {
        acc.checked_mul(u128::from(i))
            .ok_or_else(|| CalcError::overflow("permutations"))
    })
}

/// Row `n` of Pascal's triangle, `[C(n, 0), ..., C(n, n)]`.
///
/// Each entry is derived from its left neighbour, so the row costs O(n).
/// Rows past [`MAX_PASCAL_ROW_N`] are `Overflow` before anything is allocated.
pub fn pascal_row(n: u64) -> CalcResult<Vec<u128>> {
    if n > MAX_PASCAL_ROW_N {
        return Err(CalcError::overflow("pascal_row"));
    }
    let mut row = Vec::with_capacity(n as usize + 1);
    let mut value: u128 = 1;
    row.push(value);
    for k in 0..n {
        // C(n, k+1) = C(n, k) · (n − k) / (k + 1), divided first so the
        // product never exceeds the entry itself
        let divisor = u128::from(k + 1);
        let g = gcd_u128(value, divisor);
        value = (value / g)
            .checked_mul(u128::from(n - k) / (divisor / g))
            .ok_or_else(|| CalcError::overflow("pascal_row"))?;
        row.push(value);
    }
    Ok(row)
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Input for the binomial calculator.
///
/// Signed so that negative values reach validation instead of failing to
/// parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinomialInput {
    pub n: i64,
    pub k: i64,
}

/// Result of the binomial calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinomialResult {
    pub n: u64,
    pub k: u64,
    pub coefficient: u128,
}

impl BinomialInput {
    /// Validate `0 ≤ k ≤ n ≤ max_n`.
    pub fn validate(&self, max_n: u64) -> CalcResult<(u64, u64)> {
        let n = u64::try_from(self.n)
            .map_err(|_| CalcError::invalid_input("n", self.n.to_string(), "n cannot be negative"))?;
        let k = u64::try_from(self.k)
            .map_err(|_| CalcError::invalid_input("k", self.k.to_string(), "k cannot be negative"))?;
        if n > max_n {
            return Err(CalcError::invalid_input(
                "n",
                n.to_string(),
                format!("n must be at most {}", max_n),
            ));
        }
        if k > n {
            return Err(CalcError::invalid_input(
                "k",
                k.to_string(),
                format!("k must not exceed n ({})", n),
            ));
        }
        Ok((n, k))
    }
}

/// Compute `C(n, k)` with the configured limit on `n`.
pub fn calculate_with(input: &BinomialInput, settings: &CalcSettings) -> CalcResult<BinomialResult> {
    let (n, k) = input.validate(settings.binomial_max_n).inspect_err(|e| {
        debug!(n = input.n, k = input.k, code = e.error_code(), "binomial input rejected");
    })?;
    let coefficient = binomial(n, k)?;
    debug!(n, k, %coefficient, "binomial");
    Ok(BinomialResult { n, k, coefficient })
}

/// Compute `C(n, k)` with default settings.
pub fn calculate(input: &BinomialInput) -> CalcResult<BinomialResult> {
    calculate_with(input, &CalcSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(binomial(5, 2).unwrap(), 10);
        assert_eq!(binomial(10, 3).unwrap(), 120);
        assert_eq!(binomial(52, 5).unwrap(), 2_598_960);
        assert_eq!(binomial(0, 0).unwrap(), 1);
    }

    #[test]
    fn test_edges() {
        for n in 0..=100 {
            assert_eq!(binomial(n, 0).unwrap(), 1);
            assert_eq!(binomial(n, n).unwrap(), 1);
        }
        assert_eq!(binomial(3, 4).unwrap(), 0);
    }

    #[test]
    fn test_largest_default_value() {
        assert_eq!(
            binomial(100, 50).unwrap(),
            100_891_344_545_564_193_334_812_497_256
        );
    }

    #[test]
    fn test_pascal_identity() {
        for n in 1..=60 {
            for k in 1..n {
                let lhs = binomial(n, k).unwrap();
                let rhs = binomial(n - 1, k - 1).unwrap() + binomial(n - 1, k).unwrap();
                assert_eq!(lhs, rhs, "C({}, {})", n, k);
            }
        }
    }

    #[test]
    fn test_factorial_method_agrees() {
        for n in 0..=MAX_FACTORIAL_N {
            for k in 0..=n {
                assert_eq!(binomial(n, k).unwrap(), binomial_via_factorials(n, k).unwrap());
            }
        }
    }

    #[test]
    fn test_factorial_overflow() {
        assert!(factorial(MAX_FACTORIAL_N).is_ok());
        assert_eq!(factorial(35).unwrap_err().error_code(), "OVERFLOW");
        assert!(binomial_via_factorials(40, 2).is_err());
        // The multiplicative form has no such limit
        assert_eq!(binomial(40, 2).unwrap(), 780);
    }

    #[test]
    fn test_permutations() {
        assert_eq!(permutations(5, 2).unwrap(), 20);
        assert_eq!(permutations(5, 0).unwrap(), 1);
        assert_eq!(permutations(5, 5).unwrap(), 120);
        assert_eq!(permutations(2, 3).unwrap(), 0);
    }

    #[test]
    fn test_pascal_row() {
        assert_eq!(pascal_row(0).unwrap(), vec![1]);
        assert_eq!(pascal_row(4).unwrap(), vec![1, 4, 6, 4, 1]);
        let row = pascal_row(30).unwrap();
        assert_eq!(row[15], binomial(30, 15).unwrap());
    }

    #[test]
    fn test_pascal_row_limit() {
        let row = pascal_row(MAX_PASCAL_ROW_N).unwrap();
        assert_eq!(row.len(), 132);
        assert_eq!(row[65], 188_694_833_082_770_476_622_296_176_145_946_360_850);
        assert_eq!(row[0], 1);
        assert_eq!(row[131], 1);

        for n in [MAX_PASCAL_ROW_N + 1, 1000, u64::MAX] {
            assert_eq!(pascal_row(n).unwrap_err(), CalcError::overflow("pascal_row"));
        }
    }

    #[test]
    fn test_calculate_validation() {
        assert!(calculate(&BinomialInput { n: 5, k: 2 }).is_ok());
        assert!(calculate(&BinomialInput { n: -1, k: 0 }).is_err());
        assert!(calculate(&BinomialInput { n: 5, k: -1 }).is_err());
        assert!(calculate(&BinomialInput { n: 5, k: 6 }).is_err());
        assert!(calculate(&BinomialInput { n: 101, k: 1 }).is_err());
        assert_eq!(calculate(&BinomialInput { n: 100, k: 3 }).unwrap().coefficient, 161_700);
    }

    #[test]
    fn test_custom_limit() {
        let settings = CalcSettings {
            binomial_max_n: 10,
            ..CalcSettings::default()
        };
        assert!(calculate_with(&BinomialInput { n: 11, k: 1 }, &settings).is_err());
        assert!(calculate_with(&BinomialInput { n: 10, k: 1 }, &settings).is_ok());
    }

    #[test]
    fn test_result_json() {
        let result = calculate(&BinomialInput { n: 10, k: 3 }).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"n":10,"k":3,"coefficient":120}"#);
    }
}
