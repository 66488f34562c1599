//! # Triangle Calculation
//!
//! Area from base and height, or from three sides via Heron's formula.
//!
//! ## Assumptions
//!
//! - Three-side input must satisfy the strict triangle inequality;
//!   degenerate triangles (zero area) are rejected, never returned as 0 or NaN
//! - For three-side input the reported base is side `a` and the height is
//!   measured onto it
//! - Base-height input does not determine the other sides, so perimeter
//!   and classification are absent in that mode
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::triangle::{calculate_triangle_sides, TriangleKind};
//!
//! let result = calculate_triangle_sides(3.0, 4.0, 5.0).unwrap();
//! assert!((result.area - 6.0).abs() < 1e-12);
//! assert_eq!(result.perimeter, Some(12.0));
//! assert_eq!(result.kind, Some(TriangleKind::Scalene));
//!
//! assert!(calculate_triangle_sides(1.0, 1.0, 5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::shapes::{heron_area, triangle_area, triangle_height_from_area, triangle_inequality_holds};
use crate::errors::{require_finite_result, require_positive, CalcError, CalcResult};

/// Known measurements of a triangle.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "ThreeSides", "a": 5.0, "b": 5.0, "c": 6.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum TriangleInput {
    BaseHeight { base: f64, height: f64 },
    ThreeSides { a: f64, b: f64, c: f64 },
}

/// Classification by side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Scalene,
}

impl TriangleKind {
    fn classify(a: f64, b: f64, c: f64) -> Self {
        let eq = |x: f64, y: f64| (x - y).abs() <= 1e-9 * x.max(y);
        match (eq(a, b), eq(b, c), eq(a, c)) {
            (true, true, _) => TriangleKind::Equilateral,
            (false, false, false) => TriangleKind::Scalene,
            _ => TriangleKind::Isosceles,
        }
    }
}

/// Triangle measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleResult {
    pub base: f64,
    pub height: f64,
    pub area: f64,
    pub perimeter: Option<f64>,
    pub sides: Option<[f64; 3]>,
    pub kind: Option<TriangleKind>,
}

/// Calculate a triangle's measurements.
///
/// # Returns
///
/// * `Ok(TriangleResult)` - Measurements
/// * `Err(CalcError::InvalidInput)` - A length is non-positive, or the three
///   sides violate the triangle inequality
pub fn calculate(input: &TriangleInput) -> CalcResult<TriangleResult> {
    let result = match *input {
        TriangleInput::BaseHeight { base, height } => {
            let base = require_positive("base", base)?;
            let height = require_positive("height", height)?;
            debug!(base, height, "triangle from base and height");
            TriangleResult {
                base,
                height,
                area: require_finite_result("triangle area", triangle_area(base, height))?,
                perimeter: None,
                sides: None,
                kind: None,
            }
        }
        TriangleInput::ThreeSides { a, b, c } => {
            let a = require_positive("a", a)?;
            let b = require_positive("b", b)?;
            let c = require_positive("c", c)?;
            if !triangle_inequality_holds(a, b, c) {
                debug!(a, b, c, "triangle inequality violated");
                return Err(CalcError::invalid_input(
                    "sides",
                    format!("{}, {}, {}", a, b, c),
                    "Each side must be shorter than the sum of the other two",
                ));
            }
            let area = require_finite_result("triangle area", heron_area(a, b, c))?;
            if area <= 0.0 {
                return Err(CalcError::invalid_input(
                    "sides",
                    format!("{}, {}, {}", a, b, c),
                    "Sides describe a degenerate triangle",
                ));
            }
            debug!(a, b, c, area, "triangle from three sides");
            TriangleResult {
                base: a,
                height: require_finite_result("triangle height", triangle_height_from_area(area, a))?,
                area,
                perimeter: Some(require_finite_result("triangle perimeter", a + b + c)?),
                sides: Some([a, b, c]),
                kind: Some(TriangleKind::classify(a, b, c)),
            }
        }
    };
    Ok(result)
}

/// Triangle from base and height.
pub fn calculate_triangle(base: f64, height: f64) -> CalcResult<TriangleResult> {
    calculate(&TriangleInput::BaseHeight { base, height })
}

/// Triangle from three sides.
pub fn calculate_triangle_sides(a: f64, b: f64, c: f64) -> CalcResult<TriangleResult> {
    calculate(&TriangleInput::ThreeSides { a, b, c })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_height() {
        let t = calculate_triangle(10.0, 4.0).unwrap();
        assert_eq!(t.area, 20.0);
        assert_eq!(t.perimeter, None);
        assert_eq!(t.kind, None);
    }

    #[test]
    fn test_three_sides_heron() {
        let t = calculate_triangle_sides(5.0, 5.0, 6.0).unwrap();
        assert!((t.area - 12.0).abs() < 1e-9);
        assert!((t.height - 4.8).abs() < 1e-9);
        assert_eq!(t.perimeter, Some(16.0));
        assert_eq!(t.kind, Some(TriangleKind::Isosceles));
    }

    #[test]
    fn test_three_sides_height_consistent_with_area() {
        let t = calculate_triangle_sides(7.0, 8.0, 9.0).unwrap();
        let back = calculate_triangle(t.base, t.height).unwrap();
        assert!((back.area - t.area).abs() < 1e-9);
    }

    #[test]
    fn test_equilateral() {
        let t = calculate_triangle_sides(2.0, 2.0, 2.0).unwrap();
        assert_eq!(t.kind, Some(TriangleKind::Equilateral));
    }

    #[test]
    fn test_inequality_violation() {
        let err = calculate_triangle_sides(1.0, 1.0, 5.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_degenerate_rejected() {
        assert!(calculate_triangle_sides(1.0, 2.0, 3.0).is_err());
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(calculate_triangle(0.0, 3.0).is_err());
        assert!(calculate_triangle_sides(3.0, -4.0, 5.0).is_err());
    }

    #[test]
    fn test_huge_sides_keep_finite_area() {
        let t = calculate_triangle_sides(1e154, 1e154, 1e154).unwrap();
        let expected = 3.0_f64.sqrt() / 4.0 * 1e308;
        assert!((t.area - expected).abs() / expected < 1e-12, "area = {}", t.area);
        assert!(t.height.is_finite());
    }

    #[test]
    fn test_area_beyond_f64_is_overflow() {
        let err = calculate_triangle(1e200, 1e200).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
        let err = calculate_triangle_sides(1e308, 1e308, 1e308).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
    }

    #[test]
    fn test_serialization() {
        let t = calculate_triangle_sides(3.0, 4.0, 5.0).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"kind\":\"Scalene\""));
    }
}
