//! # Trapezoid Calculation
//!
//! Solves a trapezoid from its bases and height, or inversely from its area.
//! The legs are optional: a perimeter is only reported when both are given,
//! since bases and height alone do not fix them. Given legs must fit the
//! solved shape: neither may be shorter than the height, and together their
//! horizontal runs `√(leg² − h²)` must cover the difference between the bases.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::shapes::{trapezoid_area, trapezoid_height, trapezoid_median, trapezoid_other_base};
use crate::errors::{require_finite_result, require_positive, CalcError, CalcResult};

/// Known measurements of a trapezoid.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "FromArea", "area": 15.0, "base1": 4.0, "base2": 6.0, "legs": [3.2, 3.2] }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum TrapezoidInput {
    /// Both bases and the height
    BasesHeight {
        base1: f64,
        base2: f64,
        height: f64,
        #[serde(default)]
        legs: Option<[f64; 2]>,
    },
    /// Area and both bases; solves the height
    FromArea {
        area: f64,
        base1: f64,
        base2: f64,
        #[serde(default)]
        legs: Option<[f64; 2]>,
    },
    /// Area, one base and the height; solves the other base
    FromAreaAndBase {
        area: f64,
        base1: f64,
        height: f64,
        #[serde(default)]
        legs: Option<[f64; 2]>,
    },
}

/// Trapezoid measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidResult {
    pub base1: f64,
    pub base2: f64,
    pub height: f64,
    pub area: f64,
    pub median: f64,
    pub perimeter: Option<f64>,
}

fn validate_legs(legs: Option<[f64; 2]>, base1: f64, base2: f64, height: f64) -> CalcResult<Option<[f64; 2]>> {
    let Some([l1, l2]) = legs else {
        return Ok(None);
    };
    let legs = [require_positive("leg1", l1)?, require_positive("leg2", l2)?];
    let shown = || format!("{}, {}", l1, l2);

    if legs.iter().any(|&leg| leg < height) {
        return Err(CalcError::invalid_input(
            "legs",
            shown(),
            format!("Each leg must be at least as long as the height ({})", height),
        ));
    }
    let run: f64 = legs.iter().map(|&leg| (leg * leg - height * height).max(0.0).sqrt()).sum();
    let offset = (base1 - base2).abs();
    if run < offset * (1.0 - 1e-9) {
        return Err(CalcError::invalid_input(
            "legs",
            shown(),
            format!("Legs are too short to span the difference between the bases ({})", offset),
        ));
    }
    Ok(Some(legs))
}

/// Calculate a trapezoid's measurements.
pub fn calculate(input: &TrapezoidInput) -> CalcResult<TrapezoidResult> {
    let (base1, base2, height, legs) = match *input {
        TrapezoidInput::BasesHeight { base1, base2, height, legs } => (
            require_positive("base1", base1)?,
            require_positive("base2", base2)?,
            require_positive("height", height)?,
            legs,
        ),
        TrapezoidInput::FromArea { area, base1, base2, legs } => {
            let area = require_positive("area", area)?;
            let base1 = require_positive("base1", base1)?;
            let base2 = require_positive("base2", base2)?;
            (base1, base2, trapezoid_height(area, base1, base2), legs)
        }
        TrapezoidInput::FromAreaAndBase { area, base1, height, legs } => {
            let area = require_positive("area", area)?;
            let base1 = require_positive("base1", base1)?;
            let height = require_positive("height", height)?;
            let base2 = trapezoid_other_base(area, base1, height);
            if base2 <= 0.0 {
                return Err(CalcError::invalid_input(
                    "area",
                    area.to_string(),
                    format!("Area is too small for base {} and height {}", base1, height),
                ));
            }
            (base1, base2, height, legs)
        }
    };
    let height = require_finite_result("trapezoid height", height)?;
    let base2 = require_finite_result("trapezoid base", base2)?;
    let legs = validate_legs(legs, base1, base2, height).inspect_err(|e| {
        debug!(code = e.error_code(), "trapezoid legs rejected");
    })?;

    debug!(base1, base2, height, "trapezoid");
    Ok(TrapezoidResult {
        base1,
        base2,
        height,
        area: require_finite_result("trapezoid area", trapezoid_area(base1, base2, height))?,
        median: require_finite_result("trapezoid median", trapezoid_median(base1, base2))?,
        perimeter: legs
            .map(|[l1, l2]| require_finite_result("trapezoid perimeter", base1 + base2 + l1 + l2))
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bases_height() {
        let t = calculate(&TrapezoidInput::BasesHeight {
            base1: 4.0,
            base2: 6.0,
            height: 3.0,
            legs: None,
        })
        .unwrap();
        assert_eq!(t.area, 15.0);
        assert_eq!(t.median, 5.0);
        assert_eq!(t.perimeter, None);
    }

    #[test]
    fn test_from_area_solves_height() {
        let t = calculate(&TrapezoidInput::FromArea {
            area: 15.0,
            base1: 4.0,
            base2: 6.0,
            legs: Some([3.5, 3.5]),
        })
        .unwrap();
        assert!((t.height - 3.0).abs() < 1e-12);
        assert!((t.area - 15.0).abs() < 1e-12);
        assert_eq!(t.perimeter, Some(17.0));
    }

    #[test]
    fn test_from_area_and_base() {
        let t = calculate(&TrapezoidInput::FromAreaAndBase {
            area: 15.0,
            base1: 4.0,
            height: 3.0,
            legs: None,
        })
        .unwrap();
        assert!((t.base2 - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_area_too_small_for_base() {
        // 2A/h = 2 < base1 = 4: no positive second base exists
        let err = calculate(&TrapezoidInput::FromAreaAndBase {
            area: 3.0,
            base1: 4.0,
            height: 3.0,
            legs: None,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_bad_leg() {
        let result = calculate(&TrapezoidInput::BasesHeight {
            base1: 4.0,
            base2: 6.0,
            height: 3.0,
            legs: Some([3.0, 0.0]),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_leg_shorter_than_height_rejected() {
        let err = calculate(&TrapezoidInput::BasesHeight {
            base1: 4.0,
            base2: 6.0,
            height: 3.0,
            legs: Some([0.1, 0.1]),
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "legs"));
    }

    #[test]
    fn test_legs_must_span_base_difference() {
        // Both legs vertical, but the bases differ by 6
        let err = calculate(&TrapezoidInput::BasesHeight {
            base1: 4.0,
            base2: 10.0,
            height: 3.0,
            legs: Some([3.0, 3.0]),
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_right_trapezoid_legs() {
        // One vertical leg, the other runs 2 across and 3 up
        let slanted = 13.0_f64.sqrt();
        let t = calculate(&TrapezoidInput::BasesHeight {
            base1: 4.0,
            base2: 6.0,
            height: 3.0,
            legs: Some([3.0, slanted]),
        })
        .unwrap();
        assert_eq!(t.perimeter, Some(13.0 + slanted));
    }

    #[test]
    fn test_legs_checked_against_solved_height() {
        // Height solves to 3 from the area, so 2.5 is too short
        let result = calculate(&TrapezoidInput::FromArea {
            area: 15.0,
            base1: 4.0,
            base2: 6.0,
            legs: Some([2.5, 3.5]),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_huge_area_is_overflow() {
        let err = calculate(&TrapezoidInput::BasesHeight {
            base1: 1e300,
            base2: 1e300,
            height: 1e300,
            legs: None,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
    }

    #[test]
    fn test_legs_default_in_json() {
        let input: TrapezoidInput =
            serde_json::from_str(r#"{ "mode": "BasesHeight", "base1": 1.0, "base2": 2.0, "height": 2.0 }"#)
                .unwrap();
        assert_eq!(calculate(&input).unwrap().area, 3.0);
    }
}
