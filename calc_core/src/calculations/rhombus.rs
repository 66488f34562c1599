//! # Rhombus Calculation
//!
//! ## Assumptions
//!
//! A rhombus is fixed by its two diagonals. A side length or an area alone
//! is not enough: infinitely many rhombi share either. The `Side` and `Area`
//! modes therefore solve the *square* with that side or area (equal
//! diagonals), and flag it with `assumes_equal_diagonals = true` so the
//! caller can say so instead of presenting the numbers as general.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::rhombus::{calculate, RhombusInput};
//!
//! let r = calculate(&RhombusInput::Diagonals { diagonal1: 6.0, diagonal2: 8.0 }).unwrap();
//! assert_eq!(r.side, 5.0);
//! assert_eq!(r.area, 24.0);
//! assert!(!r.assumes_equal_diagonals);
//! ```

use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::shapes::{rhombus_area, rhombus_perimeter, rhombus_side};
use crate::errors::{require_finite_result, require_positive, CalcResult};

/// Known measurements of a rhombus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum RhombusInput {
    Diagonals { diagonal1: f64, diagonal2: f64 },
    /// Side only; solved as a square
    Side { side: f64 },
    /// Area only; solved as a square
    Area { area: f64 },
}

/// Rhombus measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhombusResult {
    pub diagonal1: f64,
    pub diagonal2: f64,
    pub side: f64,
    pub area: f64,
    pub perimeter: f64,

    /// True when the diagonals were not given and were taken as equal
    pub assumes_equal_diagonals: bool,
}

/// Calculate a rhombus's measurements.
pub fn calculate(input: &RhombusInput) -> CalcResult<RhombusResult> {
    let (d1, d2, assumed) = match *input {
        RhombusInput::Diagonals { diagonal1, diagonal2 } => (
            require_positive("diagonal1", diagonal1)?,
            require_positive("diagonal2", diagonal2)?,
            false,
        ),
        RhombusInput::Side { side } => {
            let d = require_finite_result("rhombus diagonal", require_positive("side", side)? * SQRT_2)?;
            (d, d, true)
        }
        RhombusInput::Area { area } => {
            let d = (require_positive("area", area)?.sqrt()) * SQRT_2;
            (d, d, true)
        }
    };

    let side = match *input {
        // Keep the caller's side exactly rather than the re-derived one
        RhombusInput::Side { side } => side,
        _ => rhombus_side(d1, d2),
    };

    debug!(d1, d2, assumed, "rhombus");
    Ok(RhombusResult {
        diagonal1: d1,
        diagonal2: d2,
        side,
        area: require_finite_result("rhombus area", rhombus_area(d1, d2))?,
        perimeter: require_finite_result("rhombus perimeter", rhombus_perimeter(side))?,
        assumes_equal_diagonals: assumed,
    })
}
