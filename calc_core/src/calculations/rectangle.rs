//! # Rectangle Calculation
//!
//! Solves a rectangle from any of three input combinations and reports
//! every measurement. The missing side is always solved first; area,
//! perimeter and diagonal are then recomputed from the two sides.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::rectangle::{calculate, RectangleInput};
//!
//! let input = RectangleInput::FromPerimeter { perimeter: 14.0, length: 3.0 };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.width, 4.0);
//! assert_eq!(result.area, 12.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::shapes::{
    rectangle_area, rectangle_diagonal, rectangle_perimeter, rectangle_width_from_area,
    rectangle_width_from_perimeter,
};
use crate::errors::{require_finite_result, require_positive, CalcError, CalcResult};

/// Known measurements of a rectangle.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "FromArea", "area": 24.0, "length": 6.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum RectangleInput {
    /// Both sides known
    Dimensions { length: f64, width: f64 },
    /// Area and one side known
    FromArea { area: f64, length: f64 },
    /// Perimeter and one side known
    FromPerimeter { perimeter: f64, length: f64 },
}

impl RectangleInput {
    /// Validate the input and solve for (length, width).
    pub fn sides(&self) -> CalcResult<(f64, f64)> {
        match *self {
            RectangleInput::Dimensions { length, width } => {
                Ok((require_positive("length", length)?, require_positive("width", width)?))
            }
            RectangleInput::FromArea { area, length } => {
                let area = require_positive("area", area)?;
                let length = require_positive("length", length)?;
                let width = require_finite_result("rectangle width", rectangle_width_from_area(area, length))?;
                Ok((length, width))
            }
            RectangleInput::FromPerimeter { perimeter, length } => {
                let perimeter = require_positive("perimeter", perimeter)?;
                let length = require_positive("length", length)?;
                let width = rectangle_width_from_perimeter(perimeter, length);
                if width <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "perimeter",
                        perimeter.to_string(),
                        format!("Perimeter must exceed twice the length ({})", 2.0 * length),
                    ));
                }
                Ok((length, width))
            }
        }
    }
}

/// All measurements of a rectangle.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 3.0,
///   "width": 4.0,
///   "area": 12.0,
///   "perimeter": 14.0,
///   "diagonal": 5.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleResult {
    pub length: f64,
    pub width: f64,
    pub area: f64,
    pub perimeter: f64,
    pub diagonal: f64,
}

impl RectangleResult {
    fn from_sides(length: f64, width: f64) -> CalcResult<Self> {
        Ok(RectangleResult {
            length,
            width,
            area: require_finite_result("rectangle area", rectangle_area(length, width))?,
            perimeter: require_finite_result("rectangle perimeter", rectangle_perimeter(length, width))?,
            diagonal: require_finite_result("rectangle diagonal", rectangle_diagonal(length, width))?,
        })
    }

    /// True when both sides are equal within floating tolerance.
    pub fn is_square(&self) -> bool {
        (self.length - self.width).abs() <= 1e-9 * self.length.max(self.width)
    }
}

/// Calculate every measurement of a rectangle.
///
/// # Returns
///
/// * `Ok(RectangleResult)` - All measurements
/// * `Err(CalcError::InvalidInput)` - A measurement is non-positive or the
///   combination describes no rectangle
pub fn calculate(input: &RectangleInput) -> CalcResult<RectangleResult> {
    let (length, width) = input.sides().inspect_err(|e| {
        debug!(code = e.error_code(), "rectangle input rejected");
    })?;
    debug!(length, width, "rectangle");
    RectangleResult::from_sides(length, width).inspect_err(|e| {
        debug!(code = e.error_code(), "rectangle measurements out of range");
    })
}

/// Rectangle from length and width.
pub fn calculate_rectangle(length: f64, width: f64) -> CalcResult<RectangleResult> {
    calculate(&RectangleInput::Dimensions { length, width })
}

/// Rectangle from area and length.
pub fn calculate_rectangle_from_area(area: f64, length: f64) -> CalcResult<RectangleResult> {
    calculate(&RectangleInput::FromArea { area, length })
}

/// Rectangle from perimeter and length.
pub fn calculate_rectangle_from_perimeter(perimeter: f64, length: f64) -> CalcResult<RectangleResult> {
    calculate(&RectangleInput::FromPerimeter { perimeter, length })
}
