//! # Geometry Equations
//!
//! Raw closed-form formulas used by the shape calculators. Input modes and
//! validation live in [`crate::calculations`].
//!
//! ## Modules
//!
//! - [`shapes`] - Rectangle, triangle, trapezoid and rhombus formulas
//!
//! ## Conventions
//!
//! - All lengths share one (unspecified) unit; areas are in that unit squared
//! - Functions never validate; the calculators check inputs first

pub mod shapes;

pub use shapes::{
    heron_area,
    rectangle_area,
    rectangle_diagonal,
    rectangle_perimeter,
    rectangle_width_from_area,
    rectangle_width_from_perimeter,
    rhombus_area,
    rhombus_perimeter,
    rhombus_side,
    trapezoid_area,
    trapezoid_height,
    trapezoid_median,
    trapezoid_other_base,
    triangle_area,
    triangle_height_from_area,
    triangle_inequality_holds,
};
