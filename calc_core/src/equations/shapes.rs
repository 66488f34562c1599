//! # Plane Shape Formulas
//!
//! Closed-form area, perimeter and inverse formulas for the shapes the
//! geometry calculators support. These functions do no validation: callers
//! in [`crate::calculations`] check their inputs first.
//!
//! ## Notation
//!
//! - `l`, `w` = Rectangle length and width
//! - `b`, `h` = Base and height (height perpendicular to the base)
//! - `a`, `b`, `c` = Triangle sides
//! - `b1`, `b2` = Parallel sides of a trapezoid
//! - `d1`, `d2` = Rhombus diagonals
//! - `s` = Semiperimeter or rhombus side, depending on context

// =============================================================================
// RECTANGLE
// =============================================================================

/// Area of a rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   w │         │
///     │         │
///     └─────────┘
///          l
/// ```
///
/// # Formula
/// A = l × w
///
/// # Example
/// ```rust
/// use calc_core::equations::shapes::rectangle_area;
///
/// assert_eq!(rectangle_area(4.0, 2.5), 10.0);
/// ```
#[inline]
pub fn rectangle_area(l: f64, w: f64) -> f64 {
    l * w
}

/// Perimeter of a rectangle
///
/// # Formula
/// P = 2(l + w)
#[inline]
pub fn rectangle_perimeter(l: f64, w: f64) -> f64 {
    2.0 * (l + w)
}

/// Diagonal of a rectangle
///
/// # Formula
/// d = √(l² + w²)
#[inline]
pub fn rectangle_diagonal(l: f64, w: f64) -> f64 {
    l.hypot(w)
}

/// Width of a rectangle from its area and length
///
/// # Formula
/// w = A / l
#[inline]
pub fn rectangle_width_from_area(area: f64, l: f64) -> f64 {
    area / l
}

/// Width of a rectangle from its perimeter and length
///
/// # Formula
/// w = P/2 − l
#[inline]
pub fn rectangle_width_from_perimeter(perimeter: f64, l: f64) -> f64 {
    perimeter / 2.0 - l
}

// =============================================================================
// TRIANGLE
// =============================================================================

/// Area of a triangle from base and height
///
/// ```text
///          /\
///         /  \
///        /  │ \
///       /   │h \
///      /    │   \
///     /─────┴────\
///           b
/// ```
///
/// # Formula
/// A = b × h / 2
#[inline]
pub fn triangle_area(b: f64, h: f64) -> f64 {
    b * h / 2.0
}

/// Check the strict triangle inequality for three sides.
///
/// Degenerate triangles (one side equal to the sum of the other two) fail.
///
/// # Example
/// ```rust
/// use calc_core::equations::shapes::triangle_inequality_holds;
///
/// assert!(triangle_inequality_holds(3.0, 4.0, 5.0));
/// assert!(!triangle_inequality_holds(1.0, 1.0, 5.0));
/// assert!(!triangle_inequality_holds(1.0, 2.0, 3.0));
/// ```
#[inline]
pub fn triangle_inequality_holds(a: f64, b: f64, c: f64) -> bool {
    a + b > c && a + c > b && b + c > a
}

/// Area of a triangle from three sides (Heron's formula)
///
/// # Formula
/// s = (a + b + c) / 2
/// A = √(s(s − a)(s − b)(s − c))
///
/// Evaluated in the sorted-sides form (a ≥ b ≥ c)
///
/// ```text
/// A = ¼ · √(a + (b + c)) · √(c − (a − b)) · √(c + (a − b)) · √(a + (b − c))
/// ```
///
/// with one root per factor, so the area stays finite whenever it fits in an
/// `f64` even if the product under a single root would not. A factor that comes
/// out a hair below zero for near-degenerate input is floored at zero; the
/// caller is expected to have checked [`triangle_inequality_holds`] already.
///
/// # Example
/// ```rust
/// use calc_core::equations::shapes::heron_area;
///
/// // 3-4-5 right triangle
/// assert!((heron_area(3.0, 4.0, 5.0) - 6.0).abs() < 1e-12);
/// ```
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let mut sides = [a, b, c];
    sides.sort_by(|x, y| y.total_cmp(x));
    let [a, b, c] = sides;
    let factors = [a + (b + c), c - (a - b), c + (a - b), a + (b - c)];
    0.25 * factors.iter().map(|f| f.max(0.0).sqrt()).product::<f64>()
}

/// Height of a triangle onto `base`, given its area
///
/// # Formula
/// h = 2A / b
#[inline]
pub fn triangle_height_from_area(area: f64, base: f64) -> f64 {
    area / base * 2.0
}

// =============================================================================
// TRAPEZOID
// =============================================================================

/// Area of a trapezoid
///
/// ```text
///          b1
///       ┌──────┐
///      /   │    \
///     /    │h    \
///    /     │      \
///   └──────┴───────┘
///          b2
/// ```
///
/// # Formula
/// A = (b1 + b2) × h / 2
#[inline]
pub fn trapezoid_area(b1: f64, b2: f64, h: f64) -> f64 {
    (b1 + b2) * h / 2.0
}

/// Height of a trapezoid from its area and both bases
///
/// # Formula
/// h = 2A / (b1 + b2)
#[inline]
pub fn trapezoid_height(area: f64, b1: f64, b2: f64) -> f64 {
    2.0 * area / (b1 + b2)
}

/// Missing base of a trapezoid from its area, one base and height
///
/// # Formula
/// b2 = 2A / h − b1
#[inline]
pub fn trapezoid_other_base(area: f64, b1: f64, h: f64) -> f64 {
    2.0 * area / h - b1
}

/// Median (midsegment) of a trapezoid
///
/// # Formula
/// m = (b1 + b2) / 2
#[inline]
pub fn trapezoid_median(b1: f64, b2: f64) -> f64 {
    (b1 + b2) / 2.0
}

// =============================================================================
// RHOMBUS
// =============================================================================

/// Area of a rhombus from its diagonals
///
/// ```text
///         /\
///        /  \
///       / d1 \
///      <──────>
///       \ d2 /
///        \  /
///         \/
/// ```
///
/// # Formula
/// A = d1 × d2 / 2
#[inline]
pub fn rhombus_area(d1: f64, d2: f64) -> f64 {
    d1 / 2.0 * d2
}

/// Side of a rhombus from its diagonals
///
/// The diagonals bisect each other at right angles, so each side is the
/// hypotenuse of a right triangle with legs d1/2 and d2/2.
///
/// # Formula
/// s = √((d1/2)² + (d2/2)²)
#[inline]
pub fn rhombus_side(d1: f64, d2: f64) -> f64 {
    (d1 / 2.0).hypot(d2 / 2.0)
}

/// Perimeter of a rhombus
///
/// # Formula
/// P = 4s
#[inline]
pub fn rhombus_perimeter(side: f64) -> f64 {
    4.0 * side
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-12
    }

    #[test]
    fn test_rectangle_formulas() {
        assert!(approx_eq(rectangle_area(3.0, 4.0), 12.0));
        assert!(approx_eq(rectangle_perimeter(3.0, 4.0), 14.0));
        assert!(approx_eq(rectangle_diagonal(3.0, 4.0), 5.0));
    }

    #[test]
    fn test_rectangle_inverse_formulas() {
        assert!(approx_eq(rectangle_width_from_area(12.0, 3.0), 4.0));
        assert!(approx_eq(rectangle_width_from_perimeter(14.0, 3.0), 4.0));
    }

    #[test]
    fn test_heron_matches_base_height() {
        // Isosceles triangle with base 6 and legs 5 has height 4
        let heron = heron_area(5.0, 5.0, 6.0);
        let direct = triangle_area(6.0, 4.0);
        assert!(approx_eq(heron, direct), "heron = {}, direct = {}", heron, direct);
    }

    #[test]
    fn test_heron_equilateral() {
        // A = √3/4 · a²
        let a = 2.0;
        let expected = 3.0_f64.sqrt() / 4.0 * a * a;
        assert!(approx_eq(heron_area(a, a, a), expected));
    }

    #[test]
    fn test_heron_degenerate_is_zero_not_nan() {
        let area = heron_area(1.0, 2.0, 3.0);
        assert_eq!(area, 0.0);
    }

    #[test]
    fn test_heron_large_sides_stay_finite() {
        // s(s-a)(s-b)(s-c) ~ 1e616 here, but the area itself is ~4.33e307
        let a = 1e154;
        let area = heron_area(a, a, a);
        assert!(area.is_finite());
        assert!(approx_eq(area, 3.0_f64.sqrt() / 4.0 * 1e308), "area = {}", area);
    }

    #[test]
    fn test_heron_order_independent() {
        assert_eq!(heron_area(3.0, 4.0, 5.0), heron_area(5.0, 3.0, 4.0));
        assert!(approx_eq(heron_area(7.0, 8.0, 9.0), 12.0 * 5.0_f64.sqrt()));
    }

    #[test]
    fn test_trapezoid_consistency() {
        let area = trapezoid_area(4.0, 6.0, 3.0);
        assert!(approx_eq(area, 15.0));
        assert!(approx_eq(trapezoid_height(area, 4.0, 6.0), 3.0));
        assert!(approx_eq(trapezoid_other_base(area, 4.0, 3.0), 6.0));
        assert!(approx_eq(trapezoid_median(4.0, 6.0), 5.0));
    }

    #[test]
    fn test_rhombus_formulas() {
        assert!(approx_eq(rhombus_area(6.0, 8.0), 24.0));
        assert!(approx_eq(rhombus_side(6.0, 8.0), 5.0));
        assert!(approx_eq(rhombus_perimeter(5.0), 20.0));
    }
}
