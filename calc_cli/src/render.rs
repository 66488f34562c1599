//! Plain-text rendering of calculation outcomes.

use std::fmt::Write;

use calc_core::calculations::CalculationOutcome;

const RULE: &str = "═══════════════════════════════════════";

/// Up to six decimals, trailing zeros dropped.
fn num(value: f64) -> String {
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Render an outcome as a titled block of `label: value` lines.
pub fn render(outcome: &CalculationOutcome) -> String {
    let mut rows: Vec<(&str, String)> = Vec::new();
    let title = match outcome {
        CalculationOutcome::Rectangle(r) => {
            rows.push(("Length", num(r.length)));
            rows.push(("Width", num(r.width)));
            rows.push(("Area", num(r.area)));
            rows.push(("Perimeter", num(r.perimeter)));
            rows.push(("Diagonal", num(r.diagonal)));
            if r.is_square() {
                rows.push(("Shape", "square".to_string()));
            }
            "RECTANGLE"
        }
        CalculationOutcome::Triangle(r) => {
            if let Some([a, b, c]) = r.sides {
                rows.push(("Sides", format!("{}, {}, {}", num(a), num(b), num(c))));
            }
            rows.push(("Base", num(r.base)));
            rows.push(("Height", num(r.height)));
            rows.push(("Area", num(r.area)));
            if let Some(p) = r.perimeter {
                rows.push(("Perimeter", num(p)));
            }
            if let Some(kind) = r.kind {
                rows.push(("Kind", format!("{:?}", kind)));
            }
            "TRIANGLE"
        }
        CalculationOutcome::Trapezoid(r) => {
            rows.push(("Base 1", num(r.base1)));
            rows.push(("Base 2", num(r.base2)));
            rows.push(("Height", num(r.height)));
            rows.push(("Area", num(r.area)));
            rows.push(("Median", num(r.median)));
            if let Some(p) = r.perimeter {
                rows.push(("Perimeter", num(p)));
            }
            "TRAPEZOID"
        }
        CalculationOutcome::Rhombus(r) => {
            rows.push(("Diagonal 1", num(r.diagonal1)));
            rows.push(("Diagonal 2", num(r.diagonal2)));
            rows.push(("Side", num(r.side)));
            rows.push(("Area", num(r.area)));
            rows.push(("Perimeter", num(r.perimeter)));
            if r.assumes_equal_diagonals {
                rows.push(("Note", "solved as a square (equal diagonals)".to_string()));
            }
            "RHOMBUS"
        }
        CalculationOutcome::Fraction(r) | CalculationOutcome::DecimalToFraction(r) => {
            let fraction = if r.denominator == 1 {
                r.numerator.to_string()
            } else {
                format!("{}/{}", r.numerator, r.denominator)
            };
            rows.push(("Fraction", fraction));
            if let Some(mixed) = r.mixed {
                rows.push(("Mixed", mixed.to_string()));
            }
            if let Some(decimal) = r.decimal {
                rows.push(("Decimal", num(decimal)));
            }
            "FRACTION"
        }
        CalculationOutcome::DateOffset(r) => {
            rows.push(("Start", format!("{} ({})", r.original_date, r.original_day_of_week)));
            rows.push(("Offset", format!("{:?} {} days", r.operation, r.days)));
            rows.push(("Result", format!("{} ({})", r.result_date, r.result_day_of_week)));
            "DATE"
        }
        CalculationOutcome::Temperature(r) => {
            rows.push(("Celsius", format!("{} °C", num(r.celsius))));
            rows.push(("Fahrenheit", format!("{} °F", num(r.fahrenheit))));
            rows.push(("Kelvin", format!("{} K", num(r.kelvin))));
            match (r.gas_mark, r.gas_mark_nearest) {
                (Some(mark), Some(nearest)) => {
                    rows.push(("Gas Mark", format!("{} (nearest {})", num(mark), num(nearest))));
                }
                (Some(mark), None) => rows.push(("Gas Mark", num(mark))),
                (None, _) => rows.push(("Gas Mark", "outside oven range".to_string())),
            }
            "TEMPERATURE"
        }
        CalculationOutcome::Color(r) => {
            if let Some(error) = &r.error {
                rows.push(("Invalid", error.clone()));
            } else {
                rows.push(("HEX", r.hex.clone()));
                rows.push(("RGB", format!("{}, {}, {}", r.rgb.r, r.rgb.g, r.rgb.b)));
                rows.push(("CMYK", format!("{}%, {}%, {}%, {}%", r.cmyk.c, r.cmyk.m, r.cmyk.y, r.cmyk.k)));
                rows.push(("HSL", format!("{}°, {}%, {}%", r.hsl.h, r.hsl.s, r.hsl.l)));
            }
            "COLOR"
        }
        CalculationOutcome::Binomial(r) => {
            rows.push(("C(n, k)", format!("C({}, {}) = {}", r.n, r.k, r.coefficient)));
            "BINOMIAL COEFFICIENT"
        }
        CalculationOutcome::Derivative(r) => {
            rows.push(("x", num(r.x)));
            rows.push(("p(x)", num(r.value)));
            rows.push(("p'(x)", num(r.derivative)));
            rows.push(("p''(x)", num(r.second_derivative)));
            rows.push(("Step", format!("{:e}", r.step)));
            "DERIVATIVE"
        }
        CalculationOutcome::Savings(r) => {
            rows.push(("Months", r.months.to_string()));
            rows.push(("Contributed", money(r.total_contributed)));
            rows.push(("Interest", money(r.interest_earned)));
            rows.push(("Final balance", money(r.final_balance)));
            "SAVINGS"
        }
        CalculationOutcome::HabitSavings(r) => {
            rows.push(("Monthly deposit", money(r.monthly_deposit)));
            rows.push(("Months", r.projection.months.to_string()));
            rows.push(("Without interest", money(r.without_interest)));
            rows.push(("With interest", money(r.projection.final_balance)));
            "HABIT SAVINGS"
        }
        CalculationOutcome::Calories(r) => {
            rows.push(("Activity", format!("{} (MET {})", r.activity, num(r.met))));
            rows.push(("Burned", format!("{:.0} kcal", r.calories)));
            for e in &r.equivalents {
                rows.push(("  ≈", format!("{:.1} × {:?}", e.servings, e.food)));
            }
            "CALORIES"
        }
        CalculationOutcome::PetAge(r) => {
            let pet = match r.size {
                Some(size) => format!("{:?} ({:?})", r.species, size),
                None => format!("{:?}", r.species),
            };
            rows.push(("Pet", pet));
            rows.push(("Age", format!("{} years", num(r.age_years))));
            rows.push(("Human years", num(r.human_years)));
            rows.push(("Life stage", format!("{:?}", r.life_stage)));
            "PET AGE"
        }
        CalculationOutcome::Compatibility(r) => {
            rows.push(("Names", format!("{} + {}", r.names[0], r.names[1])));
            rows.push(("Score", format!("{}%", r.score)));
            rows.push(("Tier", format!("{:?}", r.tier)));
            "COMPATIBILITY"
        }
    };

    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<width$}  {}", label, value, width = width);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{BinomialInput, CalculationRequest, RectangleInput};
    use calc_core::CalcSettings;

    fn render_request(request: CalculationRequest) -> String {
        render(&request.evaluate(&CalcSettings::default()).unwrap())
    }

    #[test]
    fn number_formatting() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(0.375), "0.375");
        assert_eq!(num(1.0 / 3.0), "0.333333");
        assert_eq!(num(-0.0000001), "0");
    }

    #[test]
    fn rectangle_block() {
        let text = render_request(CalculationRequest::Rectangle(RectangleInput::Dimensions {
            length: 4.0,
            width: 3.0,
        }));
        assert!(text.contains("RECTANGLE"));
        assert!(text.contains("Area       12"));
        assert!(text.contains("Diagonal   5"));
    }

    #[test]
    fn binomial_block() {
        let text = render_request(CalculationRequest::Binomial(BinomialInput { n: 100, k: 50 }));
        assert!(text.contains("C(100, 50) = 100891344545564193334812497256"));
    }
}
