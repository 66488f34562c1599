//! Command-line arguments and their mapping onto calculator requests.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use calc_core::calculations::calendar::parse_date;
use calc_core::calculations::curiosities::{
    Activity, CaloriesInput, CompatibilityInput, DogSize, HabitSavingsInput, PetAgeInput, SavingsInput, Species,
};
use calc_core::calculations::fraction::FractionParts;
use calc_core::calculations::{
    BinomialInput, CalculationRequest, ColorInput, DateOffsetInput, DateOperation, DecimalInput, DerivativeInput,
    FractionInput, FractionOperation, RectangleInput, RhombusInput, TemperatureInput, TemperatureScale,
    TrapezoidInput, TriangleInput,
};

/// Calculadora - geometry, fractions, dates, conversions and curiosities.
#[derive(Parser, Debug)]
#[command(name = "calc", version, about)]
pub struct Cli {
    /// Print the result as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file overriding calculation constants.
    #[arg(long, global = true, env = "CALC_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rectangle from two sides, or one side plus area or perimeter.
    Rectangle {
        #[arg(long)]
        length: f64,
        #[arg(long, required_unless_present_any = ["area", "perimeter"], conflicts_with_all = ["area", "perimeter"])]
        width: Option<f64>,
        #[arg(long, conflicts_with = "perimeter")]
        area: Option<f64>,
        #[arg(long)]
        perimeter: Option<f64>,
    },

    /// Triangle from base and height, or from three sides.
    Triangle {
        #[arg(long, requires = "height", conflicts_with = "sides")]
        base: Option<f64>,
        #[arg(long, requires = "base")]
        height: Option<f64>,
        /// Three sides, comma separated
        #[arg(long, num_args = 3, value_delimiter = ',', required_unless_present = "base")]
        sides: Option<Vec<f64>>,
    },

    /// Trapezoid from bases and height, or with the area given.
    Trapezoid {
        #[arg(long)]
        base1: f64,
        #[arg(long)]
        base2: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        area: Option<f64>,
        /// Both legs, comma separated; adds the perimeter
        #[arg(long, num_args = 2, value_delimiter = ',')]
        legs: Option<Vec<f64>>,
    },

    /// Rhombus from its diagonals, or a side or area (solved as a square).
    Rhombus {
        #[arg(long, requires = "d2", conflicts_with_all = ["side", "area"])]
        d1: Option<f64>,
        #[arg(long, requires = "d1")]
        d2: Option<f64>,
        #[arg(long, conflicts_with = "area")]
        side: Option<f64>,
        #[arg(long)]
        area: Option<f64>,
    },

    /// Fraction arithmetic, e.g. `fraction add 1/4 1/3`.
    #[command(allow_negative_numbers = true)]
    Fraction {
        operation: FractionOp,
        #[arg(value_parser = parse_fraction, allow_hyphen_values = true)]
        left: FractionParts,
        #[arg(value_parser = parse_fraction, allow_hyphen_values = true)]
        right: Option<FractionParts>,
    },

    /// Decimal to fraction, e.g. `decimal 0.375`.
    #[command(allow_negative_numbers = true)]
    Decimal { value: f64 },

    /// Add days to a date, or subtract with `--subtract`.
    #[command(allow_negative_numbers = true)]
    Date {
        /// YYYY-MM-DD
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
        days: i64,
        #[arg(long)]
        subtract: bool,
    },

    /// Convert a temperature to every scale.
    #[command(allow_negative_numbers = true)]
    Temperature {
        value: f64,
        #[arg(long, value_enum, default_value_t = ScaleArg::Celsius)]
        scale: ScaleArg,
    },

    /// Convert a color given as HEX, `--rgb`, `--cmyk` or `--hsl`.
    Color {
        #[arg(required_unless_present_any = ["rgb", "cmyk", "hsl"], conflicts_with_all = ["rgb", "cmyk", "hsl"])]
        hex: Option<String>,
        #[arg(long, num_args = 3, value_delimiter = ',', conflicts_with_all = ["cmyk", "hsl"])]
        rgb: Option<Vec<f64>>,
        #[arg(long, num_args = 4, value_delimiter = ',', conflicts_with = "hsl")]
        cmyk: Option<Vec<f64>>,
        #[arg(long, num_args = 3, value_delimiter = ',')]
        hsl: Option<Vec<f64>>,
    },

    /// Binomial coefficient C(n, k).
    #[command(allow_negative_numbers = true)]
    Binomial { n: i64, k: i64 },

    /// Numerical derivative of a polynomial given by ascending coefficients.
    #[command(allow_negative_numbers = true)]
    Derivative {
        #[arg(long)]
        x: f64,
        #[arg(long)]
        step: Option<f64>,
        #[arg(required = true)]
        coefficients: Vec<f64>,
    },

    /// Compound savings projection.
    Savings {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },

    /// What a daily habit would add up to if saved instead.
    Habit {
        #[arg(long)]
        daily: f64,
        #[arg(long)]
        years: f64,
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
    },

    /// Calories burned by an activity.
    Calories {
        #[arg(long, value_enum)]
        activity: ActivityArg,
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        minutes: f64,
    },

    /// Pet age in human years.
    PetAge {
        #[arg(value_enum)]
        species: SpeciesArg,
        age: f64,
        #[arg(long, value_enum)]
        size: Option<SizeArg>,
    },

    /// Name compatibility score.
    Compatibility { first: String, second: String },

    /// Evaluate a JSON request from a file, or stdin when absent or `-`.
    Json { path: Option<PathBuf> },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FractionOp {
    Simplify,
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleArg {
    Celsius,
    Fahrenheit,
    Kelvin,
    GasMark,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityArg {
    Walking,
    Running,
    Cycling,
    Swimming,
    Dancing,
    Yoga,
    HouseCleaning,
    Sleeping,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeciesArg {
    Dog,
    Cat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeArg {
    Small,
    Medium,
    Large,
    Giant,
}

impl From<FractionOp> for FractionOperation {
    fn from(op: FractionOp) -> Self {
        match op {
            FractionOp::Simplify => FractionOperation::Simplify,
            FractionOp::Add => FractionOperation::Add,
            FractionOp::Subtract => FractionOperation::Subtract,
            FractionOp::Multiply => FractionOperation::Multiply,
            FractionOp::Divide => FractionOperation::Divide,
        }
    }
}

impl From<ScaleArg> for TemperatureScale {
    fn from(scale: ScaleArg) -> Self {
        match scale {
            ScaleArg::Celsius => TemperatureScale::Celsius,
            ScaleArg::Fahrenheit => TemperatureScale::Fahrenheit,
            ScaleArg::Kelvin => TemperatureScale::Kelvin,
            ScaleArg::GasMark => TemperatureScale::GasMark,
        }
    }
}

impl From<ActivityArg> for Activity {
    fn from(activity: ActivityArg) -> Self {
        match activity {
            ActivityArg::Walking => Activity::Walking,
            ActivityArg::Running => Activity::Running,
            ActivityArg::Cycling => Activity::Cycling,
            ActivityArg::Swimming => Activity::Swimming,
            ActivityArg::Dancing => Activity::Dancing,
            ActivityArg::Yoga => Activity::Yoga,
            ActivityArg::HouseCleaning => Activity::HouseCleaning,
            ActivityArg::Sleeping => Activity::Sleeping,
        }
    }
}

impl From<SpeciesArg> for Species {
    fn from(species: SpeciesArg) -> Self {
        match species {
            SpeciesArg::Dog => Species::Dog,
            SpeciesArg::Cat => Species::Cat,
        }
    }
}

impl From<SizeArg> for DogSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Small => DogSize::Small,
            SizeArg::Medium => DogSize::Medium,
            SizeArg::Large => DogSize::Large,
            SizeArg::Giant => DogSize::Giant,
        }
    }
}

/// Parse `n/d`, or a bare integer as `n/1`.
fn parse_fraction(text: &str) -> Result<FractionParts, String> {
    let (n, d) = match text.split_once('/') {
        Some((n, d)) => (n.trim(), d.trim()),
        None => (text.trim(), "1"),
    };
    let numerator = n.parse().map_err(|_| format!("invalid numerator '{}'", n))?;
    let denominator = d.parse().map_err(|_| format!("invalid denominator '{}'", d))?;
    Ok(FractionParts { numerator, denominator })
}

fn parse_date_arg(text: &str) -> Result<NaiveDate, String> {
    parse_date(text).map_err(|e| e.to_string())
}

impl Command {
    /// Build the library request for this command.
    pub fn into_request(self) -> Result<CalculationRequest> {
        let request = match self {
            Command::Rectangle { length, width, area, perimeter } => {
                CalculationRequest::Rectangle(match (width, area, perimeter) {
                    (Some(width), _, _) => RectangleInput::Dimensions { length, width },
                    (None, Some(area), _) => RectangleInput::FromArea { area, length },
                    (None, None, Some(perimeter)) => RectangleInput::FromPerimeter { perimeter, length },
                    (None, None, None) => bail!("rectangle needs --width, --area or --perimeter"),
                })
            }
            Command::Triangle { base, height, sides } => CalculationRequest::Triangle(match (base, height, sides) {
                (Some(base), Some(height), _) => TriangleInput::BaseHeight { base, height },
                (_, _, Some(s)) if s.len() == 3 => TriangleInput::ThreeSides { a: s[0], b: s[1], c: s[2] },
                _ => bail!("triangle needs --base and --height, or --sides a,b,c"),
            }),
            Command::Trapezoid { base1, base2, height, area, legs } => {
                let legs = match legs {
                    Some(v) => Some(<[f64; 2]>::try_from(v.as_slice()).context("--legs takes exactly two values")?),
                    None => None,
                };
                CalculationRequest::Trapezoid(match (base2, height, area) {
                    (Some(base2), Some(height), None) => TrapezoidInput::BasesHeight { base1, base2, height, legs },
                    (Some(base2), None, Some(area)) => TrapezoidInput::FromArea { area, base1, base2, legs },
                    (None, Some(height), Some(area)) => TrapezoidInput::FromAreaAndBase { area, base1, height, legs },
                    _ => bail!("trapezoid needs exactly two of --base2, --height and --area"),
                })
            }
            Command::Rhombus { d1, d2, side, area } => CalculationRequest::Rhombus(match (d1, d2, side, area) {
                (Some(diagonal1), Some(diagonal2), _, _) => RhombusInput::Diagonals { diagonal1, diagonal2 },
                (_, _, Some(side), _) => RhombusInput::Side { side },
                (_, _, _, Some(area)) => RhombusInput::Area { area },
                _ => bail!("rhombus needs --d1 and --d2, --side or --area"),
            }),
            Command::Fraction { operation, left, right } => CalculationRequest::Fraction(FractionInput {
                operation: operation.into(),
                left,
                right,
            }),
            Command::Decimal { value } => CalculationRequest::DecimalToFraction(DecimalInput { decimal: value }),
            Command::Date { date, days, subtract } => CalculationRequest::DateOffset(DateOffsetInput {
                date,
                days,
                operation: if subtract { DateOperation::Subtract } else { DateOperation::Add },
            }),
            Command::Temperature { value, scale } => CalculationRequest::Temperature(TemperatureInput {
                value,
                scale: scale.into(),
            }),
            Command::Color { hex, rgb, cmyk, hsl } => CalculationRequest::Color(match (hex, rgb, cmyk, hsl) {
                (Some(value), _, _, _) => ColorInput::Hex { value },
                (_, Some(v), _, _) if v.len() == 3 => ColorInput::Rgb { r: v[0], g: v[1], b: v[2] },
                (_, _, Some(v), _) if v.len() == 4 => ColorInput::Cmyk { c: v[0], m: v[1], y: v[2], k: v[3] },
                (_, _, _, Some(v)) if v.len() == 3 => ColorInput::Hsl { h: v[0], s: v[1], l: v[2] },
                _ => bail!("color needs a HEX value, --rgb r,g,b, --cmyk c,m,y,k or --hsl h,s,l"),
            }),
            Command::Binomial { n, k } => CalculationRequest::Binomial(BinomialInput { n, k }),
            Command::Derivative { x, step, coefficients } => {
                CalculationRequest::Derivative(DerivativeInput { coefficients, x, step })
            }
            Command::Savings { initial, monthly, rate, years } => CalculationRequest::Savings(SavingsInput {
                initial_amount: initial,
                monthly_contribution: monthly,
                annual_rate_percent: rate,
                years,
            }),
            Command::Habit { daily, years, rate } => CalculationRequest::HabitSavings(HabitSavingsInput {
                daily_cost: daily,
                years,
                annual_rate_percent: rate,
            }),
            Command::Calories { activity, weight, minutes } => CalculationRequest::Calories(CaloriesInput {
                activity: activity.into(),
                weight_kg: weight,
                minutes,
            }),
            Command::PetAge { species, age, size } => CalculationRequest::PetAge(PetAgeInput {
                species: species.into(),
                size: size.map(Into::into),
                age_years: age,
            }),
            Command::Compatibility { first, second } => CalculationRequest::Compatibility(CompatibilityInput {
                first_name: first,
                second_name: second,
            }),
            Command::Json { path } => read_request(path)?,
        };
        Ok(request)
    }
}

fn read_request(path: Option<PathBuf>) -> Result<CalculationRequest> {
    let text = match path {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("parsing calculation request")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("calc").chain(args.iter().copied())).unwrap()
    }

    fn request(args: &[&str]) -> CalculationRequest {
        parse(args).command.into_request().unwrap()
    }

    #[test]
    fn rectangle_modes() {
        assert_eq!(
            request(&["rectangle", "--length", "4", "--width", "3"]),
            CalculationRequest::Rectangle(RectangleInput::Dimensions { length: 4.0, width: 3.0 })
        );
        assert_eq!(
            request(&["rectangle", "--length", "6", "--area", "24"]),
            CalculationRequest::Rectangle(RectangleInput::FromArea { area: 24.0, length: 6.0 })
        );
        assert!(Cli::try_parse_from(["calc", "rectangle", "--length", "4"]).is_err());
        assert!(Cli::try_parse_from(["calc", "rectangle", "--length", "4", "--width", "3", "--area", "12"]).is_err());
    }

    #[test]
    fn triangle_sides() {
        assert_eq!(
            request(&["triangle", "--sides", "3,4,5"]),
            CalculationRequest::Triangle(TriangleInput::ThreeSides { a: 3.0, b: 4.0, c: 5.0 })
        );
        assert!(Cli::try_parse_from(["calc", "triangle", "--base", "3"]).is_err());
    }

    #[test]
    fn trapezoid_needs_two_of_three() {
        let cli = parse(&["trapezoid", "--base1", "4", "--base2", "6", "--height", "3", "--area", "15"]);
        assert!(cli.command.into_request().is_err());
        assert!(matches!(
            request(&["trapezoid", "--base1", "4", "--height", "3", "--area", "15", "--legs", "3,3"]),
            CalculationRequest::Trapezoid(TrapezoidInput::FromAreaAndBase { legs: Some([3.0, 3.0]), .. })
        ));
    }

    #[test]
    fn fraction_arguments() {
        assert_eq!(
            request(&["fraction", "add", "1/4", "-1/3"]),
            CalculationRequest::Fraction(FractionInput {
                operation: FractionOperation::Add,
                left: FractionParts { numerator: 1, denominator: 4 },
                right: Some(FractionParts { numerator: -1, denominator: 3 }),
            })
        );
        assert!(Cli::try_parse_from(["calc", "fraction", "add", "1/x"]).is_err());
        assert_eq!(parse_fraction("7").unwrap(), FractionParts { numerator: 7, denominator: 1 });
    }

    #[test]
    fn date_arguments() {
        let CalculationRequest::DateOffset(input) = request(&["date", "2024-03-15", "7", "--subtract"]) else {
            panic!("expected a date request");
        };
        assert_eq!(input.date.to_string(), "2024-03-15");
        assert_eq!(input.operation, DateOperation::Subtract);
        assert!(Cli::try_parse_from(["calc", "date", "2024-02-30", "1"]).is_err());
    }

    #[test]
    fn negative_numbers_reach_the_library() {
        assert_eq!(
            request(&["temperature", "-40", "--scale", "fahrenheit"]),
            CalculationRequest::Temperature(TemperatureInput {
                value: -40.0,
                scale: TemperatureScale::Fahrenheit
            })
        );
        assert_eq!(
            request(&["binomial", "-1", "2"]),
            CalculationRequest::Binomial(BinomialInput { n: -1, k: 2 })
        );
        assert!(matches!(
            request(&["derivative", "--x", "2", "1", "-3", "0.5"]),
            CalculationRequest::Derivative(DerivativeInput { ref coefficients, .. }) if coefficients == &[1.0, -3.0, 0.5]
        ));
    }

    #[test]
    fn color_formats() {
        assert_eq!(
            request(&["color", "#FF5733"]),
            CalculationRequest::Color(ColorInput::Hex { value: "#FF5733".to_string() })
        );
        assert_eq!(
            request(&["color", "--hsl", "11,100,60"]),
            CalculationRequest::Color(ColorInput::Hsl { h: 11.0, s: 100.0, l: 60.0 })
        );
        assert!(Cli::try_parse_from(["calc", "color", "--cmyk", "0,66,80"]).is_err());
    }

    #[test]
    fn curiosities() {
        assert!(matches!(
            request(&["pet-age", "dog", "5", "--size", "large"]),
            CalculationRequest::PetAge(PetAgeInput { species: Species::Dog, size: Some(DogSize::Large), .. })
        ));
        assert!(matches!(
            request(&["calories", "--activity", "house-cleaning", "--weight", "60", "--minutes", "30"]),
            CalculationRequest::Calories(CaloriesInput { activity: Activity::HouseCleaning, .. })
        ));
        assert!(matches!(
            request(&["habit", "--daily", "3.5", "--years", "5"]),
            CalculationRequest::HabitSavings(HabitSavingsInput { annual_rate_percent, .. }) if annual_rate_percent == 0.0
        ));
    }

    #[test]
    fn global_flags() {
        let cli = parse(&["binomial", "10", "3", "--json", "-v", "--settings", "custom.json"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.settings, Some(PathBuf::from("custom.json")));
    }
}
