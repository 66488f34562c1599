//! # Color Conversion
//!
//! Converts a color given in one of HEX, RGB, CMYK or HSL into all four.
//!
//! Unlike the other calculators this one never returns `Err`: malformed
//! input produces a [`ColorResult`] with `is_valid = false` and a message
//! in `error`. Callers must check the flag before using the channels.
//!
//! RGB is the pivot: every input is converted to RGB first and the other
//! representations are derived from it. The input's own representation is
//! reported as given (rounded to whole units) rather than re-derived.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::color::{calculate, ColorInput};
//!
//! let result = calculate(&ColorInput::Hex { value: "#ff5733".to_string() });
//! assert!(result.is_valid);
//! assert_eq!(result.hex, "#FF5733");
//! assert_eq!((result.rgb.r, result.rgb.g, result.rgb.b), (255, 87, 51));
//! assert_eq!((result.hsl.h, result.hsl.s, result.hsl.l), (11, 100, 60));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// RGB channels, 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CMYK percentages, 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// Hue in degrees (0-359), saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// A color as entered by the user.
///
/// ## JSON Example
///
/// ```json
/// { "format": "Hsl", "h": 11.0, "s": 100.0, "l": 60.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format")]
pub enum ColorInput {
    /// `#RRGGBB`, `RRGGBB` or the `#RGB` shorthand
    Hex { value: String },
    Rgb { r: f64, g: f64, b: f64 },
    Cmyk { c: f64, m: f64, y: f64, k: f64 },
    Hsl { h: f64, s: f64, l: f64 },
}

/// One color in every representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorResult {
    pub is_valid: bool,

    /// Why the input was rejected; `None` when valid
    pub error: Option<String>,

    /// Upper-case `#RRGGBB`; empty when invalid
    pub hex: String,
    pub rgb: Rgb,
    pub cmyk: Cmyk,
    pub hsl: Hsl,
}

impl ColorResult {
    fn invalid(reason: impl Into<String>) -> Self {
        ColorResult {
            is_valid: false,
            error: Some(reason.into()),
            hex: String::new(),
            rgb: Rgb::default(),
            cmyk: Cmyk::default(),
            hsl: Hsl::default(),
        }
    }

    fn from_rgb(rgb: Rgb) -> Self {
        ColorResult {
            is_valid: true,
            error: None,
            hex: rgb_to_hex(rgb),
            rgb,
            cmyk: rgb_to_cmyk(rgb),
            hsl: rgb_to_hsl(rgb),
        }
    }
}

// =============================================================================
// Pure conversions
// =============================================================================

/// Parse a HEX color. Returns `None` for malformed input.
pub fn hex_to_rgb(text: &str) -> Option<Rgb> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Rgb {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
        }),
        // #abc is #aabbcc
        3 => {
            let expand = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
            Some(Rgb {
                r: expand(0)?,
                g: expand(1)?,
                b: expand(2)?,
            })
        }
        _ => None,
    }
}

/// Format as upper-case `#RRGGBB`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Standard max/min-channel RGB to HSL conversion, unrounded.
///
/// Returns hue in degrees [0, 360) and saturation/lightness in [0, 1].
pub fn rgb_to_hsl_exact(rgb: Rgb) -> (f64, f64, f64) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h * 60.0, s, l)
}

/// RGB to HSL rounded to whole degrees and percent.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (h, s, l) = rgb_to_hsl_exact(rgb);
    Hsl {
        h: (h.round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// HSL to RGB. `h` in degrees, `s` and `l` in percent; callers validate ranges.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue_to_rgb = |mut t: f64| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    Rgb {
        r: to_channel(hue_to_rgb(h + 1.0 / 3.0)),
        g: to_channel(hue_to_rgb(h)),
        b: to_channel(hue_to_rgb(h - 1.0 / 3.0)),
    }
}

/// RGB to CMYK percentages. Pure black has no chromatic part, so C, M and Y
/// are defined as 0 there instead of dividing by `1 − K = 0`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let k = 1.0 - r.max(g).max(b);

    if rgb == (Rgb { r: 0, g: 0, b: 0 }) {
        return Cmyk { c: 0, m: 0, y: 0, k: 100 };
    }

    let part = |channel: f64| ((1.0 - channel - k) / (1.0 - k) * 100.0).round() as u8;
    Cmyk {
        c: part(r),
        m: part(g),
        y: part(b),
        k: (k * 100.0).round() as u8,
    }
}

/// CMYK percentages to RGB; callers validate ranges.
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> Rgb {
    let k = 1.0 - k / 100.0;
    Rgb {
        r: to_channel((1.0 - c / 100.0) * k),
        g: to_channel((1.0 - m / 100.0) * k),
        b: to_channel((1.0 - y / 100.0) * k),
    }
}

/// Map a unit-interval intensity to a 0-255 channel.
fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

// =============================================================================
// Calculator surface
// =============================================================================

fn check_range(name: &str, value: f64, max: f64) -> Result<f64, String> {
    if !value.is_finite() {
        return Err(format!("{} must be a number", name));
    }
    if !(0.0..=max).contains(&value) {
        return Err(format!("{} must be between 0 and {}", name, max));
    }
    Ok(value)
}

fn convert(input: &ColorInput) -> Result<ColorResult, String> {
    match input {
        ColorInput::Hex { value } => {
            let rgb = hex_to_rgb(value).ok_or_else(|| format!("'{}' is not a HEX color", value))?;
            Ok(ColorResult::from_rgb(rgb))
        }
        ColorInput::Rgb { r, g, b } => {
            let mut channels = [0u8; 3];
            for (slot, (name, value)) in channels.iter_mut().zip([("R", *r), ("G", *g), ("B", *b)]) {
                let value = check_range(name, value, 255.0)?;
                if value.fract() != 0.0 {
                    return Err(format!("{} must be a whole number", name));
                }
                *slot = value as u8;
            }
            let [r, g, b] = channels;
            Ok(ColorResult::from_rgb(Rgb { r, g, b }))
        }
        ColorInput::Cmyk { c, m, y, k } => {
            let c = check_range("C", *c, 100.0)?;
            let m = check_range("M", *m, 100.0)?;
            let y = check_range("Y", *y, 100.0)?;
            let k = check_range("K", *k, 100.0)?;
            let mut result = ColorResult::from_rgb(cmyk_to_rgb(c, m, y, k));
            result.cmyk = Cmyk {
                c: c.round() as u8,
                m: m.round() as u8,
                y: y.round() as u8,
                k: k.round() as u8,
            };
            Ok(result)
        }
        ColorInput::Hsl { h, s, l } => {
            let h = check_range("H", *h, 360.0)?;
            let s = check_range("S", *s, 100.0)?;
            let l = check_range("L", *l, 100.0)?;
            let mut result = ColorResult::from_rgb(hsl_to_rgb(h, s, l));
            result.hsl = Hsl {
                h: (h.round() as u16) % 360,
                s: s.round() as u8,
                l: l.round() as u8,
            };
            Ok(result)
        }
    }
}

/// Convert a color into every representation.
pub fn calculate(input: &ColorInput) -> ColorResult {
    match convert(input) {
        Ok(result) => {
            debug!(hex = %result.hex, "color");
            result
        }
        Err(reason) => {
            debug!(%reason, "color input rejected");
            ColorResult::invalid(reason)
        }
    }
}
