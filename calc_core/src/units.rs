//! # Unit Types
//!
//! Type-safe wrappers for temperature scales. These provide compile-time
//! safety against mixing up Celsius and Fahrenheit while remaining
//! lightweight (just f64 wrappers that serialize as plain numbers).
//!
//! Celsius is the canonical scale: every conversion goes through it.
//! Gas Mark is not a unit in the linear sense and is handled by the
//! reference table in [`crate::settings`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Celsius, Fahrenheit, Kelvin};
//!
//! let boiling = Celsius(100.0);
//! let f: Fahrenheit = boiling.into();
//! assert_eq!(f.0, 212.0);
//!
//! let k: Kelvin = Celsius(0.0).into();
//! assert_eq!(k.0, 273.15);
//! ```

use serde::{Deserialize, Serialize};

/// Absolute zero in degrees Celsius.
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

/// Absolute temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Self {
        Kelvin(c.0 + KELVIN_OFFSET)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Self {
        Celsius(k.0 - KELVIN_OFFSET)
    }
}

impl From<Fahrenheit> for Kelvin {
    fn from(f: Fahrenheit) -> Self {
        Celsius::from(f).into()
    }
}

impl From<Kelvin> for Fahrenheit {
    fn from(k: Kelvin) -> Self {
        Celsius::from(k).into()
    }
}

impl Celsius {
    /// True if the temperature is at or above absolute zero.
    pub fn is_physical(self) -> bool {
        self.0 >= ABSOLUTE_ZERO_C
    }
}

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Celsius, Fahrenheit, Kelvin);
