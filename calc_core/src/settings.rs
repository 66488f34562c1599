//! # Calculation Settings
//!
//! Every configurable constant a formula depends on, with its default as a
//! named `pub const`.
//!
//! Settings are plain data: nothing in the library caches or mutates them.
//! Operations that depend on a constant take `&CalcSettings` explicitly
//! (`calculate_with`), and the plain `calculate` entry points use
//! [`CalcSettings::default()`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::CalcSettings;
//!
//! let json = r#"{ "binomial_max_n": 60 }"#;
//! let settings = CalcSettings::from_json_str(json).unwrap();
//! assert_eq!(settings.binomial_max_n, 60);
//! // Unspecified fields fall back to defaults
//! assert_eq!(settings.gas_mark_table.len(), 12);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest `n` for which every `C(n, k)` is computed exactly in `u128`.
pub const BINOMIAL_MAX_N: u64 = 100;

/// Cap on the power-of-ten scale used by decimal to fraction conversion.
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// Default finite-difference step for numerical derivatives.
pub const DERIVATIVE_STEP: f64 = 1e-5;

/// Average days per month in the Gregorian calendar (365.25 / 12).
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Human years equivalent to a pet's first year.
pub const PET_FIRST_YEAR: f64 = 15.0;

/// Human years added by a pet's second year.
pub const PET_SECOND_YEAR: f64 = 9.0;

/// Human years per later year, small dogs (< 10 kg).
pub const SMALL_DOG_RATE: f64 = 4.0;

/// Human years per later year, medium dogs (10-25 kg).
pub const MEDIUM_DOG_RATE: f64 = 5.0;

/// Human years per later year, large dogs (25-45 kg).
pub const LARGE_DOG_RATE: f64 = 6.0;

/// Human years per later year, giant dogs (> 45 kg).
pub const GIANT_DOG_RATE: f64 = 7.0;

/// Human years per later year, cats.
pub const CAT_RATE: f64 = 4.0;

/// Human-equivalent age at which a pet stops being a baby.
pub const LIFE_STAGE_YOUNG: f64 = 15.0;

/// Human-equivalent age at which a pet counts as adult.
pub const LIFE_STAGE_ADULT: f64 = 24.0;

/// Human-equivalent age at which a pet counts as senior.
pub const LIFE_STAGE_SENIOR: f64 = 56.0;

/// One reference point of the Gas Mark scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasMarkPoint {
    /// Gas Mark value (1/4 and 1/2 are written as 0.25 and 0.5)
    pub gas_mark: f64,

    /// Oven temperature in degrees Fahrenheit
    pub fahrenheit: f64,
}

/// UK oven reference table: 1/4 = 225°F, 1/2 = 250°F, then 250 + 25·n °F.
pub fn default_gas_mark_table() -> Vec<GasMarkPoint> {
    let mut table = vec![
        GasMarkPoint { gas_mark: 0.25, fahrenheit: 225.0 },
        GasMarkPoint { gas_mark: 0.5, fahrenheit: 250.0 },
    ];
    table.extend((1..=10).map(|n| GasMarkPoint {
        gas_mark: f64::from(n),
        fahrenheit: 250.0 + 25.0 * f64::from(n),
    }));
    table
}

/// Pet-age curve constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetAgeSettings {
    pub first_year: f64,
    pub second_year: f64,
    pub small_dog_rate: f64,
    pub medium_dog_rate: f64,
    pub large_dog_rate: f64,
    pub giant_dog_rate: f64,
    pub cat_rate: f64,
}

impl Default for PetAgeSettings {
    fn default() -> Self {
        PetAgeSettings {
            first_year: PET_FIRST_YEAR,
            second_year: PET_SECOND_YEAR,
            small_dog_rate: SMALL_DOG_RATE,
            medium_dog_rate: MEDIUM_DOG_RATE,
            large_dog_rate: LARGE_DOG_RATE,
            giant_dog_rate: GIANT_DOG_RATE,
            cat_rate: CAT_RATE,
        }
    }
}

/// All configurable formula constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Gas Mark reference points, sorted by gas mark
    pub gas_mark_table: Vec<GasMarkPoint>,

    /// Largest accepted `n` for binomial coefficients
    pub binomial_max_n: u64,

    /// Largest power-of-ten scale tried by decimal to fraction conversion
    pub max_decimal_places: u32,

    /// Default step `h` for finite differences
    pub derivative_step: f64,

    /// Days per month used to turn a daily habit into a monthly deposit
    pub days_per_month: f64,

    /// Pet-age conversion curve
    pub pet_age: PetAgeSettings,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            gas_mark_table: default_gas_mark_table(),
            binomial_max_n: BINOMIAL_MAX_N,
            max_decimal_places: MAX_DECIMAL_PLACES,
            derivative_step: DERIVATIVE_STEP,
            days_per_month: DAYS_PER_MONTH,
            pet_age: PetAgeSettings::default(),
        }
    }
}

impl CalcSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: CalcSettings = serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid settings JSON: {}", e),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check internal consistency of the constants.
    pub fn validate(&self) -> CalcResult<()> {
        if self.gas_mark_table.len() < 2 {
            return Err(CalcError::invalid_input(
                "gas_mark_table",
                self.gas_mark_table.len().to_string(),
                "Gas mark table needs at least two reference points",
            ));
        }
        for pair in self.gas_mark_table.windows(2) {
            if !(pair[1].gas_mark > pair[0].gas_mark && pair[1].fahrenheit > pair[0].fahrenheit) {
                return Err(CalcError::invalid_input(
                    "gas_mark_table",
                    format!("{} -> {}", pair[0].gas_mark, pair[1].gas_mark),
                    "Gas mark table must be strictly increasing in both columns",
                ));
            }
        }
        if self.binomial_max_n > BINOMIAL_MAX_N {
            return Err(CalcError::invalid_input(
                "binomial_max_n",
                self.binomial_max_n.to_string(),
                format!("Exact coefficients are only guaranteed up to n = {}", BINOMIAL_MAX_N),
            ));
        }
        if self.max_decimal_places == 0 || self.max_decimal_places > 15 {
            return Err(CalcError::invalid_input(
                "max_decimal_places",
                self.max_decimal_places.to_string(),
                "Decimal places must be between 1 and 15",
            ));
        }
        if !(self.derivative_step.is_finite() && self.derivative_step > 0.0) {
            return Err(CalcError::invalid_input(
                "derivative_step",
                self.derivative_step.to_string(),
                "Step must be a positive finite number",
            ));
        }
        if !(self.days_per_month.is_finite() && self.days_per_month > 0.0) {
            return Err(CalcError::invalid_input(
                "days_per_month",
                self.days_per_month.to_string(),
                "Days per month must be positive",
            ));
        }
        let pet = &self.pet_age;
        let rates = [
            ("pet_age.first_year", pet.first_year),
            ("pet_age.second_year", pet.second_year),
            ("pet_age.small_dog_rate", pet.small_dog_rate),
            ("pet_age.medium_dog_rate", pet.medium_dog_rate),
            ("pet_age.large_dog_rate", pet.large_dog_rate),
            ("pet_age.giant_dog_rate", pet.giant_dog_rate),
            ("pet_age.cat_rate", pet.cat_rate),
        ];
        for (field, rate) in rates {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(CalcError::invalid_input(field, rate.to_string(), "Rate must be positive"));
            }
        }
        Ok(())
    }
}

/// Load settings from a JSON file.
///
/// Missing fields take their default values; the result is validated
/// before it is returned.
pub fn load_settings(path: &Path) -> CalcResult<CalcSettings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    CalcSettings::from_json_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(CalcSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_gas_mark_table() {
        let table = default_gas_mark_table();
        assert_eq!(table.len(), 12);
        assert_eq!(table[0], GasMarkPoint { gas_mark: 0.25, fahrenheit: 225.0 });
        assert_eq!(table[2], GasMarkPoint { gas_mark: 1.0, fahrenheit: 275.0 });
        assert_eq!(table[5], GasMarkPoint { gas_mark: 4.0, fahrenheit: 350.0 });
        assert_eq!(table[11], GasMarkPoint { gas_mark: 10.0, fahrenheit: 500.0 });
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = CalcSettings::from_json_str(r#"{ "pet_age": { "cat_rate": 5.0 } }"#).unwrap();
        assert_eq!(settings.pet_age.cat_rate, 5.0);
        assert_eq!(settings.pet_age.first_year, PET_FIRST_YEAR);
        assert_eq!(settings.binomial_max_n, BINOMIAL_MAX_N);
    }

    #[test]
    fn test_rejects_unsorted_gas_table() {
        let json = r#"{ "gas_mark_table": [
            { "gas_mark": 2.0, "fahrenheit": 300.0 },
            { "gas_mark": 1.0, "fahrenheit": 275.0 }
        ] }"#;
        let err = CalcSettings::from_json_str(json).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_binomial_limit_above_exact_range() {
        let err = CalcSettings::from_json_str(r#"{ "binomial_max_n": 500 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_json() {
        let err = CalcSettings::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_settings_from_file() {
        let path = temp_dir().join("calc_core_test_settings.json");
        fs::write(&path, r#"{ "derivative_step": 0.001 }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.derivative_step, 0.001);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_dir().join("calc_core_definitely_missing.json");
        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
