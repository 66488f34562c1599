//! # calc_core - Calculator Engine
//!
//! `calc_core` is the computational heart of Calculadora: the deterministic
//! formulas behind a multi-locale calculator website, with a clean,
//! JSON-friendly API. All inputs and outputs are JSON-serializable, so the
//! same types serve a web front end, the CLI, or any other host.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Locale-Free**: Numbers and enums out, wording left to the host
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::rectangle::calculate_rectangle;
//! use calc_core::calculations::fraction::Fraction;
//!
//! let rect = calculate_rectangle(4.0, 3.0).unwrap();
//! assert_eq!(rect.area, 12.0);
//! assert_eq!(rect.diagonal, 5.0);
//!
//! let sum = Fraction::new(1, 4).unwrap().checked_add(&Fraction::new(1, 3).unwrap()).unwrap();
//! assert_eq!(sum.to_string(), "7/12");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculators (geometry, fractions, dates, ...)
//! - [`equations`] - Raw geometry formulas
//! - [`settings`] - Configurable constants and their defaults
//! - [`units`] - Type-safe temperature wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationOutcome, CalculationRequest};
pub use errors::{CalcError, CalcResult};
pub use settings::{load_settings, CalcSettings};
