//! # Curiosities
//!
//! Light-hearted calculators: closed-form estimates and arithmetic
//! mappings rather than engineering results.
//!
//! - [`savings`] - compound savings and "skip a daily habit" projections
//! - [`calories`] - calories burned by an activity and food equivalents
//! - [`pet_age`] - dog and cat age in human years
//! - [`compatibility`] - deterministic name compatibility score

pub mod calories;
pub mod compatibility;
pub mod pet_age;
pub mod savings;

pub use calories::{Activity, CaloriesInput, CaloriesResult, Food, FoodEquivalent};
pub use compatibility::{CompatibilityInput, CompatibilityResult, CompatibilityTier};
pub use pet_age::{DogSize, LifeStage, PetAgeInput, PetAgeResult, Species};
pub use savings::{HabitSavingsInput, HabitSavingsResult, SavingsInput, SavingsResult};
