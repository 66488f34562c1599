//! # Pet Age in Human Years
//!
//! Piecewise-linear curve:
//!
//! ```text
//! human
//!   │                          ╱  rate per year (size dependent)
//!   │                       ╱
//! 24┤ ·············· ●
//!   │           ╱
//! 15┤ ···· ●
//!   │   ╱
//!   └────┴─────────┴──────── pet years
//!        1         2
//! ```
//!
//! Constants come from [`PetAgeSettings`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_non_negative, CalcError, CalcResult};
use crate::settings::{CalcSettings, PetAgeSettings, LIFE_STAGE_ADULT, LIFE_STAGE_SENIOR, LIFE_STAGE_YOUNG};

/// Oldest accepted pet age.
pub const MAX_PET_AGE: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DogSize {
    Small,
    Medium,
    Large,
    Giant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifeStage {
    Baby,
    Young,
    Adult,
    Senior,
}

impl LifeStage {
    /// Stage for a human-equivalent age.
    pub fn from_human_years(years: f64) -> Self {
        if years < LIFE_STAGE_YOUNG {
            LifeStage::Baby
        } else if years < LIFE_STAGE_ADULT {
            LifeStage::Young
        } else if years < LIFE_STAGE_SENIOR {
            LifeStage::Adult
        } else {
            LifeStage::Senior
        }
    }
}

/// ## JSON Example
///
/// ```json
/// { "species": "Dog", "size": "Large", "age_years": 6.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetAgeInput {
    pub species: Species,

    /// Required for dogs, ignored for cats
    #[serde(default)]
    pub size: Option<DogSize>,

    pub age_years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetAgeResult {
    pub species: Species,
    pub size: Option<DogSize>,
    pub age_years: f64,
    pub human_years: f64,
    pub life_stage: LifeStage,
}

/// Human years gained per pet year after the second.
pub fn later_year_rate(species: Species, size: Option<DogSize>, curve: &PetAgeSettings) -> CalcResult<f64> {
    match (species, size) {
        (Species::Cat, _) => Ok(curve.cat_rate),
        (Species::Dog, Some(DogSize::Small)) => Ok(curve.small_dog_rate),
        (Species::Dog, Some(DogSize::Medium)) => Ok(curve.medium_dog_rate),
        (Species::Dog, Some(DogSize::Large)) => Ok(curve.large_dog_rate),
        (Species::Dog, Some(DogSize::Giant)) => Ok(curve.giant_dog_rate),
        (Species::Dog, None) => Err(CalcError::missing_field("size")),
    }
}

/// Map pet years onto the curve.
pub fn human_years(age: f64, rate: f64, curve: &PetAgeSettings) -> f64 {
    if age <= 1.0 {
        age * curve.first_year
    } else if age <= 2.0 {
        curve.first_year + (age - 1.0) * curve.second_year
    } else {
        curve.first_year + curve.second_year + (age - 2.0) * rate
    }
}

pub fn calculate_with(input: &PetAgeInput, settings: &CalcSettings) -> CalcResult<PetAgeResult> {
    let age = require_non_negative("age_years", input.age_years)?;
    if age > MAX_PET_AGE {
        return Err(CalcError::invalid_input(
            "age_years",
            age.to_string(),
            format!("Age must be at most {} years", MAX_PET_AGE),
        ));
    }
    let curve = &settings.pet_age;
    let rate = later_year_rate(input.species, input.size, curve)?;
    let human = human_years(age, rate, curve);
    debug!(species = ?input.species, age, human, "pet age");

    Ok(PetAgeResult {
        species: input.species,
        size: match input.species {
            Species::Dog => input.size,
            Species::Cat => None,
        },
        age_years: age,
        human_years: human,
        life_stage: LifeStage::from_human_years(human),
    })
}

pub fn calculate(input: &PetAgeInput) -> CalcResult<PetAgeResult> {
    calculate_with(input, &CalcSettings::default())
}
