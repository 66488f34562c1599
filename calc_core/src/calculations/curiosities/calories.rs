//! # Calorie Burn
//!
//! `kcal = MET × weight_kg × hours`, with fixed MET values per activity,
//! plus the same energy expressed as everyday foods.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_finite_result, require_positive, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Walking,
    Running,
    Cycling,
    Swimming,
    Dancing,
    Yoga,
    HouseCleaning,
    Sleeping,
}

impl Activity {
    pub const ALL: [Activity; 8] = [
        Activity::Walking,
        Activity::Running,
        Activity::Cycling,
        Activity::Swimming,
        Activity::Dancing,
        Activity::Yoga,
        Activity::HouseCleaning,
        Activity::Sleeping,
    ];

    /// Metabolic equivalent of the activity.
    pub fn met(self) -> f64 {
        match self {
            Activity::Walking => 3.5,
            Activity::Running => 9.8,
            Activity::Cycling => 7.5,
            Activity::Swimming => 8.0,
            Activity::Dancing => 5.0,
            Activity::Yoga => 2.5,
            Activity::HouseCleaning => 3.3,
            Activity::Sleeping => 0.95,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Food {
    Apple,
    Banana,
    ChocolateBar,
    PizzaSlice,
    SodaCan,
    Beer,
    Doughnut,
}

impl Food {
    pub const ALL: [Food; 7] = [
        Food::Apple,
        Food::Banana,
        Food::ChocolateBar,
        Food::PizzaSlice,
        Food::SodaCan,
        Food::Beer,
        Food::Doughnut,
    ];

    /// Energy of one typical serving, kcal.
    pub fn calories(self) -> f64 {
        match self {
            Food::Apple => 95.0,
            Food::Banana => 105.0,
            Food::ChocolateBar => 230.0,
            Food::PizzaSlice => 285.0,
            Food::SodaCan => 140.0,
            Food::Beer => 150.0,
            Food::Doughnut => 250.0,
        }
    }
}

/// ## JSON Example
///
/// ```json
/// { "activity": "Running", "weight_kg": 70.0, "minutes": 30.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaloriesInput {
    pub activity: Activity,
    pub weight_kg: f64,
    pub minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodEquivalent {
    pub food: Food,
    /// Servings of `food` with the same energy
    pub servings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriesResult {
    pub activity: Activity,
    pub met: f64,
    pub calories: f64,
    pub equivalents: Vec<FoodEquivalent>,
}

/// kcal burned by `activity` over `minutes`.
pub fn calories_burned(activity: Activity, weight_kg: f64, minutes: f64) -> f64 {
    activity.met() * weight_kg * minutes / 60.0
}

/// Minutes of `activity` needed to burn `kcal`.
pub fn minutes_to_burn(kcal: f64, activity: Activity, weight_kg: f64) -> CalcResult<f64> {
    let kcal = require_positive("calories", kcal)?;
    let weight_kg = require_positive("weight_kg", weight_kg)?;
    require_finite_result("minutes to burn", kcal * 60.0 / (activity.met() * weight_kg))
}

/// Servings of every reference food matching `kcal`.
pub fn food_equivalents(kcal: f64) -> Vec<FoodEquivalent> {
    Food::ALL
        .iter()
        .map(|&food| FoodEquivalent {
            food,
            servings: kcal / food.calories(),
        })
        .collect()
}

pub fn calculate(input: &CaloriesInput) -> CalcResult<CaloriesResult> {
    let weight_kg = require_positive("weight_kg", input.weight_kg)?;
    let minutes = require_positive("minutes", input.minutes)?;
    let calories = require_finite_result("calorie burn", calories_burned(input.activity, weight_kg, minutes))
        .inspect_err(|_| debug!(weight_kg, minutes, "calorie burn out of range"))?;
    debug!(activity = %input.activity, calories, "calories");

    Ok(CaloriesResult {
        activity: input.activity,
        met: input.activity.met(),
        calories,
        equivalents: food_equivalents(calories),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_half_hour() {
        let r = calculate(&CaloriesInput {
            activity: Activity::Running,
            weight_kg: 70.0,
            minutes: 30.0,
        })
        .unwrap();
        assert!((r.calories - 343.0).abs() < 1e-9);
        assert_eq!(r.met, 9.8);
        assert_eq!(r.equivalents.len(), Food::ALL.len());
        let apples = r.equivalents.iter().find(|e| e.food == Food::Apple).unwrap();
        assert!((apples.servings - 343.0 / 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse() {
        let minutes = minutes_to_burn(343.0, Activity::Running, 70.0).unwrap();
        assert!((minutes - 30.0).abs() < 1e-9);
        for activity in Activity::ALL {
            let kcal = calories_burned(activity, 62.5, 45.0);
            let back = minutes_to_burn(kcal, activity, 62.5).unwrap();
            assert!((back - 45.0).abs() < 1e-9, "{}", activity);
        }
    }

    #[test]
    fn test_more_intense_burns_more() {
        let walk = calories_burned(Activity::Walking, 80.0, 60.0);
        let run = calories_burned(Activity::Running, 80.0, 60.0);
        let sleep = calories_burned(Activity::Sleeping, 80.0, 60.0);
        assert!(sleep < walk && walk < run);
        assert_eq!(walk, 280.0);
    }

    #[test]
    fn test_invalid() {
        let base = CaloriesInput {
            activity: Activity::Yoga,
            weight_kg: 60.0,
            minutes: 30.0,
        };
        assert!(calculate(&CaloriesInput { weight_kg: 0.0, ..base }).is_err());
        assert!(calculate(&CaloriesInput { minutes: -5.0, ..base }).is_err());
        assert!(minutes_to_burn(0.0, Activity::Yoga, 60.0).is_err());
    }

    #[test]
    fn test_out_of_range_is_overflow() {
        let err = calculate(&CaloriesInput {
            activity: Activity::Running,
            weight_kg: 1e308,
            minutes: 30.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
        let err = minutes_to_burn(1e308, Activity::Sleeping, 1e-10).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
    }

    #[test]
    fn test_input_json() {
        let input: CaloriesInput =
            serde_json::from_str(r#"{ "activity": "HouseCleaning", "weight_kg": 60.0, "minutes": 60.0 }"#).unwrap();
        let r = calculate(&input).unwrap();
        assert!((r.calories - 198.0).abs() < 1e-9);
    }
}
