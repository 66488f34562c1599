//! # Name Compatibility
//!
//! A novelty score in `0..=100` that only depends on the two names. Names are
//! normalized (lower case, letters only) and sorted, so the score ignores
//! order, case, spacing and punctuation. The pair is hashed with 32-bit
//! FNV-1a; scores are stable across platforms and releases.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompatibilityTier {
    Low,
    Medium,
    High,
    Perfect,
}

impl CompatibilityTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => CompatibilityTier::Low,
            40..=69 => CompatibilityTier::Medium,
            70..=89 => CompatibilityTier::High,
            _ => CompatibilityTier::Perfect,
        }
    }
}

/// ## JSON Example
///
/// ```json
/// { "first_name": "Romeo", "second_name": "Juliet" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityInput {
    pub first_name: String,
    pub second_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Normalized names in hash order
    pub names: [String; 2],
    pub score: u8,
    pub tier: CompatibilityTier,
}

/// 32-bit FNV-1a.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(FNV_OFFSET_BASIS, |hash, &b| (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME))
}

/// Lower-case letters only.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn calculate(input: &CompatibilityInput) -> CalcResult<CompatibilityResult> {
    let mut names = [
        normalize_name(&input.first_name),
        normalize_name(&input.second_name),
    ];
    for (field, raw, normalized) in [
        ("first_name", &input.first_name, &names[0]),
        ("second_name", &input.second_name, &names[1]),
    ] {
        if normalized.is_empty() {
            return Err(CalcError::invalid_input(field, raw.as_str(), "Name must contain at least one letter"));
        }
    }
    names.sort();

    let hash = fnv1a_32(format!("{}+{}", names[0], names[1]).as_bytes());
    let score = (hash % 101) as u8;
    debug!(score, "compatibility");

    Ok(CompatibilityResult {
        names,
        score,
        tier: CompatibilityTier::from_score(score),
    })
}
