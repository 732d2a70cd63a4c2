//! Yoga records and their classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Machine category of a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YogaCategory {
    Mahapurusha,
    Raja,
    Prosperity,
    Dhana,
}

impl YogaCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mahapurusha => "mahapurusha",
            Self::Raja => "raja",
            Self::Prosperity => "prosperity",
            Self::Dhana => "dhana",
        }
    }
}

impl fmt::Display for YogaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength tier, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum YogaStrength {
    #[serde(rename = "very strong")]
    VeryStrong,
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "weak")]
    Weak,
}

impl YogaStrength {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryStrong => "very strong",
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

impl fmt::Display for YogaStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yoga {
    pub name: String,
    #[serde(rename = "type")]
    pub category: YogaCategory,
    pub planets: Vec<Graha>,
    pub description: String,
    pub effect: String,
    pub strength: YogaStrength,
}

/// Count of yogas per strength tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthCounts {
    #[serde(rename = "very strong")]
    pub very_strong: usize,
    pub strong: usize,
    pub moderate: usize,
    pub weak: usize,
}

impl StrengthCounts {
    pub fn tally<'a>(yogas: impl IntoIterator<Item = &'a Yoga>) -> Self {
        let mut counts = Self::default();
        for y in yogas {
            match y.strength {
                YogaStrength::VeryStrong => counts.very_strong += 1,
                YogaStrength::Strong => counts.strong += 1,
                YogaStrength::Moderate => counts.moderate += 1,
                YogaStrength::Weak => counts.weak += 1,
            }
        }
        counts
    }
}
