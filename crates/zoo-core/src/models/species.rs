//! Species reference models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive `min..=max` range for a vital sign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a value falls inside the range (both ends inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Diet category of a species.
///
/// Values that are not recognised when loading stored data map to `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Carnivore,
    Herbivore,
    Omnivore,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Diet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Carnivore => "carnivore",
            Diet::Herbivore => "herbivore",
            Diet::Omnivore => "omnivore",
            Diet::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physiological reference ranges used to judge a health observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthBaseline {
    /// Body weight in kg
    pub weight_kg: Bounds,
    /// Body temperature in °C
    pub temperature_c: Bounds,
    /// Resting heart rate in bpm
    pub heart_rate_bpm: Bounds,
    /// Set when the baseline is an estimate rather than species data
    pub note: Option<String>,
}

impl HealthBaseline {
    pub const fn new(weight_kg: Bounds, temperature_c: Bounds, heart_rate_bpm: Bounds) -> Self {
        Self {
            weight_kg,
            temperature_c,
            heart_rate_bpm,
            note: None,
        }
    }

    pub fn is_estimate(&self) -> bool {
        self.note.is_some()
    }
}

/// Breeding window for a species.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreedingRange {
    /// Minimum breeding age in years
    pub min_age: u32,
    /// Maximum breeding age in years
    pub max_age: u32,
    /// Gestation period in days
    pub gestation_days: u32,
}

impl BreedingRange {
    /// Used when a species has no catalog entry.
    pub const DEFAULT: BreedingRange = BreedingRange {
        min_age: 3,
        max_age: 15,
        gestation_days: 90,
    };
}

impl Default for BreedingRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reference data for a single species.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesBaseline {
    /// Species name as used in animal records (e.g., "Lion")
    pub name: String,
    /// Catalog code (e.g., "LION001")
    pub code: String,
    /// Vital-sign ranges
    pub health: HealthBaseline,
    pub diet: Diet,
    /// Habitat type (e.g., "savannah", "forest")
    pub habitat_type: String,
    /// Temperament (e.g., "calm", "aggressive")
    pub temperament: String,
    /// Social structure (e.g., "herd", "solitary")
    pub social_needs: String,
    pub breeding: BreedingRange,
}

impl SpeciesBaseline {
    /// Check that every range satisfies `min <= max`.
    pub fn is_consistent(&self) -> bool {
        self.health.weight_kg.is_ordered()
            && self.health.temperature_c.is_ordered()
            && self.health.heart_rate_bpm.is_ordered()
            && self.breeding.min_age <= self.breeding.max_age
    }
}
