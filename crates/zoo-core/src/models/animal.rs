//! Animal models and registration validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::records::{FeedingDetails, FeedingRecord, HealthObservation, HealthRecord, Medication};
use super::species::{Diet, SpeciesBaseline};
use crate::catalog::SpeciesCatalog;

/// Trait value used when a species has no catalog entry.
pub const UNKNOWN: &str = "unknown";

/// Registration validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Animal ID cannot be empty")]
    EmptyId,

    #[error("Animal name cannot be empty")]
    EmptyName,

    #[error("Species cannot be empty")]
    EmptySpecies,

    #[error("Age cannot be zero")]
    ZeroAge,

    #[error("Age cannot be negative")]
    NegativeAge,

    #[error("Age {0} is out of range")]
    AgeOutOfRange(i64),

    #[error("Unknown species: '{species}'{}", did_you_mean(.suggestion))]
    UnknownSpecies {
        species: String,
        suggestion: Option<String>,
    },

    #[error("Duplicate animal ID: {0}")]
    DuplicateId(String),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Overall health classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum HealthStatus {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "needs attention")]
    NeedsAttention,
    #[serde(rename = "critical")]
    Critical,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Unknown => "unknown",
            HealthStatus::Healthy => "healthy",
            HealthStatus::NeedsAttention => "needs attention",
            HealthStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An animal in the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Animal {
    /// Unique ID across the collection
    pub animal_id: String,
    pub name: String,
    /// Species name (catalog key, or free text when unknown species are allowed)
    pub species: String,
    /// Age in years, always >= 1 for validated animals
    pub age: u32,
    #[serde(default)]
    pub diet: Diet,
    #[serde(default = "unknown_trait")]
    pub habitat_type: String,
    #[serde(default = "unknown_trait")]
    pub temperament: String,
    #[serde(default = "unknown_trait")]
    pub social_needs: String,
    /// Last computed health status; refreshed when a health check is committed
    #[serde(default)]
    pub health_status: HealthStatus,
    /// Genetic diversity rating ("low", "medium", "high" or "unknown")
    #[serde(default = "unknown_trait")]
    pub genetic_diversity: String,
    /// Health checks, oldest first
    #[serde(default)]
    pub health_records: Vec<HealthRecord>,
    #[serde(default)]
    pub current_medications: Vec<Medication>,
    /// Feedings, oldest first
    #[serde(default)]
    pub feeding_history: Vec<FeedingRecord>,
}

fn unknown_trait() -> String {
    UNKNOWN.to_string()
}

impl Animal {
    /// Register an animal of a catalogued species.
    ///
    /// Checks run in a fixed order and the first failure is returned: empty ID,
    /// empty name, empty species, zero age, unknown species, negative age.
    pub fn new(
        animal_id: String,
        name: String,
        species: String,
        age: i64,
        catalog: &SpeciesCatalog,
    ) -> ValidationResult<Self> {
        let (age, baseline) = validate(&animal_id, &name, &species, age, catalog, false)?;
        Ok(Self::build(animal_id, name, species, age, baseline))
    }

    /// Register an animal, accepting species missing from the catalog.
    ///
    /// Unknown species get `"unknown"` for every behavioural trait.
    pub fn new_permissive(
        animal_id: String,
        name: String,
        species: String,
        age: i64,
        catalog: &SpeciesCatalog,
    ) -> ValidationResult<Self> {
        let (age, baseline) = validate(&animal_id, &name, &species, age, catalog, true)?;
        Ok(Self::build(animal_id, name, species, age, baseline))
    }

    fn build(
        animal_id: String,
        name: String,
        species: String,
        age: u32,
        baseline: Option<&SpeciesBaseline>,
    ) -> Self {
        let (diet, habitat_type, temperament, social_needs) = match baseline {
            Some(b) => (
                b.diet,
                b.habitat_type.clone(),
                b.temperament.clone(),
                b.social_needs.clone(),
            ),
            None => (Diet::Unknown, unknown_trait(), unknown_trait(), unknown_trait()),
        };

        Self {
            animal_id,
            name,
            species,
            age,
            diet,
            habitat_type,
            temperament,
            social_needs,
            health_status: HealthStatus::Unknown,
            genetic_diversity: unknown_trait(),
            health_records: Vec::new(),
            current_medications: Vec::new(),
            feeding_history: Vec::new(),
        }
    }

    /// Return a copy with a new health record appended. `self` is left untouched.
    pub fn with_health_check(&self, observation: HealthObservation) -> Self {
        let mut updated = self.clone();
        updated.health_records.push(HealthRecord::new(observation));
        updated
    }

    /// Return a copy with a new feeding record appended. `self` is left untouched.
    pub fn with_feeding(&self, details: FeedingDetails) -> Self {
        let mut updated = self.clone();
        updated.feeding_history.push(FeedingRecord::new(details));
        updated
    }

    /// The most recent observation, which is authoritative for health status.
    pub fn latest_observation(&self) -> Option<&HealthObservation> {
        self.health_records.last().map(|r| &r.data)
    }

    /// The most recently observed weight, looking back past records without one.
    pub fn latest_weight_kg(&self) -> Option<f64> {
        self.health_records
            .iter()
            .rev()
            .find_map(|r| r.data.weight_kg)
    }
}

/// Fail if `animal_id` is already used in `animals`.
pub fn ensure_unique_id(animal_id: &str, animals: &[Animal]) -> ValidationResult<()> {
    if animals.iter().any(|a| a.animal_id == animal_id) {
        return Err(ValidationError::DuplicateId(animal_id.to_string()));
    }
    Ok(())
}

fn validate<'c>(
    animal_id: &str,
    name: &str,
    species: &str,
    age: i64,
    catalog: &'c SpeciesCatalog,
    allow_unknown_species: bool,
) -> ValidationResult<(u32, Option<&'c SpeciesBaseline>)> {
    if animal_id.trim().is_empty() {
        return Err(ValidationError::EmptyId);
    }
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if species.trim().is_empty() {
        return Err(ValidationError::EmptySpecies);
    }
    if age == 0 {
        return Err(ValidationError::ZeroAge);
    }

    let baseline = catalog.lookup_baseline(species);
    if baseline.is_none() && !allow_unknown_species {
        return Err(ValidationError::UnknownSpecies {
            species: species.to_string(),
            suggestion: catalog.suggest(species).map(str::to_string),
        });
    }

    if age < 0 {
        return Err(ValidationError::NegativeAge);
    }
    let age = u32::try_from(age).map_err(|_| ValidationError::AgeOutOfRange(age))?;
    Ok((age, baseline))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static SpeciesCatalog {
        SpeciesCatalog::shared()
    }

    fn new_animal(id: &str, name: &str, species: &str, age: i64) -> ValidationResult<Animal> {
        Animal::new(id.into(), name.into(), species.into(), age, catalog())
    }

    #[test]
    fn test_new_animal_copies_species_traits() {
        let lion = new_animal("LION001", "Leo", "Lion", 5).unwrap();
        assert_eq!(lion.diet, Diet::Carnivore);
        assert_eq!(lion.habitat_type, "savannah");
        assert_eq!(lion.temperament, "aggressive");
        assert_eq!(lion.social_needs, "pride");
        assert_eq!(lion.health_status, HealthStatus::Unknown);
        assert_eq!(lion.genetic_diversity, "unknown");
        assert!(lion.health_records.is_empty());
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(new_animal("", "", "", 0), Err(ValidationError::EmptyId));
        assert_eq!(new_animal("  ", "Leo", "Lion", 3), Err(ValidationError::EmptyId));
        assert_eq!(new_animal("A1", " ", "Lion", 3), Err(ValidationError::EmptyName));
        assert_eq!(new_animal("A1", "Leo", "", 3), Err(ValidationError::EmptySpecies));
        assert_eq!(new_animal("A1", "Leo", "Lion", 0), Err(ValidationError::ZeroAge));
        assert_eq!(new_animal("A1", "Leo", "Lion", -2), Err(ValidationError::NegativeAge));

        // Unknown species is reported before a negative age
        assert!(matches!(
            new_animal("A1", "Leo", "Dragon", -2),
            Err(ValidationError::UnknownSpecies { .. })
        ));
    }

    #[test]
    fn test_unknown_species_message_suggests_close_match() {
        let err = new_animal("A1", "Leo", "lion", 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown species: 'lion' (did you mean 'Lion'?)"
        );

        let err = new_animal("A1", "Puff", "Dragon", 3).unwrap_err();
        assert_eq!(err.to_string(), "Unknown species: 'Dragon'");
    }

    #[test]
    fn test_permissive_accepts_unknown_species() {
        let animal =
            Animal::new_permissive("P1".into(), "Pingu".into(), "Penguin".into(), 2, catalog())
                .unwrap();
        assert_eq!(animal.diet, Diet::Unknown);
        assert_eq!(animal.habitat_type, UNKNOWN);
        assert_eq!(animal.temperament, UNKNOWN);
        assert_eq!(animal.social_needs, UNKNOWN);

        // Other checks still apply
        let err = Animal::new_permissive("P1".into(), "Pingu".into(), "Penguin".into(), 0, catalog());
        assert_eq!(err, Err(ValidationError::ZeroAge));
    }

    #[test]
    fn test_age_beyond_u32_rejected() {
        let too_old = i64::from(u32::MAX) + 1;
        assert_eq!(
            new_animal("L1", "Leo", "Lion", too_old).unwrap_err(),
            ValidationError::AgeOutOfRange(too_old)
        );
        assert_eq!(
            new_animal("L1", "Leo", "Lion", i64::from(u32::MAX)).unwrap().age,
            u32::MAX
        );
    }

    #[test]
    fn test_duplicate_id() {
        let animals = vec![new_animal("LION001", "Leo", "Lion", 5).unwrap()];
        assert!(ensure_unique_id("ZEBRA001", &animals).is_ok());
        assert_eq!(
            ensure_unique_id("LION001", &animals),
            Err(ValidationError::DuplicateId("LION001".into()))
        );
    }

    #[test]
    fn test_with_health_check_returns_copy() {
        let lion = new_animal("LION001", "Leo", "Lion", 5).unwrap();
        let updated = lion.with_health_check(HealthObservation::default().with_weight(190.0));

        assert!(lion.health_records.is_empty());
        assert_eq!(updated.health_records.len(), 1);
        assert_eq!(updated.latest_observation().unwrap().weight_kg, Some(190.0));
    }

    #[test]
    fn test_latest_observation_is_last_appended() {
        let lion = new_animal("LION001", "Leo", "Lion", 5)
            .unwrap()
            .with_health_check(HealthObservation::default().with_weight(180.0))
            .with_health_check(HealthObservation::default().with_temperature(38.5));

        let latest = lion.latest_observation().unwrap();
        assert_eq!(latest.weight_kg, None);
        assert_eq!(latest.temperature_c, Some(38.5));

        // Weight falls back to the last record that had one
        assert_eq!(lion.latest_weight_kg(), Some(180.0));
    }

    #[test]
    fn test_with_feeding_appends() {
        let zebra = new_animal("ZEBRA001", "Marty", "Zebra", 4).unwrap();
        let fed = zebra.with_feeding(FeedingDetails {
            time: "06:00".into(),
            amount_kg: 3.0,
            food_type: "vegetation".into(),
            keeper: "Alex".into(),
        });
        assert!(zebra.feeding_history.is_empty());
        assert_eq!(fed.feeding_history.len(), 1);
        assert_eq!(fed.feeding_history[0].details.amount_kg, 3.0);
    }

    #[test]
    fn test_minimal_record_deserializes_with_defaults() {
        let json = r#"{"animal_id": "A1", "name": "Leo", "species": "Lion", "age": 4}"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.diet, Diet::Unknown);
        assert_eq!(animal.habitat_type, "unknown");
        assert_eq!(animal.health_status, HealthStatus::Unknown);
        assert!(animal.feeding_history.is_empty());
    }

    #[test]
    fn test_health_status_serde_names() {
        let json = serde_json::to_string(&HealthStatus::NeedsAttention).unwrap();
        assert_eq!(json, "\"needs attention\"");
        assert_eq!(HealthStatus::Critical.to_string(), "critical");
    }
}
