//! Zoo Core Library
//!
//! Rule engine for a zoo's animal collection: species-aware health
//! classification, cohabitation compatibility, breeding eligibility and
//! capacity-bounded habitat assignment.
//!
//! # Architecture
//!
//! ```text
//!   Keeper input ──► Animal::new (validation against SpeciesCatalog)
//!                          │
//!                          ▼
//!                    Zoo (animals + habitats) ◄──► AnimalStore (JSON file)
//!                          │
//!        ┌─────────────────┼──────────────────┬──────────────────┐
//!        ▼                 ▼                  ▼                  ▼
//!  HealthEvaluator   BreedingEligibility  compatibility     HabitatRegistry
//!        │                 │                  └────────┬─────────┘
//!        ▼                 ▼                           ▼
//!  DailyFeedingReport  BreedingRoster            HabitatReport
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Animal, HealthObservation, Habitat, SpeciesBaseline, etc.)
//! - [`catalog`]: Species reference data and generic fallback baselines
//! - [`rules`]: Health, compatibility, breeding and feeding rules
//! - [`habitats`]: Habitat registry and occupancy report
//! - [`store`]: JSON-file persistence
//! - [`export`]: Feeding and breeding reports
//! - [`config`]: Layered configuration

pub mod catalog;
pub mod config;
pub mod export;
pub mod habitats;
pub mod models;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use catalog::SpeciesCatalog;
pub use config::{ConfigError, ZooConfig};
pub use export::{BreedingRoster, DailyFeedingReport};
pub use habitats::{HabitatError, HabitatRegistry, HabitatReport};
pub use models::{
    Animal, Diet, FeedingDetails, Habitat, HealthObservation, HealthStatus, SpeciesBaseline,
    ValidationError,
};
pub use rules::{
    are_compatible, BreedingEligibility, BreedingVerdict, HealthAssessment, HealthEvaluator,
};
pub use store::{AnimalStore, StoreError};

use thiserror::Error;
use tracing::{info, warn};

use habitats::find_animal;
use models::ensure_unique_id;

/// Accepted genetic diversity ratings.
pub const GENETIC_DIVERSITY_LEVELS: &[&str] = &["low", "medium", "high", "unknown"];

#[derive(Debug, Error)]
pub enum ZooError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Habitat(#[from] HabitatError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Animal with ID {0} not found.")]
    AnimalNotFound(String),

    #[error("Animal {animal_id} is already assigned to habitat '{habitat}'")]
    AlreadyAssigned { animal_id: String, habitat: String },

    #[error("Habitat '{habitat}' is not designed for {species}")]
    SpeciesNotAccepted { species: String, habitat: String },

    #[error("Invalid genetic diversity rating: '{0}'")]
    InvalidGeneticDiversity(String),
}

pub type ZooResult<T> = Result<T, ZooError>;

/// The animal collection and habitats of one zoo.
///
/// Every operation either succeeds completely or leaves the state unchanged.
pub struct Zoo<'c> {
    catalog: &'c SpeciesCatalog,
    config: ZooConfig,
    store: AnimalStore,
    animals: Vec<Animal>,
    habitats: HabitatRegistry,
}

impl<'c> Zoo<'c> {
    /// Empty zoo with the standard habitats.
    pub fn new(catalog: &'c SpeciesCatalog, config: ZooConfig) -> Self {
        Self {
            catalog,
            store: AnimalStore::new(&config.data_file),
            config,
            animals: Vec::new(),
            habitats: HabitatRegistry::with_default_habitats(),
        }
    }

    /// Zoo with the animals stored in the configured data file.
    ///
    /// A missing file opens an empty zoo. An unreadable or malformed file is
    /// an error, so a later `save` cannot overwrite data that failed to load.
    pub fn open(catalog: &'c SpeciesCatalog, config: ZooConfig) -> ZooResult<Self> {
        let mut zoo = Self::new(catalog, config);
        zoo.animals = zoo.store.load().map_err(|error| {
            warn!(%error, "could not load animals");
            error
        })?;
        Ok(zoo)
    }

    /// Write the collection to the data file.
    pub fn save(&self) -> ZooResult<String> {
        Ok(self.store.save(&self.animals)?)
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        self.catalog
    }

    pub fn config(&self) -> &ZooConfig {
        &self.config
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn animal(&self, animal_id: &str) -> Option<&Animal> {
        find_animal(&self.animals, animal_id)
    }

    pub fn habitats(&self) -> &HabitatRegistry {
        &self.habitats
    }

    /// Add or replace a habitat.
    pub fn add_habitat(&mut self, key: &str, habitat: Habitat) -> ZooResult<()> {
        Ok(self.habitats.insert(key.to_string(), habitat)?)
    }

    // =========================================================================
    // Animals
    // =========================================================================

    /// Validate and register a new animal. Returns a success message.
    pub fn add_animal(
        &mut self,
        animal_id: &str,
        name: &str,
        species: &str,
        age: i64,
    ) -> ZooResult<String> {
        let animal_id = animal_id.trim();
        let name = name.trim();
        let species = species.trim();

        let animal = if self.config.allow_unknown_species {
            Animal::new_permissive(animal_id.into(), name.into(), species.into(), age, self.catalog)?
        } else {
            Animal::new(animal_id.into(), name.into(), species.into(), age, self.catalog)?
        };
        ensure_unique_id(animal_id, &self.animals)?;

        info!(animal_id = %animal.animal_id, species = %animal.species, "registered animal");
        let message = format!(
            "Successfully added {} the {} to the system!",
            animal.name, animal.species
        );
        self.animals.push(animal);
        Ok(message)
    }

    /// Record a health check and refresh the stored health status.
    pub fn record_health_check(
        &mut self,
        animal_id: &str,
        observation: HealthObservation,
    ) -> ZooResult<HealthAssessment> {
        let index = self.index_of(animal_id)?;

        let mut updated = self.animals[index].with_health_check(observation);
        let assessment = HealthEvaluator::new(self.catalog).evaluate(&updated);
        updated.health_status = assessment.status;
        self.animals[index] = updated;

        info!(animal_id = %animal_id, status = %assessment.status, "recorded health check");
        Ok(assessment)
    }

    /// Record a feeding. Returns a success message.
    pub fn record_feeding(&mut self, animal_id: &str, details: FeedingDetails) -> ZooResult<String> {
        let index = self.index_of(animal_id)?;

        let updated = self.animals[index].with_feeding(details);
        let message = format!("Feeding recorded for {}", updated.name);
        self.animals[index] = updated;

        info!(animal_id = %animal_id, "recorded feeding");
        Ok(message)
    }

    /// Set the genetic diversity rating ("low", "medium", "high" or "unknown").
    pub fn set_genetic_diversity(&mut self, animal_id: &str, rating: &str) -> ZooResult<()> {
        let rating = rating.trim().to_lowercase();
        if !GENETIC_DIVERSITY_LEVELS.contains(&rating.as_str()) {
            return Err(ZooError::InvalidGeneticDiversity(rating));
        }
        let index = self.index_of(animal_id)?;
        self.animals[index].genetic_diversity = rating;
        Ok(())
    }

    /// Evaluate health from the latest record without changing anything.
    pub fn check_health(&self, animal_id: &str) -> ZooResult<HealthAssessment> {
        let animal = self.require(animal_id)?;
        Ok(HealthEvaluator::new(self.catalog).evaluate(animal))
    }

    pub fn check_breeding(&self, animal_id: &str) -> ZooResult<BreedingVerdict> {
        let animal = self.require(animal_id)?;
        Ok(BreedingEligibility::new(self.catalog).evaluate(animal))
    }

    pub fn breeding_roster(&self) -> BreedingRoster {
        BreedingRoster::generate(&self.animals, self.catalog)
    }

    pub fn feeding_report(&self) -> DailyFeedingReport {
        DailyFeedingReport::generate(&self.animals)
    }

    // =========================================================================
    // Habitats
    // =========================================================================

    /// Animals not housed in any habitat.
    pub fn unassigned_animals(&self) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|a| self.habitats.locate(&a.animal_id).is_none())
            .collect()
    }

    /// Assign an animal to a habitat. Returns a success message.
    ///
    /// Unlike [`HabitatRegistry::assign`], an animal may only live in one
    /// habitat at a time.
    pub fn assign_to_habitat(&mut self, animal_id: &str, key: &str) -> ZooResult<String> {
        let animal = find_animal(&self.animals, animal_id)
            .ok_or_else(|| ZooError::AnimalNotFound(animal_id.to_string()))?;

        let habitat = self
            .habitats
            .get(key)
            .ok_or_else(|| HabitatError::NotFound(key.to_string()))?;

        if self.config.enforce_habitat_species && !habitat.accepts_species(&animal.species) {
            return Err(ZooError::SpeciesNotAccepted {
                species: animal.species.clone(),
                habitat: key.to_string(),
            });
        }

        if let Some(current) = self.habitats.locate(animal_id) {
            return Err(ZooError::AlreadyAssigned {
                animal_id: animal_id.to_string(),
                habitat: current.to_string(),
            });
        }

        Ok(self.habitats.assign(animal, key, Some(&self.animals))?)
    }

    /// Remove an animal from a habitat. Returns a success message.
    pub fn remove_from_habitat(&mut self, animal_id: &str, key: &str) -> ZooResult<String> {
        Ok(self.habitats.remove(animal_id, key)?)
    }

    pub fn habitat_report(&self) -> HabitatReport {
        self.habitats.report(&self.animals)
    }

    fn index_of(&self, animal_id: &str) -> ZooResult<usize> {
        self.animals
            .iter()
            .position(|a| a.animal_id == animal_id)
            .ok_or_else(|| ZooError::AnimalNotFound(animal_id.to_string()))
    }

    fn require(&self, animal_id: &str) -> ZooResult<&Animal> {
        self.animal(animal_id)
            .ok_or_else(|| ZooError::AnimalNotFound(animal_id.to_string()))
    }
}
