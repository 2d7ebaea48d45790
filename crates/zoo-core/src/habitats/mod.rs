//! Habitat registry: assignment and removal under capacity and
//! compatibility constraints.
//!
//! Failed operations leave the registry untouched. Cross-habitat exclusivity
//! is not enforced here; callers that need it check [`HabitatRegistry::locate`]
//! before assigning.

mod report;

pub use report::*;

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::info;

use crate::models::{Animal, Habitat};
use crate::rules::{first_conflict, Incompatibility};

/// Habitat registry errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HabitatError {
    #[error("Habitat '{0}' does not exist.")]
    NotFound(String),

    #[error("Habitat '{0}' is at full capacity.")]
    Full(String),

    #[error("Not compatible with {occupant}: {reason}")]
    Incompatible {
        occupant: String,
        reason: Incompatibility,
    },

    #[error("Animal {animal_id} is already in {habitat}")]
    AlreadyOccupant { animal_id: String, habitat: String },

    #[error("Animal {animal_id} not found in {habitat}")]
    NotAnOccupant { animal_id: String, habitat: String },

    #[error("Invalid habitat '{key}': {reason}")]
    InvalidHabitat { key: String, reason: String },
}

pub type HabitatResult<T> = Result<T, HabitatError>;

/// Habitats keyed by a short identifier (e.g., "savannah").
#[derive(Debug, Clone, Default)]
pub struct HabitatRegistry {
    habitats: BTreeMap<String, Habitat>,
}

impl HabitatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four standard enclosures, all empty.
    pub fn with_default_habitats() -> Self {
        let mut registry = Self::new();
        for (key, habitat) in default_habitats() {
            registry.habitats.insert(key, habitat);
        }
        registry
    }

    /// Add or replace a habitat.
    ///
    /// Capacity must be positive and the initial occupants must fit.
    pub fn insert(&mut self, key: String, habitat: Habitat) -> HabitatResult<()> {
        if habitat.capacity == 0 {
            return Err(HabitatError::InvalidHabitat {
                key,
                reason: "capacity must be greater than zero".into(),
            });
        }
        if habitat.occupant_count() > habitat.capacity {
            return Err(HabitatError::InvalidHabitat {
                key,
                reason: format!(
                    "{} occupants exceed capacity {}",
                    habitat.occupant_count(),
                    habitat.capacity
                ),
            });
        }
        self.habitats.insert(key, habitat);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Habitat> {
        self.habitats.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.habitats.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Habitat)> {
        self.habitats.iter().map(|(k, h)| (k.as_str(), h))
    }

    pub fn len(&self) -> usize {
        self.habitats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habitats.is_empty()
    }

    /// Keys of habitats designed for a species.
    pub fn habitats_accepting<'a>(&'a self, species: &'a str) -> impl Iterator<Item = &'a str> {
        self.habitats
            .iter()
            .filter(move |(_, h)| h.accepts_species(species))
            .map(|(k, _)| k.as_str())
    }

    /// Assign an animal to a habitat.
    ///
    /// When a `roster` is given, the animal must be compatible with every
    /// current occupant found in it; occupants missing from the roster are
    /// skipped. Returns a success message.
    pub fn assign(
        &mut self,
        animal: &Animal,
        key: &str,
        roster: Option<&[Animal]>,
    ) -> HabitatResult<String> {
        let habitat = self
            .habitats
            .get_mut(key)
            .ok_or_else(|| HabitatError::NotFound(key.to_string()))?;

        if habitat.is_full() {
            return Err(HabitatError::Full(key.to_string()));
        }

        if habitat.has_occupant(&animal.animal_id) {
            return Err(HabitatError::AlreadyOccupant {
                animal_id: animal.animal_id.clone(),
                habitat: habitat.name.clone(),
            });
        }

        if let Some(roster) = roster {
            for occupant_id in &habitat.current_animals {
                let Some(occupant) = find_animal(roster, occupant_id) else {
                    continue;
                };
                if let Some(reason) = first_conflict(animal, occupant) {
                    return Err(HabitatError::Incompatible {
                        occupant: occupant.name.clone(),
                        reason,
                    });
                }
            }
        }

        habitat.current_animals.push(animal.animal_id.clone());
        info!(
            animal_id = %animal.animal_id,
            habitat = %key,
            occupants = habitat.occupant_count(),
            capacity = habitat.capacity,
            "assigned animal to habitat"
        );
        Ok(format!("Successfully assigned {} to habitat", animal.name))
    }

    /// Remove an animal from a habitat. Returns a success message.
    pub fn remove(&mut self, animal_id: &str, key: &str) -> HabitatResult<String> {
        let habitat = self
            .habitats
            .get_mut(key)
            .ok_or_else(|| HabitatError::NotFound(key.to_string()))?;

        let Some(index) = habitat.current_animals.iter().position(|id| id == animal_id) else {
            return Err(HabitatError::NotAnOccupant {
                animal_id: animal_id.to_string(),
                habitat: habitat.name.clone(),
            });
        };

        habitat.current_animals.remove(index);
        info!(animal_id = %animal_id, habitat = %key, "removed animal from habitat");
        Ok(format!("Removed animal {} from {}", animal_id, habitat.name))
    }

    /// Key of the first habitat (in key order) housing this animal.
    pub fn locate(&self, animal_id: &str) -> Option<&str> {
        self.habitats
            .iter()
            .find(|(_, h)| h.has_occupant(animal_id))
            .map(|(k, _)| k.as_str())
    }

    /// Occupancy summary of every habitat.
    pub fn report(&self, animals: &[Animal]) -> HabitatReport {
        HabitatReport::generate(self, animals)
    }
}

/// Find an animal by ID in a roster.
pub fn find_animal<'a>(animals: &'a [Animal], animal_id: &str) -> Option<&'a Animal> {
    animals.iter().find(|a| a.animal_id == animal_id)
}

/// The standard enclosures.
pub fn default_habitats() -> Vec<(String, Habitat)> {
    fn habitat(name: &str, capacity: usize, features: &[&str], species: &[&str]) -> Habitat {
        Habitat {
            name: name.to_string(),
            capacity,
            current_animals: Vec::new(),
            features: features.iter().map(|s| s.to_string()).collect(),
            compatible_species: species.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        (
            "savannah".into(),
            habitat(
                "Savannah Plains",
                6,
                &["grasslands", "watering_hole", "shade_trees"],
                &["Lion", "Elephant", "Zebra", "Giraffe", "Cheetah", "Kangaroo"],
            ),
        ),
        (
            "forest".into(),
            habitat(
                "Forest Enclosure",
                4,
                &["dense_vegetation", "climbing_trees", "stream"],
                &["Wolf", "Tiger", "Bear"],
            ),
        ),
        (
            "aquatic".into(),
            habitat(
                "Aquatic Center",
                3,
                &["deep_pool", "filtration_system", "viewing_glass"],
                &["Hippopotamus"],
            ),
        ),
        (
            "arctic".into(),
            habitat(
                "Arctic Zone",
                3,
                &["cooling_system", "snow_simulation", "ice_pond"],
                &["Penguin"],
            ),
        ),
    ]
}
