//! Habitat models.

use serde::{Deserialize, Serialize};

/// Occupancy state of a habitat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    /// At least one free place
    HasSpace,
    /// Occupant count has reached capacity
    Full,
}

/// An enclosure that animals can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habitat {
    /// Display name (e.g., "Savannah Plains")
    pub name: String,
    /// Maximum number of occupants, always > 0
    pub capacity: usize,
    /// IDs of the animals currently housed here
    #[serde(default)]
    pub current_animals: Vec<String>,
    /// Informational features (e.g., "watering_hole")
    #[serde(default)]
    pub features: Vec<String>,
    /// Species this habitat is designed for
    #[serde(default)]
    pub compatible_species: Vec<String>,
}

impl Habitat {
    /// Create an empty habitat.
    pub fn new(name: String, capacity: usize) -> Self {
        Self {
            name,
            capacity,
            current_animals: Vec::new(),
            features: Vec::new(),
            compatible_species: Vec::new(),
        }
    }

    pub fn occupant_count(&self) -> usize {
        self.current_animals.len()
    }

    pub fn available_space(&self) -> usize {
        self.capacity.saturating_sub(self.current_animals.len())
    }

    pub fn is_full(&self) -> bool {
        self.current_animals.len() >= self.capacity
    }

    pub fn occupancy(&self) -> Occupancy {
        if self.is_full() {
            Occupancy::Full
        } else {
            Occupancy::HasSpace
        }
    }

    pub fn has_occupant(&self, animal_id: &str) -> bool {
        self.current_animals.iter().any(|id| id == animal_id)
    }

    /// Check if this habitat is designed for a given species.
    pub fn accepts_species(&self, species: &str) -> bool {
        if self.compatible_species.is_empty() {
            return true; // No restriction means all species
        }
        let species_lower = species.to_lowercase();
        self.compatible_species
            .iter()
            .any(|s| s.to_lowercase() == species_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_transitions() {
        let mut habitat = Habitat::new("Pen".into(), 2);
        assert_eq!(habitat.occupancy(), Occupancy::HasSpace);
        assert_eq!(habitat.available_space(), 2);

        habitat.current_animals.push("A1".into());
        habitat.current_animals.push("A2".into());
        assert_eq!(habitat.occupancy(), Occupancy::Full);
        assert_eq!(habitat.available_space(), 0);
        assert!(habitat.has_occupant("A2"));
        assert!(!habitat.has_occupant("A3"));
    }

    #[test]
    fn test_accepts_species() {
        let mut habitat = Habitat::new("Savannah Plains".into(), 6);
        assert!(habitat.accepts_species("anything"));

        habitat.compatible_species = vec!["Lion".into(), "Zebra".into()];
        assert!(habitat.accepts_species("Lion"));
        assert!(habitat.accepts_species("zebra"));
        assert!(!habitat.accepts_species("Wolf"));
    }
}
