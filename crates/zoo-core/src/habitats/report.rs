//! Habitat occupancy report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{find_animal, HabitatRegistry};
use crate::models::{Animal, Occupancy};

/// Occupancy summary across every habitat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitatReport {
    pub total_habitats: usize,
    /// Sum of occupant counts over all habitats
    pub total_animals_assigned: usize,
    /// Per-habitat summaries keyed by habitat key
    pub habitats: BTreeMap<String, HabitatSummary>,
}

/// One habitat's occupancy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitatSummary {
    pub name: String,
    pub capacity: usize,
    pub current_count: usize,
    pub available_space: usize,
    pub occupancy: Occupancy,
    /// Occupants found in the roster; unknown IDs are counted but not listed
    pub animals: Vec<OccupantEntry>,
}

/// Display record for an occupant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OccupantEntry {
    pub id: String,
    pub name: String,
    pub species: String,
}

impl HabitatReport {
    /// Build the report, resolving occupant IDs against `animals`.
    pub fn generate(registry: &HabitatRegistry, animals: &[Animal]) -> Self {
        let habitats: BTreeMap<String, HabitatSummary> = registry
            .iter()
            .map(|(key, habitat)| {
                let occupants = habitat
                    .current_animals
                    .iter()
                    .filter_map(|id| find_animal(animals, id))
                    .map(|a| OccupantEntry {
                        id: a.animal_id.clone(),
                        name: a.name.clone(),
                        species: a.species.clone(),
                    })
                    .collect();

                let summary = HabitatSummary {
                    name: habitat.name.clone(),
                    capacity: habitat.capacity,
                    current_count: habitat.occupant_count(),
                    available_space: habitat.available_space(),
                    occupancy: habitat.occupancy(),
                    animals: occupants,
                };
                (key.to_string(), summary)
            })
            .collect();

        Self {
            total_habitats: habitats.len(),
            total_animals_assigned: habitats.values().map(|h| h.current_count).sum(),
            habitats,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpeciesCatalog;

    #[test]
    fn test_empty_registry_report() {
        let report = HabitatRegistry::new().report(&[]);
        assert_eq!(report.total_habitats, 0);
        assert_eq!(report.total_animals_assigned, 0);
        assert!(report.habitats.is_empty());
    }

    #[test]
    fn test_report_counts_and_resolves_occupants() {
        let catalog = SpeciesCatalog::shared();
        let zebra =
            Animal::new("Z1".into(), "Marty".into(), "Zebra".into(), 4, catalog).unwrap();
        let giraffe =
            Animal::new("G1".into(), "Melman".into(), "Giraffe".into(), 6, catalog).unwrap();

        let mut registry = HabitatRegistry::with_default_habitats();
        registry.assign(&zebra, "savannah", None).unwrap();
        registry.assign(&giraffe, "savannah", None).unwrap();

        // Only the zebra is in the roster handed to the report.
        let report = registry.report(std::slice::from_ref(&zebra));

        assert_eq!(report.total_habitats, 4);
        assert_eq!(report.total_animals_assigned, 2);

        let savannah = &report.habitats["savannah"];
        assert_eq!(savannah.current_count, 2);
        assert_eq!(savannah.available_space, 4);
        assert_eq!(savannah.occupancy, Occupancy::HasSpace);
        assert_eq!(
            savannah.animals,
            vec![OccupantEntry {
                id: "Z1".into(),
                name: "Marty".into(),
                species: "Zebra".into(),
            }]
        );
        assert_eq!(report.habitats["arctic"].available_space, 3);
    }

    #[test]
    fn test_report_json() {
        let report = HabitatRegistry::with_default_habitats().report(&[]);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"total_habitats\": 4"));
        assert!(json.contains("Savannah Plains"));
    }
}
