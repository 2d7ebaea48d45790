//! Breeding program roster.

use serde::{Deserialize, Serialize};

use super::escape_csv;
use crate::catalog::SpeciesCatalog;
use crate::models::Animal;
use crate::rules::{BreedingEligibility, BreedingVerdict};

/// Breeding verdicts for a whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreedingRoster {
    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
    pub entries: Vec<RosterEntry>,
    /// Number of entries with an eligible verdict
    pub eligible_count: usize,
}

/// One animal's line in the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterEntry {
    pub animal_id: String,
    pub name: String,
    pub species: String,
    pub age: u32,
    pub verdict: BreedingVerdict,
}

impl BreedingRoster {
    pub fn generate(animals: &[Animal], catalog: &SpeciesCatalog) -> Self {
        let eligibility = BreedingEligibility::new(catalog);

        let entries: Vec<RosterEntry> = animals
            .iter()
            .map(|animal| RosterEntry {
                animal_id: animal.animal_id.clone(),
                name: animal.name.clone(),
                species: animal.species.clone(),
                age: animal.age,
                verdict: eligibility.evaluate(animal),
            })
            .collect();

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            eligible_count: entries.iter().filter(|e| e.verdict.eligible).count(),
            entries,
        }
    }

    /// Entries with an eligible verdict.
    pub fn eligible(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter().filter(|e| e.verdict.eligible)
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        csv.push_str("animal_id,name,species,age,eligible,reason\n");

        for entry in &self.entries {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                escape_csv(&entry.animal_id),
                escape_csv(&entry.name),
                escape_csv(&entry.species),
                entry.age,
                entry.verdict.eligible,
                escape_csv(&entry.verdict.reason),
            ));
        }

        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthStatus;

    fn animals() -> Vec<Animal> {
        let catalog = SpeciesCatalog::shared();
        let mut adult =
            Animal::new("L1".into(), "Nala".into(), "Lion".into(), 6, catalog).unwrap();
        adult.health_status = HealthStatus::Healthy;

        let mut cub = Animal::new("L2".into(), "Kiara".into(), "Lion".into(), 1, catalog).unwrap();
        cub.health_status = HealthStatus::Healthy;

        let unchecked =
            Animal::new("Z1".into(), "Marty".into(), "Zebra".into(), 5, catalog).unwrap();

        vec![adult, cub, unchecked]
    }

    #[test]
    fn test_roster_counts_eligible() {
        let roster = BreedingRoster::generate(&animals(), SpeciesCatalog::shared());

        assert_eq!(roster.entries.len(), 3);
        assert_eq!(roster.eligible_count, 1);
        let eligible: Vec<&str> = roster.eligible().map(|e| e.animal_id.as_str()).collect();
        assert_eq!(eligible, vec!["L1"]);
        assert_eq!(
            roster.entries[2].verdict.reason,
            "Not eligible due to health status: unknown"
        );
    }

    #[test]
    fn test_roster_csv() {
        let roster = BreedingRoster::generate(&animals(), SpeciesCatalog::shared());
        let csv = roster.to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4); // Header + 3 animals
        assert_eq!(lines[0], "animal_id,name,species,age,eligible,reason");
        assert!(lines[1].starts_with("L1,Nala,Lion,6,true,"));
        assert!(lines[2].contains("Too young for breeding program. Minimum age: 3 years"));
    }

    #[test]
    fn test_roster_json() {
        let roster = BreedingRoster::generate(&animals(), SpeciesCatalog::shared());
        let json = roster.to_json().unwrap();
        assert!(json.contains("\"eligible_count\": 1"));
    }
}
