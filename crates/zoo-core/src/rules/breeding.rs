//! Breeding eligibility.
//!
//! Checks run in order and the first failure wins: minimum age, maximum age,
//! stored health status, genetic diversity.

use serde::{Deserialize, Serialize};

use crate::catalog::SpeciesCatalog;
use crate::models::{Animal, BreedingRange, HealthStatus};

/// Eligibility verdict with a human-readable reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreedingVerdict {
    pub eligible: bool,
    pub reason: String,
}

impl BreedingVerdict {
    fn eligible() -> Self {
        Self {
            eligible: true,
            reason: "Healthy and eligible for breeding program".to_string(),
        }
    }

    fn ineligible(reason: String) -> Self {
        Self {
            eligible: false,
            reason,
        }
    }
}

/// Breeding eligibility checker.
pub struct BreedingEligibility<'a> {
    catalog: &'a SpeciesCatalog,
}

impl<'a> BreedingEligibility<'a> {
    pub fn new(catalog: &'a SpeciesCatalog) -> Self {
        Self { catalog }
    }

    /// Evaluate one animal.
    ///
    /// Reads the stored `health_status` as-is; it is not recomputed from the
    /// health records.
    pub fn evaluate(&self, animal: &Animal) -> BreedingVerdict {
        let range = self.catalog.resolve_breeding_range(&animal.species);

        if let Err(reason) = check_age(animal.age, &range) {
            return BreedingVerdict::ineligible(reason);
        }

        if animal.health_status != HealthStatus::Healthy {
            return BreedingVerdict::ineligible(format!(
                "Not eligible due to health status: {}",
                animal.health_status
            ));
        }

        if animal.genetic_diversity == "low" {
            return BreedingVerdict::ineligible("Not eligible: low genetic diversity".to_string());
        }

        BreedingVerdict::eligible()
    }
}

/// Check an age against a breeding window.
pub fn check_age(age: u32, range: &BreedingRange) -> Result<(), String> {
    if age < range.min_age {
        return Err(format!(
            "Too young for breeding program. Minimum age: {} years",
            range.min_age
        ));
    }
    if age > range.max_age {
        return Err(format!(
            "Too old for breeding program. Maximum age: {} years",
            range.max_age
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(species: &str, age: i64) -> Animal {
        Animal::new_permissive(
            format!("{}-1", species),
            "Test".into(),
            species.into(),
            age,
            SpeciesCatalog::shared(),
        )
        .unwrap()
    }

    fn healthy(species: &str, age: i64) -> Animal {
        let mut animal = animal(species, age);
        animal.health_status = HealthStatus::Healthy;
        animal
    }

    fn evaluate(animal: &Animal) -> BreedingVerdict {
        BreedingEligibility::new(SpeciesCatalog::shared()).evaluate(animal)
    }

    #[test]
    fn test_too_young() {
        // Lion minimum breeding age is 3
        let verdict = evaluate(&healthy("Lion", 2));
        assert!(!verdict.eligible);
        assert!(verdict.reason.contains("Too young"));
        assert!(verdict.reason.contains('3'));
    }

    #[test]
    fn test_too_old() {
        // Lion maximum breeding age is 15
        let verdict = evaluate(&healthy("Lion", 16));
        assert!(!verdict.eligible);
        assert!(verdict.reason.contains("Too old"));
        assert!(verdict.reason.contains("15"));
    }

    #[test]
    fn test_eligible_within_range() {
        let verdict = evaluate(&healthy("Lion", 5));
        assert!(verdict.eligible);
        assert_eq!(verdict.reason, "Healthy and eligible for breeding program");

        // Boundaries are inclusive
        assert!(evaluate(&healthy("Lion", 3)).eligible);
        assert!(evaluate(&healthy("Lion", 15)).eligible);
    }

    #[test]
    fn test_health_status_must_be_healthy() {
        let verdict = evaluate(&animal("Lion", 5));
        assert!(!verdict.eligible);
        assert_eq!(verdict.reason, "Not eligible due to health status: unknown");

        let mut sick = healthy("Lion", 5);
        sick.health_status = HealthStatus::NeedsAttention;
        assert_eq!(
            evaluate(&sick).reason,
            "Not eligible due to health status: needs attention"
        );
    }

    #[test]
    fn test_low_genetic_diversity() {
        let mut lion = healthy("Lion", 5);
        lion.genetic_diversity = "low".into();
        let verdict = evaluate(&lion);
        assert!(!verdict.eligible);
        assert!(verdict.reason.contains("low genetic diversity"));

        lion.genetic_diversity = "high".into();
        assert!(evaluate(&lion).eligible);
    }

    #[test]
    fn test_age_checked_before_health() {
        // Unknown health, but the age failure is reported first
        let verdict = evaluate(&animal("Elephant", 5));
        assert!(verdict.reason.contains("Minimum age: 10"));
    }

    #[test]
    fn test_unknown_species_uses_default_range() {
        assert!(evaluate(&healthy("Dodo", 2)).reason.contains("Minimum age: 3"));
        assert!(evaluate(&healthy("Dodo", 16)).reason.contains("Maximum age: 15"));
        assert!(evaluate(&healthy("Dodo", 10)).eligible);
    }
}
