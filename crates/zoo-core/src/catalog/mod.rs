//! Species reference catalog.
//!
//! Read-only lookup from species name to baseline biometrics and behaviour.
//! Species that are not in the catalog resolve to a generic baseline picked
//! by keyword matching on the name (birds, reptiles, otherwise a medium-sized
//! mammal estimate).

mod builtin;

use std::borrow::Cow;
use std::sync::OnceLock;

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::{BreedingRange, HealthBaseline, SpeciesBaseline};

/// Name fragments that identify a bird.
pub const BIRD_KEYWORDS: &[&str] = &["bird", "eagle", "owl", "parrot", "penguin"];

/// Name fragments that identify a reptile.
pub const REPTILE_KEYWORDS: &[&str] = &["snake", "lizard", "turtle", "reptile", "crocodile"];

/// Note attached to the fallback mammal baseline.
pub const ESTIMATED_MAMMAL_NOTE: &str = "estimated baseline for unknown mammal species";

/// Minimum similarity for a species name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.80;

/// Coarse taxonomic group used for species without catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericKind {
    LargeMammal,
    MediumMammal,
    SmallMammal,
    Bird,
    Reptile,
}

impl GenericKind {
    /// Classify a species name by case-insensitive keyword match.
    pub fn classify(species_name: &str) -> Self {
        let species_lower = species_name.to_lowercase();
        if BIRD_KEYWORDS.iter().any(|k| species_lower.contains(k)) {
            GenericKind::Bird
        } else if REPTILE_KEYWORDS.iter().any(|k| species_lower.contains(k)) {
            GenericKind::Reptile
        } else {
            GenericKind::MediumMammal
        }
    }
}

/// Health baselines for each generic group.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericBaselines {
    pub large_mammal: HealthBaseline,
    pub medium_mammal: HealthBaseline,
    pub small_mammal: HealthBaseline,
    pub bird: HealthBaseline,
    pub reptile: HealthBaseline,
}

impl GenericBaselines {
    pub fn get(&self, kind: GenericKind) -> &HealthBaseline {
        match kind {
            GenericKind::LargeMammal => &self.large_mammal,
            GenericKind::MediumMammal => &self.medium_mammal,
            GenericKind::SmallMammal => &self.small_mammal,
            GenericKind::Bird => &self.bird,
            GenericKind::Reptile => &self.reptile,
        }
    }
}

/// Immutable species catalog.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    species: Vec<SpeciesBaseline>,
    generic: GenericBaselines,
}

impl SpeciesCatalog {
    /// Create a catalog from explicit tables.
    pub fn new(species: Vec<SpeciesBaseline>, generic: GenericBaselines) -> Self {
        Self { species, generic }
    }

    /// The built-in catalog of eleven species.
    pub fn builtin() -> Self {
        Self::new(builtin::species(), builtin::generic_baselines())
    }

    /// Process-wide built-in catalog, initialised on first use.
    pub fn shared() -> &'static SpeciesCatalog {
        static CATALOG: OnceLock<SpeciesCatalog> = OnceLock::new();
        CATALOG.get_or_init(SpeciesCatalog::builtin)
    }

    /// Exact-match lookup.
    pub fn lookup_baseline(&self, species_name: &str) -> Option<&SpeciesBaseline> {
        self.species.iter().find(|s| s.name == species_name)
    }

    /// Health baseline for a species, falling back to a generic baseline.
    ///
    /// Known species borrow their catalog entry. The mammal fallback is owned
    /// because it carries an estimate note.
    pub fn resolve_health_baseline(&self, species_name: &str) -> Cow<'_, HealthBaseline> {
        if let Some(baseline) = self.lookup_baseline(species_name) {
            return Cow::Borrowed(&baseline.health);
        }

        match GenericKind::classify(species_name) {
            GenericKind::MediumMammal => {
                let mut estimate = self.generic.medium_mammal.clone();
                estimate.note = Some(ESTIMATED_MAMMAL_NOTE.to_string());
                Cow::Owned(estimate)
            }
            kind => Cow::Borrowed(self.generic.get(kind)),
        }
    }

    /// Breeding window for a species, or [`BreedingRange::DEFAULT`] when unknown.
    pub fn resolve_breeding_range(&self, species_name: &str) -> BreedingRange {
        self.lookup_baseline(species_name)
            .map(|s| s.breeding)
            .unwrap_or_default()
    }

    /// All species in catalog order.
    pub fn species(&self) -> &[SpeciesBaseline] {
        &self.species
    }

    pub fn species_names(&self) -> impl Iterator<Item = &str> {
        self.species.iter().map(|s| s.name.as_str())
    }

    pub fn generic_baselines(&self) -> &GenericBaselines {
        &self.generic
    }

    /// Closest catalog species name for a misspelt or mis-cased input.
    pub fn suggest(&self, species_name: &str) -> Option<&str> {
        let query = species_name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.species
            .iter()
            .map(|s| (s.name.as_str(), fuzzy_match(&query, &s.name.to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name)
    }
}

impl Default for SpeciesCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Combined Jaro-Winkler / Levenshtein similarity.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_eleven_consistent_species() {
        let catalog = SpeciesCatalog::builtin();
        assert_eq!(catalog.species().len(), 11);
        assert!(catalog.species().iter().all(|s| s.is_consistent()));

        let names: Vec<&str> = catalog.species_names().collect();
        assert_eq!(names.first(), Some(&"Lion"));
        assert_eq!(names.last(), Some(&"Koala"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = SpeciesCatalog::shared();
        assert_eq!(catalog.lookup_baseline("Lion").unwrap().code, "LION001");
        assert!(catalog.lookup_baseline("lion").is_none());
        assert!(catalog.lookup_baseline("Penguin").is_none());
    }

    #[test]
    fn test_known_species_uses_exact_baseline() {
        let catalog = SpeciesCatalog::shared();
        for species in catalog.species() {
            let resolved = catalog.resolve_health_baseline(&species.name);
            assert_eq!(*resolved, species.health, "{}", species.name);
            assert!(!resolved.is_estimate());
        }
    }

    #[test]
    fn test_keyword_fallbacks() {
        let catalog = SpeciesCatalog::shared();
        let generic = catalog.generic_baselines();

        assert_eq!(*catalog.resolve_health_baseline("Bald Eagle"), generic.bird);
        assert_eq!(*catalog.resolve_health_baseline("EMPEROR PENGUIN"), generic.bird);
        assert_eq!(*catalog.resolve_health_baseline("Nile Crocodile"), generic.reptile);
        assert_eq!(*catalog.resolve_health_baseline("box turtle"), generic.reptile);
    }

    #[test]
    fn test_unknown_mammal_estimate() {
        let catalog = SpeciesCatalog::shared();
        let baseline = catalog.resolve_health_baseline("Capybara");

        assert_eq!(baseline.weight_kg, catalog.generic_baselines().medium_mammal.weight_kg);
        assert_eq!(baseline.note.as_deref(), Some(ESTIMATED_MAMMAL_NOTE));
    }

    #[test]
    fn test_breeding_range_defaults() {
        let catalog = SpeciesCatalog::shared();

        let lion = catalog.resolve_breeding_range("Lion");
        assert_eq!((lion.min_age, lion.max_age, lion.gestation_days), (3, 15, 110));

        assert_eq!(catalog.resolve_breeding_range("Dodo"), BreedingRange::DEFAULT);
    }

    #[test]
    fn test_suggest() {
        let catalog = SpeciesCatalog::shared();
        assert_eq!(catalog.suggest("lion"), Some("Lion"));
        assert_eq!(catalog.suggest("Girafe"), Some("Giraffe"));
        assert_eq!(catalog.suggest("Hippopotamos"), Some("Hippopotamus"));
        assert_eq!(catalog.suggest("Dragon"), None);
        assert_eq!(catalog.suggest("   "), None);
    }
}
