//! Cohabitation compatibility between two animals.
//!
//! Four predicates, checked in order and failing fast:
//! 1. diet
//! 2. habitat type
//! 3. temperament
//! 4. social needs

use std::fmt;

use tracing::debug;

use crate::models::{Animal, Diet};

/// Social structures of animals that live alone.
pub const SOLITARY_SOCIAL_NEEDS: &[&str] = &["solitary", "territorial"];

/// Social structures of animals that live in groups.
pub const GROUP_SOCIAL_NEEDS: &[&str] = &["group", "pack", "herd", "pride"];

/// The first predicate two animals failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incompatibility {
    Diet { first: Diet, second: Diet },
    HabitatType { first: String, second: String },
    Temperament { first: String, second: String },
    SocialNeeds { first: String, second: String },
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incompatibility::Diet { first, second } => {
                write!(f, "incompatible diets ({} vs {})", first, second)
            }
            Incompatibility::HabitatType { first, second } => {
                write!(f, "incompatible habitats ({} vs {})", first, second)
            }
            Incompatibility::Temperament { first, second } => {
                write!(f, "incompatible temperaments ({} vs {})", first, second)
            }
            Incompatibility::SocialNeeds { first, second } => {
                write!(f, "incompatible social needs ({} vs {})", first, second)
            }
        }
    }
}

/// Only identical diets may share a habitat.
///
/// Carnivore with herbivore is the defining conflict, but any other mismatch
/// (omnivore, unknown) is treated the same way.
pub fn diets_compatible(first: Diet, second: Diet) -> bool {
    first == second
}

pub fn habitat_types_compatible(first: &str, second: &str) -> bool {
    first == second
}

pub fn temperaments_compatible(first: &str, second: &str) -> bool {
    first == second
}

/// Solitary and group-living animals cannot share. Anything else can,
/// including two solitary animals or structures outside both sets.
pub fn social_needs_compatible(first: &str, second: &str) -> bool {
    let solitary = |s: &str| SOLITARY_SOCIAL_NEEDS.contains(&s);
    let group = |s: &str| GROUP_SOCIAL_NEEDS.contains(&s);

    !((solitary(first) && group(second)) || (solitary(second) && group(first)))
}

/// The first failing predicate for a pair, or `None` if they may cohabit.
pub fn first_conflict(a: &Animal, b: &Animal) -> Option<Incompatibility> {
    let conflict = if !diets_compatible(a.diet, b.diet) {
        Incompatibility::Diet {
            first: a.diet,
            second: b.diet,
        }
    } else if !habitat_types_compatible(&a.habitat_type, &b.habitat_type) {
        Incompatibility::HabitatType {
            first: a.habitat_type.clone(),
            second: b.habitat_type.clone(),
        }
    } else if !temperaments_compatible(&a.temperament, &b.temperament) {
        Incompatibility::Temperament {
            first: a.temperament.clone(),
            second: b.temperament.clone(),
        }
    } else if !social_needs_compatible(&a.social_needs, &b.social_needs) {
        Incompatibility::SocialNeeds {
            first: a.social_needs.clone(),
            second: b.social_needs.clone(),
        }
    } else {
        return None;
    };

    debug!(first = %a.animal_id, second = %b.animal_id, reason = %conflict, "animals incompatible");
    Some(conflict)
}

pub fn check_compatibility(a: &Animal, b: &Animal) -> Result<(), Incompatibility> {
    match first_conflict(a, b) {
        Some(conflict) => Err(conflict),
        None => Ok(()),
    }
}

pub fn are_compatible(a: &Animal, b: &Animal) -> bool {
    first_conflict(a, b).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpeciesCatalog;
    use proptest::prelude::*;

    fn animal(diet: Diet, habitat: &str, temperament: &str, social: &str) -> Animal {
        let mut animal = Animal::new_permissive(
            "X1".into(),
            "Test".into(),
            "Mystery".into(),
            3,
            SpeciesCatalog::shared(),
        )
        .unwrap();
        animal.diet = diet;
        animal.habitat_type = habitat.into();
        animal.temperament = temperament.into();
        animal.social_needs = social.into();
        animal
    }

    fn herd_grazer() -> Animal {
        animal(Diet::Herbivore, "savannah", "social", "herd")
    }

    #[test]
    fn test_identical_traits_compatible() {
        assert!(are_compatible(&herd_grazer(), &herd_grazer()));
    }

    #[test]
    fn test_each_conflicting_trait_breaks_compatibility() {
        let base = herd_grazer();

        let mut other = herd_grazer();
        other.diet = Diet::Carnivore;
        assert_eq!(
            first_conflict(&base, &other),
            Some(Incompatibility::Diet {
                first: Diet::Herbivore,
                second: Diet::Carnivore
            })
        );

        let mut other = herd_grazer();
        other.habitat_type = "forest".into();
        assert!(matches!(
            first_conflict(&base, &other),
            Some(Incompatibility::HabitatType { .. })
        ));

        let mut other = herd_grazer();
        other.temperament = "aggressive".into();
        assert!(matches!(
            first_conflict(&base, &other),
            Some(Incompatibility::Temperament { .. })
        ));

        let mut other = herd_grazer();
        other.social_needs = "solitary".into();
        assert!(matches!(
            first_conflict(&base, &other),
            Some(Incompatibility::SocialNeeds { .. })
        ));
    }

    #[test]
    fn test_diet_checked_first() {
        let a = animal(Diet::Carnivore, "forest", "aggressive", "solitary");
        let b = animal(Diet::Herbivore, "savannah", "calm", "herd");
        let reason = check_compatibility(&a, &b).unwrap_err();
        assert_eq!(reason.to_string(), "incompatible diets (carnivore vs herbivore)");
    }

    #[test]
    fn test_undefined_diet_mismatch_is_incompatible() {
        assert!(!diets_compatible(Diet::Omnivore, Diet::Herbivore));
        assert!(!diets_compatible(Diet::Unknown, Diet::Carnivore));
        assert!(diets_compatible(Diet::Unknown, Diet::Unknown));
    }

    #[test]
    fn test_social_needs_rules() {
        assert!(!social_needs_compatible("solitary", "pack"));
        assert!(!social_needs_compatible("pride", "territorial"));
        assert!(social_needs_compatible("solitary", "solitary"));
        assert!(social_needs_compatible("herd", "pack"));
        assert!(social_needs_compatible("troop", "solitary"));
        assert!(social_needs_compatible("unknown", "herd"));
    }

    #[test]
    fn test_catalog_species_pairs() {
        let catalog = SpeciesCatalog::shared();
        let make = |id: &str, species: &str| {
            Animal::new(id.into(), id.into(), species.into(), 5, catalog).unwrap()
        };

        // Same species always cohabit
        assert!(are_compatible(&make("Z1", "Zebra"), &make("Z2", "Zebra")));
        // Lion and zebra differ on diet
        assert!(!are_compatible(&make("L1", "Lion"), &make("Z1", "Zebra")));
        // Elephant and giraffe: herbivore, savannah, calm, herd
        assert!(are_compatible(&make("E1", "Elephant"), &make("G1", "Giraffe")));
    }

    fn diet_strategy() -> impl Strategy<Value = Diet> {
        prop_oneof![
            Just(Diet::Carnivore),
            Just(Diet::Herbivore),
            Just(Diet::Omnivore),
            Just(Diet::Unknown),
        ]
    }

    fn trait_strategy(values: &'static [&'static str]) -> impl Strategy<Value = String> {
        prop::sample::select(values).prop_map(str::to_string)
    }

    fn animal_strategy() -> impl Strategy<Value = Animal> {
        (
            diet_strategy(),
            trait_strategy(&["savannah", "forest", "aquatic"]),
            trait_strategy(&["calm", "social", "aggressive"]),
            trait_strategy(&["solitary", "territorial", "herd", "pack", "troop"]),
        )
            .prop_map(|(diet, habitat, temperament, social)| {
                animal(diet, &habitat, &temperament, &social)
            })
    }

    proptest! {
        #[test]
        fn prop_compatibility_is_symmetric(a in animal_strategy(), b in animal_strategy()) {
            prop_assert_eq!(are_compatible(&a, &b), are_compatible(&b, &a));
        }

        #[test]
        fn prop_animal_compatible_with_itself(a in animal_strategy()) {
            prop_assert!(are_compatible(&a, &a));
        }
    }
}
