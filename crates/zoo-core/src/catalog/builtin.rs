//! Built-in species and generic baseline tables.

use super::GenericBaselines;
use crate::models::{Bounds, BreedingRange, Diet, HealthBaseline, SpeciesBaseline};

struct SpeciesRow {
    name: &'static str,
    code: &'static str,
    weight_kg: (f64, f64),
    temperature_c: (f64, f64),
    heart_rate_bpm: (f64, f64),
    diet: Diet,
    habitat_type: &'static str,
    temperament: &'static str,
    social_needs: &'static str,
    breeding_age: (u32, u32),
    gestation_days: u32,
}

#[rustfmt::skip]
const SPECIES_TABLE: &[SpeciesRow] = &[
    SpeciesRow { name: "Lion", code: "LION001", weight_kg: (150.0, 250.0), temperature_c: (38.0, 39.5), heart_rate_bpm: (40.0, 70.0), diet: Diet::Carnivore, habitat_type: "savannah", temperament: "aggressive", social_needs: "pride", breeding_age: (3, 15), gestation_days: 110 },
    SpeciesRow { name: "Elephant", code: "ELEPHANT001", weight_kg: (2500.0, 6000.0), temperature_c: (35.9, 36.9), heart_rate_bpm: (25.0, 40.0), diet: Diet::Herbivore, habitat_type: "savannah", temperament: "calm", social_needs: "herd", breeding_age: (10, 50), gestation_days: 660 },
    SpeciesRow { name: "Wolf", code: "WOLF001", weight_kg: (30.0, 60.0), temperature_c: (38.0, 39.0), heart_rate_bpm: (60.0, 90.0), diet: Diet::Carnivore, habitat_type: "forest", temperament: "social", social_needs: "pack", breeding_age: (2, 10), gestation_days: 63 },
    SpeciesRow { name: "Zebra", code: "ZEBRA001", weight_kg: (200.0, 400.0), temperature_c: (36.5, 38.5), heart_rate_bpm: (60.0, 80.0), diet: Diet::Herbivore, habitat_type: "savannah", temperament: "timid", social_needs: "herd", breeding_age: (2, 15), gestation_days: 375 },
    SpeciesRow { name: "Giraffe", code: "GIRAFFE001", weight_kg: (800.0, 1200.0), temperature_c: (37.5, 39.0), heart_rate_bpm: (40.0, 60.0), diet: Diet::Herbivore, habitat_type: "savannah", temperament: "calm", social_needs: "herd", breeding_age: (4, 20), gestation_days: 450 },
    SpeciesRow { name: "Tiger", code: "TIGER001", weight_kg: (100.0, 200.0), temperature_c: (37.5, 39.0), heart_rate_bpm: (45.0, 75.0), diet: Diet::Carnivore, habitat_type: "forest", temperament: "aggressive", social_needs: "solitary", breeding_age: (3, 12), gestation_days: 105 },
    SpeciesRow { name: "Gorilla", code: "GORILLA001", weight_kg: (120.0, 180.0), temperature_c: (36.0, 38.0), heart_rate_bpm: (60.0, 90.0), diet: Diet::Herbivore, habitat_type: "forest", temperament: "calm", social_needs: "troop", breeding_age: (3, 12), gestation_days: 250 },
    SpeciesRow { name: "Kangaroo", code: "KANGAROO001", weight_kg: (25.0, 90.0), temperature_c: (36.0, 38.5), heart_rate_bpm: (70.0, 120.0), diet: Diet::Herbivore, habitat_type: "grassland", temperament: "timid", social_needs: "mob", breeding_age: (2, 12), gestation_days: 30 },
    SpeciesRow { name: "Hippopotamus", code: "HIPPOPOTAMUS001", weight_kg: (1500.0, 1800.0), temperature_c: (35.5, 37.0), heart_rate_bpm: (25.0, 35.0), diet: Diet::Herbivore, habitat_type: "aquatic", temperament: "aggressive", social_needs: "pod", breeding_age: (7, 40), gestation_days: 240 },
    SpeciesRow { name: "Cheetah", code: "CHEETAH001", weight_kg: (40.0, 65.0), temperature_c: (38.0, 39.5), heart_rate_bpm: (55.0, 85.0), diet: Diet::Carnivore, habitat_type: "savannah", temperament: "timid", social_needs: "solitary", breeding_age: (2, 10), gestation_days: 95 },
    SpeciesRow { name: "Koala", code: "KOALA001", weight_kg: (8.0, 12.0), temperature_c: (36.0, 37.5), heart_rate_bpm: (80.0, 140.0), diet: Diet::Herbivore, habitat_type: "forest", temperament: "calm", social_needs: "solitary", breeding_age: (2, 12), gestation_days: 35 },
];

fn vitals(weight_kg: (f64, f64), temperature_c: (f64, f64), heart_rate_bpm: (f64, f64)) -> HealthBaseline {
    HealthBaseline::new(
        Bounds::new(weight_kg.0, weight_kg.1),
        Bounds::new(temperature_c.0, temperature_c.1),
        Bounds::new(heart_rate_bpm.0, heart_rate_bpm.1),
    )
}

/// Species baselines in catalog order.
pub(super) fn species() -> Vec<SpeciesBaseline> {
    SPECIES_TABLE
        .iter()
        .map(|row| SpeciesBaseline {
            name: row.name.to_string(),
            code: row.code.to_string(),
            health: vitals(row.weight_kg, row.temperature_c, row.heart_rate_bpm),
            diet: row.diet,
            habitat_type: row.habitat_type.to_string(),
            temperament: row.temperament.to_string(),
            social_needs: row.social_needs.to_string(),
            breeding: BreedingRange {
                min_age: row.breeding_age.0,
                max_age: row.breeding_age.1,
                gestation_days: row.gestation_days,
            },
        })
        .collect()
}

pub(super) fn generic_baselines() -> GenericBaselines {
    GenericBaselines {
        large_mammal: vitals((200.0, 1000.0), (36.0, 38.5), (40.0, 80.0)),
        medium_mammal: vitals((20.0, 200.0), (37.0, 39.0), (60.0, 120.0)),
        small_mammal: vitals((1.0, 20.0), (37.5, 39.5), (100.0, 200.0)),
        bird: vitals((1.0, 20.0), (40.0, 42.0), (120.0, 200.0)),
        reptile: vitals((5.0, 200.0), (25.0, 35.0), (20.0, 60.0)),
    }
}
