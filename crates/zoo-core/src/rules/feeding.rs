//! Daily feeding schedule calculation.

use serde::{Deserialize, Serialize};

use crate::models::{Animal, Diet, HealthStatus};

/// Daily ration as a fraction of body weight.
const CARNIVORE_RATION: f64 = 0.04;
const HERBIVORE_RATION: f64 = 0.03;

const CARNIVORE_TIMES: &[&str] = &["08:00", "17:00"];
const HERBIVORE_TIMES: &[&str] = &["06:00", "12:00", "18:00"];

/// Food category handed out to an animal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Meat,
    Vegetation,
    Unknown,
}

impl FoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Meat => "meat",
            FoodType::Vegetation => "vegetation",
            FoodType::Unknown => "unknown",
        }
    }
}

/// Daily feeding plan for one animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedingSchedule {
    /// Daily amount in kg, rounded to 2 decimals
    pub daily_amount_kg: f64,
    /// Feeding times of day (e.g., "08:00")
    pub feeding_times: Vec<String>,
    pub food_type: FoodType,
    /// Ration multiplier from health status (1.0 = full ration)
    pub health_adjustment: f64,
}

impl FeedingSchedule {
    /// Schedule for an animal's diet, latest observed weight and stored health status.
    ///
    /// Animals without a recorded weight get a zero ration.
    pub fn for_animal(animal: &Animal) -> Self {
        Self::calculate(
            animal.diet,
            animal.latest_weight_kg().unwrap_or(0.0),
            animal.health_status,
        )
    }

    pub fn calculate(diet: Diet, weight_kg: f64, health_status: HealthStatus) -> Self {
        let (base_amount, food_type, times) = match diet {
            Diet::Carnivore => (weight_kg * CARNIVORE_RATION, FoodType::Meat, CARNIVORE_TIMES),
            Diet::Herbivore => (
                weight_kg * HERBIVORE_RATION,
                FoodType::Vegetation,
                HERBIVORE_TIMES,
            ),
            Diet::Omnivore | Diet::Unknown => (0.0, FoodType::Unknown, &[] as &[&str]),
        };

        let health_adjustment = health_adjustment(health_status);

        Self {
            daily_amount_kg: round2(base_amount * health_adjustment),
            feeding_times: times.iter().map(|t| t.to_string()).collect(),
            food_type,
            health_adjustment,
        }
    }

    /// Adjustment as a percentage label (e.g., "80%").
    pub fn adjustment_label(&self) -> String {
        format!("{:.0}%", self.health_adjustment * 100.0)
    }
}

/// Sick animals get a reduced ration.
fn health_adjustment(status: HealthStatus) -> f64 {
    match status {
        HealthStatus::NeedsAttention => 0.8,
        HealthStatus::Critical => 0.6,
        HealthStatus::Healthy | HealthStatus::Unknown => 1.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
