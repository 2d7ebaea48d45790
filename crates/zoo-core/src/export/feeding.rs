//! Daily feeding report.

use serde::{Deserialize, Serialize};

use super::escape_csv;
use crate::models::{Animal, HealthStatus};
use crate::rules::{FeedingSchedule, FoodType};

/// Feeding plan for every animal on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyFeedingReport {
    /// Report date (YYYY-MM-DD)
    pub report_date: String,
    pub total_animals: usize,
    pub entries: Vec<FeedingEntry>,
    /// Total meat across all carnivores, in kg
    pub total_meat_kg: f64,
    /// Total vegetation across all herbivores, in kg
    pub total_vegetation_kg: f64,
}

/// One animal's line in the feeding report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedingEntry {
    pub animal_id: String,
    pub name: String,
    pub species: String,
    pub health_status: HealthStatus,
    pub schedule: FeedingSchedule,
}

impl DailyFeedingReport {
    /// Build today's report from the full collection.
    pub fn generate(animals: &[Animal]) -> Self {
        let entries: Vec<FeedingEntry> = animals
            .iter()
            .map(|animal| FeedingEntry {
                animal_id: animal.animal_id.clone(),
                name: animal.name.clone(),
                species: animal.species.clone(),
                health_status: animal.health_status,
                schedule: FeedingSchedule::for_animal(animal),
            })
            .collect();

        let total_for = |food: FoodType| -> f64 {
            let total: f64 = entries
                .iter()
                .filter(|e| e.schedule.food_type == food)
                .map(|e| e.schedule.daily_amount_kg)
                .sum();
            (total * 100.0).round() / 100.0
        };

        Self {
            report_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            total_animals: entries.len(),
            total_meat_kg: total_for(FoodType::Meat),
            total_vegetation_kg: total_for(FoodType::Vegetation),
            entries,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format, one row per animal.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        csv.push_str("report_date,animal_id,name,species,food_type,daily_amount_kg,feeding_times,health_adjustment\n");

        for entry in &self.entries {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                self.report_date,
                escape_csv(&entry.animal_id),
                escape_csv(&entry.name),
                escape_csv(&entry.species),
                entry.schedule.food_type.as_str(),
                entry.schedule.daily_amount_kg,
                entry.schedule.feeding_times.join(" "),
                entry.schedule.adjustment_label(),
            ));
        }

        csv
    }
}
