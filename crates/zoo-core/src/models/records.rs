//! Health, feeding and medication records attached to an animal.

use serde::{Deserialize, Serialize};

/// A single health check as entered by a keeper or vet.
///
/// Every field is optional; an absent field is skipped by the health checks,
/// which is different from a present-but-zero value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthObservation {
    /// Body weight in kg
    #[serde(rename = "weight", alias = "weight_kg", default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Body temperature in °C
    #[serde(rename = "temperature", alias = "temperature_c", default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    /// Heart rate in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    /// Vaccination status ("current", "overdue", "none")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccination_status: Option<String>,
    /// Free-text vet notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vet_notes: Option<String>,
}

impl HealthObservation {
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = Some(temperature_c);
        self
    }

    pub fn with_heart_rate(mut self, heart_rate: f64) -> Self {
        self.heart_rate = Some(heart_rate);
        self
    }

    pub fn with_vaccination(mut self, status: impl Into<String>) -> Self {
        self.vaccination_status = Some(status.into());
        self
    }

    pub fn with_vet_notes(mut self, notes: impl Into<String>) -> Self {
        self.vet_notes = Some(notes.into());
        self
    }
}

/// A timestamped health observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthRecord {
    /// Unique record ID
    #[serde(default = "new_record_id")]
    pub record_id: String,
    /// When the observation was recorded (RFC 3339)
    #[serde(rename = "date")]
    pub recorded_at: String,
    /// The observation itself
    pub data: HealthObservation,
}

impl HealthRecord {
    /// Create a record stamped with the current time.
    pub fn new(data: HealthObservation) -> Self {
        Self {
            record_id: new_record_id(),
            recorded_at: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }
}

/// Feeding details as entered by a keeper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedingDetails {
    /// Time of day the food was given (e.g., "08:00")
    pub time: String,
    /// Amount fed in kg
    pub amount_kg: f64,
    /// Food type (e.g., "meat", "vegetation")
    pub food_type: String,
    /// Keeper who did the feeding
    pub keeper: String,
}

/// A timestamped feeding entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedingRecord {
    /// Unique record ID
    #[serde(default = "new_record_id")]
    pub record_id: String,
    #[serde(flatten)]
    pub details: FeedingDetails,
    /// When the feeding was recorded (RFC 3339)
    pub timestamp: String,
}

impl FeedingRecord {
    pub fn new(details: FeedingDetails) -> Self {
        Self {
            record_id: new_record_id(),
            details,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A medication the animal is currently on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub name: String,
    /// Dosage as prescribed (e.g., "50mg twice daily")
    pub dosage: Option<String>,
    pub notes: Option<String>,
}

fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
