//! Health status evaluation.
//!
//! Only the most recent observation counts. Each check contributes at most one
//! issue, in a fixed order: weight, temperature, heart rate, vaccinations, vet
//! notes. Classification:
//! - no issues: healthy
//! - one or two issues, none about temperature: needs attention
//! - anything else: critical

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::SpeciesCatalog;
use crate::models::{Animal, Bounds, HealthBaseline, HealthObservation, HealthStatus};

/// Vet-note terms that raise an issue. Only the first match is reported.
pub const CONCERNING_TERMS: &[&str] = &[
    "lethargic",
    "lethargy",
    "not eating",
    "anorexic",
    "limping",
    "injured",
    "infection",
];

/// Most issues that still count as "needs attention".
const MAX_MINOR_ISSUES: usize = 2;

/// Result of a health evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthAssessment {
    pub status: HealthStatus,
    /// Human-readable summary
    pub detail: String,
    /// Individual issues, in check order
    pub issues: Vec<String>,
}

impl HealthAssessment {
    fn no_records() -> Self {
        Self {
            status: HealthStatus::Unknown,
            detail: "No health records available".to_string(),
            issues: Vec::new(),
        }
    }

    /// Classify a list of issues.
    pub fn from_issues(issues: Vec<String>) -> Self {
        let (status, detail) = if issues.is_empty() {
            (HealthStatus::Healthy, "All health indicators normal".to_string())
        } else if issues.len() <= MAX_MINOR_ISSUES
            && !issues.iter().any(|i| i.contains("temperature"))
        {
            (
                HealthStatus::NeedsAttention,
                format!("Minor issues: {}", issues.join(", ")),
            )
        } else {
            (
                HealthStatus::Critical,
                format!("Health concerns: {}", issues.join(", ")),
            )
        };

        Self {
            status,
            detail,
            issues,
        }
    }
}

/// Evaluates an animal's latest health observation against its species baseline.
pub struct HealthEvaluator<'a> {
    catalog: &'a SpeciesCatalog,
}

impl<'a> HealthEvaluator<'a> {
    pub fn new(catalog: &'a SpeciesCatalog) -> Self {
        Self { catalog }
    }

    pub fn evaluate(&self, animal: &Animal) -> HealthAssessment {
        let Some(latest) = animal.latest_observation() else {
            return HealthAssessment::no_records();
        };

        let baseline = self.catalog.resolve_health_baseline(&animal.species);
        let assessment = HealthAssessment::from_issues(collect_issues(latest, &baseline));

        debug!(
            animal_id = %animal.animal_id,
            status = %assessment.status,
            issues = assessment.issues.len(),
            estimated_baseline = baseline.is_estimate(),
            "evaluated health"
        );
        assessment
    }
}

/// Run every check against one observation.
pub fn collect_issues(observation: &HealthObservation, baseline: &HealthBaseline) -> Vec<String> {
    [
        check_weight(observation.weight_kg, &baseline.weight_kg),
        check_temperature(observation.temperature_c, &baseline.temperature_c),
        check_heart_rate(observation.heart_rate, &baseline.heart_rate_bpm),
        check_vaccination(observation.vaccination_status.as_deref()),
        check_vet_notes(observation.vet_notes.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_weight(weight: Option<f64>, range: &Bounds) -> Option<String> {
    let weight = weight?;
    if weight <= 0.0 {
        Some("invalid weight".to_string())
    } else if weight < range.min {
        Some(format!("underweight ({}kg < {}kg)", weight, range.min))
    } else if weight > range.max {
        Some(format!("overweight ({}kg > {}kg)", weight, range.max))
    } else {
        None
    }
}

fn check_temperature(temperature: Option<f64>, range: &Bounds) -> Option<String> {
    let temp = temperature?;
    if temp < range.min {
        Some(format!("low temperature ({}°C < {}°C)", temp, range.min))
    } else if temp > range.max {
        Some(format!("high temperature ({}°C > {}°C)", temp, range.max))
    } else {
        None
    }
}

fn check_heart_rate(heart_rate: Option<f64>, range: &Bounds) -> Option<String> {
    let hr = heart_rate?;
    if hr <= 0.0 {
        Some("invalid heart rate".to_string())
    } else if hr < range.min {
        Some(format!("low heart rate ({}bpm < {}bpm)", hr, range.min))
    } else if hr > range.max {
        Some(format!("high heart rate ({}bpm > {}bpm)", hr, range.max))
    } else {
        None
    }
}

fn check_vaccination(status: Option<&str>) -> Option<String> {
    match status? {
        "overdue" => Some("vaccinations overdue".to_string()),
        "none" => Some("no vaccinations".to_string()),
        _ => None,
    }
}

fn check_vet_notes(notes: Option<&str>) -> Option<String> {
    let notes = notes?.to_lowercase();
    CONCERNING_TERMS
        .iter()
        .find(|term| notes.contains(*term))
        .map(|term| format!("noted: {}", term))
}
