use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::duration;

/// Activity kinds with a dedicated calorie formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Walking,
    Running,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::Walking => write!(f, "walking"),
            ActivityKind::Running => write!(f, "running"),
        }
    }
}

impl std::str::FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walking" | "walk" | "ходьба" => Ok(ActivityKind::Walking),
            "running" | "run" | "бег" => Ok(ActivityKind::Running),
            _ => Err(format!("Unknown activity kind: {}", s)),
        }
    }
}

/// One parsed activity session
///
/// Only the record parsers construct this, so `steps` and `duration` are
/// always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    /// Number of steps taken
    pub steps: u64,

    /// Free-form activity label, present on training records only
    pub label: Option<String>,

    /// Session length
    pub duration: Duration,
}

impl ActivityRecord {
    /// Session length in fractional hours
    pub fn duration_hours(&self) -> f64 {
        duration::hours(&self.duration)
    }
}

/// Body measurements supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    /// Weight in kilograms
    pub weight_kg: f64,

    /// Height in meters
    pub height_m: f64,
}

impl PhysicalProfile {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

/// Metrics derived from one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieResult {
    /// Distance covered in kilometers
    pub distance_km: f64,

    /// Mean speed in km/h
    pub speed_kmh: f64,

    /// Energy spent in kilocalories
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_kind_from_label() {
        assert_eq!("Running".parse::<ActivityKind>().unwrap(), ActivityKind::Running);
        assert_eq!("walk".parse::<ActivityKind>().unwrap(), ActivityKind::Walking);
        assert_eq!("Бег".parse::<ActivityKind>().unwrap(), ActivityKind::Running);
        assert!("Swimming".parse::<ActivityKind>().is_err());
    }

    #[test]
    fn test_record_duration_hours() {
        let record = ActivityRecord {
            steps: 1000,
            label: None,
            duration: Duration::minutes(45),
        };
        assert!((record.duration_hours() - 0.75).abs() < 1e-12);
    }
}
