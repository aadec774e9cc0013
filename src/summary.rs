//! Fixed-template activity reports
//!
//! Floats are rounded to two decimal places on their shortest decimal form,
//! midpoints away from zero, so `0.125` renders as `0.13`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

use crate::models::{ActivityRecord, CalorieResult};

const DECIMAL_PLACES: u32 = 2;

/// Round to two decimal places; `None` for NaN, infinities and values
/// beyond `Decimal`'s range
pub fn round_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).map(|decimal| {
        decimal.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    })
}

/// Round to two decimal places for display
pub fn round2(value: f64) -> String {
    match round_decimal(value) {
        Some(decimal) => format!("{:.2}", decimal),
        None => format!("{:.2}", value),
    }
}

/// Report for a training record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl TrainingSummary {
    pub fn new(record: &ActivityRecord, result: &CalorieResult) -> Self {
        Self {
            label: record.label.clone().unwrap_or_default(),
            duration_hours: record.duration_hours(),
            distance_km: result.distance_km,
            speed_kmh: result.speed_kmh,
            calories: result.calories,
        }
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.label)?;
        writeln!(f, "Длительность: {} ч.", round2(self.duration_hours))?;
        writeln!(f, "Дистанция: {} км.", round2(self.distance_km))?;
        writeln!(f, "Скорость: {} км/ч.", round2(self.speed_kmh))?;
        writeln!(f, "Сожгли калорий: {}", round2(self.calories))
    }
}

/// Report for a day-steps record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub steps: u64,
    pub distance_km: f64,
    pub calories: f64,
}

impl DaySummary {
    pub fn new(record: &ActivityRecord, result: &CalorieResult) -> Self {
        Self {
            steps: record.steps,
            distance_km: result.distance_km,
            calories: result.calories,
        }
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Количество шагов: {}.", self.steps)?;
        writeln!(f, "Дистанция составила {} км.", round2(self.distance_km))?;
        writeln!(f, "Вы сожгли {} ккал.", round2(self.calories))
    }
}

/// Serialize a summary as pretty-printed JSON
pub fn to_json<T: Serialize>(summary: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn training_summary() -> TrainingSummary {
        TrainingSummary {
            label: "Бег".to_string(),
            duration_hours: 1.5,
            distance_km: 9.0,
            speed_kmh: 6.0,
            calories: 400.256,
        }
    }

    #[test]
    fn test_round_decimal() {
        assert_eq!(round_decimal(0.125), Some(dec!(0.13)));
        assert_eq!(round_decimal(-0.125), Some(dec!(-0.13)));
        assert_eq!(round_decimal(27.5625), Some(dec!(27.56)));
        assert_eq!(round_decimal(400.256), Some(dec!(400.26)));
        assert_eq!(round_decimal(f64::INFINITY), None);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.86), "4.86");
        assert_eq!(round2(0.125), "0.13");
        assert_eq!(round2(-0.125), "-0.13");
        assert_eq!(round2(3.0), "3.00");
        assert_eq!(round2(182.25), "182.25");
        assert_eq!(round2(f64::NAN), "NaN");
    }

    #[test]
    fn test_training_template() {
        assert_eq!(
            training_summary().to_string(),
            "Тип тренировки: Бег\n\
             Длительность: 1.50 ч.\n\
             Дистанция: 9.00 км.\n\
             Скорость: 6.00 км/ч.\n\
             Сожгли калорий: 400.26\n"
        );
    }

    #[test]
    fn test_day_template() {
        let summary = DaySummary {
            steps: 6000,
            distance_km: 4.86,
            calories: 182.25,
        };
        assert_eq!(
            summary.to_string(),
            "Количество шагов: 6000.\n\
             Дистанция составила 4.86 км.\n\
             Вы сожгли 182.25 ккал.\n"
        );
    }

    #[test]
    fn test_json_output() {
        let json = to_json(&training_summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["label"], "Бег");
        assert_eq!(value["calories"], 400.256);
    }
}
