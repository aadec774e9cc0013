//! Training session summary
//!
//! Turns a `<steps>,<label>,<duration>` record into a report with duration,
//! distance, mean speed and calories. The label is informational only;
//! calories always come from the walking formula.

use tracing::debug;

use crate::calories::CalorieCalculator;
use crate::error::Result;
use crate::models::{ActivityKind, PhysicalProfile};
use crate::parser::parse_training_record;
use crate::summary::TrainingSummary;

/// Training report for `raw` with default calculation constants
pub fn training_info(raw: &str, weight: f64, height: f64) -> Result<String> {
    training_info_with(&CalorieCalculator::default(), raw, weight, height)
}

/// Training report for `raw` using the given calculator
pub fn training_info_with(
    calculator: &CalorieCalculator,
    raw: &str,
    weight: f64,
    height: f64,
) -> Result<String> {
    training_summary(
        calculator,
        raw,
        &PhysicalProfile::new(weight, height),
        ActivityKind::Walking,
    )
    .map(|summary| summary.to_string())
}

/// Structured training report computed with the formula for `kind`
pub fn training_summary(
    calculator: &CalorieCalculator,
    raw: &str,
    profile: &PhysicalProfile,
    kind: ActivityKind,
) -> Result<TrainingSummary> {
    let summary = parse_training_record(raw)
        .and_then(|record| {
            let result = calculator.compute(kind, &record, profile)?;
            Ok(TrainingSummary::new(&record, &result))
        })
        .map_err(|err| {
            err.log_failure(raw);
            err
        })?;

    debug!(
        label = %summary.label,
        formula = %kind,
        calories = summary.calories,
        "Computed training summary"
    );
    Ok(summary)
}
