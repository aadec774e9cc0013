//! Daily step summary
//!
//! Turns a `<steps>,<duration>` record into a report with the distance
//! walked and the calories spent, using the walking formula.

use tracing::debug;

use crate::calories::CalorieCalculator;
use crate::error::Result;
use crate::models::{ActivityKind, PhysicalProfile};
use crate::parser::parse_step_record;
use crate::summary::DaySummary;

/// Day report for `raw` with default calculation constants
pub fn day_action_info(raw: &str, weight: f64, height: f64) -> Result<String> {
    day_action_info_with(&CalorieCalculator::default(), raw, weight, height)
}

/// Day report for `raw` using the given calculator
pub fn day_action_info_with(
    calculator: &CalorieCalculator,
    raw: &str,
    weight: f64,
    height: f64,
) -> Result<String> {
    day_summary(calculator, raw, &PhysicalProfile::new(weight, height))
        .map(|summary| summary.to_string())
}

/// Structured day report, logging any failure before returning it
pub fn day_summary(
    calculator: &CalorieCalculator,
    raw: &str,
    profile: &PhysicalProfile,
) -> Result<DaySummary> {
    let summary = parse_step_record(raw)
        .and_then(|record| {
            let result = calculator.compute(ActivityKind::Walking, &record, profile)?;
            Ok(DaySummary::new(&record, &result))
        })
        .map_err(|err| {
            err.log_failure(raw);
            err
        })?;

    debug!(
        steps = summary.steps,
        distance_km = summary.distance_km,
        calories = summary.calories,
        "Computed day summary"
    );
    Ok(summary)
}
