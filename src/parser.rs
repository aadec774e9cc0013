//! Record parsers
//!
//! Both record shapes use a comma as the only field delimiter:
//!
//! - step record: `<steps>,<duration>`, e.g. `1000,30m0s`
//! - training record: `<steps>,<label>,<duration>`, e.g. `1000,Running,30m0s`
//!
//! Fields are not trimmed. Checks run in field order, so a record with a
//! bad step count and a bad duration reports the step count.

use chrono::Duration;
use tracing::debug;

use crate::duration::parse_duration;
use crate::error::{FormatError, Result, ValidationError};
use crate::models::ActivityRecord;

/// Field delimiter shared by both record shapes
pub const FIELD_DELIMITER: char = ',';

const STEP_RECORD_FIELDS: usize = 2;
const TRAINING_RECORD_FIELDS: usize = 3;

/// Parse a `<steps>,<duration>` record
pub fn parse_step_record(raw: &str) -> Result<ActivityRecord> {
    let fields = split_fields(raw, STEP_RECORD_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_positive_duration(fields[1])?;

    debug!(steps, duration = %fields[1], "Parsed step record");
    Ok(ActivityRecord {
        steps,
        label: None,
        duration,
    })
}

/// Parse a `<steps>,<label>,<duration>` record
///
/// The label is kept verbatim, including an empty label.
pub fn parse_training_record(raw: &str) -> Result<ActivityRecord> {
    let fields = split_fields(raw, TRAINING_RECORD_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let label = fields[1].to_string();
    let duration = parse_positive_duration(fields[2])?;

    debug!(steps, label = %label, duration = %fields[2], "Parsed training record");
    Ok(ActivityRecord {
        steps,
        label: Some(label),
        duration,
    })
}

fn split_fields(raw: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
    if fields.len() != expected {
        return Err(FormatError::FieldCount {
            expected,
            actual: fields.len(),
        }
        .into());
    }
    Ok(fields)
}

fn parse_steps(field: &str) -> Result<u64> {
    let steps: i64 = field.parse().map_err(|_| FormatError::InvalidSteps {
        value: field.to_string(),
    })?;
    if steps <= 0 {
        return Err(ValidationError::NonPositiveSteps { steps }.into());
    }
    Ok(steps as u64)
}

fn parse_positive_duration(field: &str) -> Result<Duration> {
    let duration = parse_duration(field)?;
    if duration <= Duration::zero() {
        return Err(ValidationError::NonPositiveDuration.into());
    }
    Ok(duration)
}
