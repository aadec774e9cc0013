//! Textual duration grammar for activity records
//!
//! Accepts an optionally signed sequence of `<number><unit>` spans such as
//! `1h30m`, `30m0s` or `500ms`, in the grammar of `humantime`. A bare `0`
//! needs no unit. The sign is handled here so that zero and negative spans
//! parse and can be rejected by the caller as non-positive.

use chrono::Duration;

use crate::error::FormatError;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Parse a duration string like `1h30m` into a signed [`Duration`]
pub fn parse_duration(input: &str) -> Result<Duration, FormatError> {
    let invalid = |reason: String| FormatError::InvalidDuration {
        value: input.to_string(),
        reason,
    };

    let (negative, magnitude) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if magnitude == "0" {
        return Ok(Duration::zero());
    }

    let parsed = humantime::parse_duration(magnitude).map_err(|e| invalid(e.to_string()))?;
    let duration =
        Duration::from_std(parsed).map_err(|_| invalid("value out of range".to_string()))?;

    Ok(if negative { -duration } else { duration })
}

fn total_seconds(duration: &Duration) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / NANOS_PER_SECOND
}

/// Duration expressed in fractional hours
pub fn hours(duration: &Duration) -> f64 {
    total_seconds(duration) / SECONDS_PER_HOUR
}

/// Duration expressed in fractional minutes
pub fn minutes(duration: &Duration) -> f64 {
    total_seconds(duration) / SECONDS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_invalid(input: &str) {
        match parse_duration(input) {
            Err(FormatError::InvalidDuration { value, .. }) => assert_eq!(value, input),
            other => panic!("expected InvalidDuration for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_parse_compound_durations() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("30m0s").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("2h45m10s").unwrap(), Duration::seconds(9910));
        assert_eq!(parse_duration("90m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::milliseconds(500));
    }

    #[test]
    fn test_parse_signs_and_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("-0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("0m").unwrap(), Duration::zero());
        assert_eq!(parse_duration("-30m").unwrap(), Duration::minutes(-30));
        assert_eq!(parse_duration("+1h").unwrap(), Duration::hours(1));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_invalid("");
        assert_invalid("-");
        assert_invalid("30");
        assert_invalid("30x");
        assert_invalid("h");
        assert_invalid("abc");
        assert_invalid("--5m");
    }

    #[test]
    fn test_parse_rejects_overflow() {
        // Fits std::time::Duration but not chrono's range
        assert_invalid("99999999999999h");
        assert_invalid("99999999999999999999999999999999999999999s");
    }

    #[test]
    fn test_hours_and_minutes() {
        let duration = parse_duration("1h30m").unwrap();
        assert!((hours(&duration) - 1.5).abs() < 1e-12);
        assert!((minutes(&duration) - 90.0).abs() < 1e-12);

        let negative = Duration::minutes(-45);
        assert!((hours(&negative) + 0.75).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_hms_roundtrip(h in 0i64..1000, m in 0i64..60, s in 0i64..60) {
            let parsed = parse_duration(&format!("{}h{}m{}s", h, m, s)).unwrap();
            prop_assert_eq!(parsed, Duration::seconds(h * 3600 + m * 60 + s));
        }
    }
}
