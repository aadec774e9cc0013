//! Unified error hierarchy for steptrack
//!
//! Parsers and calculators report failures through [`TrackerError`]; the
//! two leaf enums separate malformed input from well-formed but invalid values.

use thiserror::Error;

/// Top-level error type for all steptrack operations
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Malformed record text
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Well-formed input with out-of-range values
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Calculation constants outside their valid range
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Record text that cannot be split or parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Record has the wrong number of delimited fields
    #[error("wrong field count: expected {expected}, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// Step field is not an integer
    #[error("step count is not an integer: {value:?}")]
    InvalidSteps { value: String },

    /// Duration field does not follow the duration grammar
    #[error("invalid duration {value:?}: {reason}")]
    InvalidDuration { value: String, reason: String },
}

/// Values that parse but violate a positivity invariant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("step count must be positive, got {steps}")]
    NonPositiveSteps { steps: i64 },

    #[error("duration must be positive")]
    NonPositiveDuration,

    #[error("weight must be positive, got {weight}")]
    NonPositiveWeight { weight: f64 },

    #[error("height must be positive, got {height}")]
    NonPositiveHeight { height: f64 },
}

/// Result type alias for steptrack operations
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// True for errors caused by the record text itself
    pub fn is_format(&self) -> bool {
        matches!(self, TrackerError::Format(_))
    }

    /// True for errors caused by non-positive values
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation(_))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::Format(_) | TrackerError::Validation(_) => ErrorSeverity::Warning,
            TrackerError::Configuration(_) => ErrorSeverity::Error,
        }
    }

    /// Emit a tracing event for a record that could not be processed,
    /// at the level matching this error's severity
    pub fn log_failure(&self, record: &str) {
        if self.severity().to_tracing_level() == tracing::Level::ERROR {
            tracing::error!(record, error = %self, "Failed to process record");
        } else {
            tracing::warn!(record, error = %self, "Failed to process record");
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Format(FormatError::FieldCount { expected, .. }) => {
                format!(
                    "Record must contain {} comma-separated fields, e.g. \"1000,30m\"",
                    expected
                )
            }
            TrackerError::Format(FormatError::InvalidDuration { value, .. }) => {
                format!(
                    "Could not read duration {:?}; use units h, m, s such as \"1h30m\"",
                    value
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents operation but system can continue
    Error,
    /// Bad input for a single record
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
