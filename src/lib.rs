//! Step and training record summaries
//!
//! Parses `<steps>,<duration>` and `<steps>,<label>,<duration>` records and
//! derives distance, mean speed and calories from body measurements.
//! [`day_action_info`] and [`training_info`] are the entry points.

pub mod calories;
pub mod config;
pub mod daysteps;
pub mod duration;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod summary;
pub mod training;

// Re-export commonly used types for convenience
pub use models::*;
pub use calories::{CalculationConfig, CalorieCalculator, StepLengthModel};
pub use config::AppConfig;
pub use daysteps::day_action_info;
pub use training::training_info;
pub use error::{FormatError, TrackerError, ValidationError, Result};
pub use logging::{LogConfig, LogLevel, LogFormat};
