//! Distance, speed and calorie calculations
//!
//! All constants live in [`CalculationConfig`], which is injected into
//! [`CalorieCalculator`]. The default configuration derives step length from
//! height (in meters) for both record shapes:
//!
//! - distance (km) = steps × step length / meters per km
//! - mean speed (km/h) = distance / hours
//! - running calories = weight × speed × minutes / minutes per hour
//! - walking calories = walking coefficient × running calories

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::duration;
use crate::error::{Result, TrackerError, ValidationError};
use crate::models::{ActivityKind, ActivityRecord, CalorieResult, PhysicalProfile};

/// How a single step length is derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum StepLengthModel {
    /// Step length = coefficient × height
    HeightBased { coefficient: f64 },
    /// Same step length for everyone, in meters
    Fixed { meters: f64 },
}

impl StepLengthModel {
    /// Step length in meters for the given height in meters
    pub fn step_length(&self, height: f64) -> f64 {
        match self {
            StepLengthModel::HeightBased { coefficient } => coefficient * height,
            StepLengthModel::Fixed { meters } => *meters,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            StepLengthModel::HeightBased { .. } => "Height-based step length",
            StepLengthModel::Fixed { .. } => "Fixed step length",
        }
    }
}

impl Default for StepLengthModel {
    fn default() -> Self {
        StepLengthModel::HeightBased { coefficient: 0.45 }
    }
}

/// Constants used by the calorie formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Meters in one kilometer
    pub meters_per_km: f64,

    /// Minutes in one hour
    pub minutes_per_hour: f64,

    /// Walking calories as a share of the running formula
    pub walking_calories_coefficient: f64,

    /// Step length model
    pub step_length: StepLengthModel,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            meters_per_km: 1000.0,
            minutes_per_hour: 60.0,
            walking_calories_coefficient: 0.5,
            step_length: StepLengthModel::default(),
        }
    }
}

impl CalculationConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let (name, value) = match self.step_length {
            StepLengthModel::HeightBased { coefficient } => ("step_length.coefficient", coefficient),
            StepLengthModel::Fixed { meters } => ("step_length.meters", meters),
        };
        let constants = [
            (name, value),
            ("meters_per_km", self.meters_per_km),
            ("minutes_per_hour", self.minutes_per_hour),
            ("walking_calories_coefficient", self.walking_calories_coefficient),
        ];

        for (name, value) in constants {
            if !(value.is_finite() && value > 0.0) {
                return Err(TrackerError::Configuration(format!(
                    "invalid constant {}: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Derives distance, speed and calories from steps and body measurements
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalorieCalculator {
    config: CalculationConfig,
}

impl CalorieCalculator {
    /// Create a calculator after validating its constants
    pub fn new(config: CalculationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// Distance in kilometers covered by `steps` at the given height
    pub fn distance(&self, steps: u64, height: f64) -> f64 {
        let step_length = self.config.step_length.step_length(height);
        steps as f64 * step_length / self.config.meters_per_km
    }

    /// Mean speed in km/h; zero for non-positive durations
    pub fn mean_speed(&self, steps: u64, height: f64, duration: &Duration) -> f64 {
        if *duration <= Duration::zero() {
            return 0.0;
        }
        self.distance(steps, height) / duration::hours(duration)
    }

    /// Calories burned while running
    pub fn running_calories(
        &self,
        steps: u64,
        weight: f64,
        height: f64,
        duration: &Duration,
    ) -> Result<f64> {
        validate_inputs(steps, weight, height, duration)?;
        Ok(self.base_calories(steps, weight, height, duration))
    }

    /// Calories burned while walking
    pub fn walking_calories(
        &self,
        steps: u64,
        weight: f64,
        height: f64,
        duration: &Duration,
    ) -> Result<f64> {
        validate_inputs(steps, weight, height, duration)?;
        Ok(self.config.walking_calories_coefficient
            * self.base_calories(steps, weight, height, duration))
    }

    /// Calories burned for the given activity kind
    pub fn calories(
        &self,
        kind: ActivityKind,
        steps: u64,
        weight: f64,
        height: f64,
        duration: &Duration,
    ) -> Result<f64> {
        match kind {
            ActivityKind::Walking => self.walking_calories(steps, weight, height, duration),
            ActivityKind::Running => self.running_calories(steps, weight, height, duration),
        }
    }

    /// All derived metrics for one record
    pub fn compute(
        &self,
        kind: ActivityKind,
        record: &ActivityRecord,
        profile: &PhysicalProfile,
    ) -> Result<CalorieResult> {
        let calories = self.calories(
            kind,
            record.steps,
            profile.weight_kg,
            profile.height_m,
            &record.duration,
        )?;

        Ok(CalorieResult {
            distance_km: self.distance(record.steps, profile.height_m),
            speed_kmh: self.mean_speed(record.steps, profile.height_m, &record.duration),
            calories,
        })
    }

    fn base_calories(&self, steps: u64, weight: f64, height: f64, duration: &Duration) -> f64 {
        let speed = self.mean_speed(steps, height, duration);
        weight * speed * duration::minutes(duration) / self.config.minutes_per_hour
    }
}

fn validate_inputs(steps: u64, weight: f64, height: f64, duration: &Duration) -> Result<()> {
    if *duration <= Duration::zero() {
        return Err(ValidationError::NonPositiveDuration.into());
    }
    if steps == 0 {
        return Err(ValidationError::NonPositiveSteps { steps: 0 }.into());
    }
    // NaN fails these comparisons too
    if !(weight > 0.0) {
        return Err(ValidationError::NonPositiveWeight { weight }.into());
    }
    if !(height > 0.0) {
        return Err(ValidationError::NonPositiveHeight { height }.into());
    }
    Ok(())
}
