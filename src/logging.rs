//! Structured logging setup for steptrack
//!
//! Library code only emits `tracing` events; the binary installs the
//! subscriber configured here. Reports go to stdout, so log output is
//! written to stderr and, optionally, to a JSON log file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,

    /// Output format on stderr
    pub format: LogFormat,

    /// JSON log file, in addition to stderr
    pub file_path: Option<PathBuf>,

    /// Start a new log file every day
    pub rotation: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            file_path: None,
            rotation: true,
        }
    }
}

/// Verbosity levels, quietest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// `EnvFilter` directive for this level
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Level raised by a `-v` count, saturating at trace
    pub fn raised_by(self, verbosity: u8) -> Self {
        let index = (self as usize + verbosity as usize).min(Self::ALL.len() - 1);
        Self::ALL[index]
    }
}

/// Stderr output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, colored, with source locations
    Pretty,
    /// One JSON object per event
    Json,
    /// Single-line text
    Compact,
}

fn stderr_layer<S>(format: LogFormat) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    match format {
        LogFormat::Pretty => layer.pretty().with_line_number(true).boxed(),
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}

fn file_layer<S>(path: &Path, rotation: bool) -> anyhow::Result<BoxedLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("steptrack.log");

    let appender = RollingFileAppender::builder()
        .rotation(if rotation {
            Rotation::DAILY
        } else {
            Rotation::NEVER
        })
        .filename_prefix(prefix)
        .build(directory)?;

    Ok(fmt::layer()
        .json()
        .with_writer(appender)
        .with_target(true)
        .boxed())
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("steptrack={}", config.level.directive())));

    let mut layers = vec![stderr_layer(config.format)];
    if let Some(path) = &config.file_path {
        layers.push(file_layer(path, config.rotation)?);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()?;

    tracing::debug!(
        level = ?config.level,
        format = ?config.format,
        file = ?config.file_path,
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_level() {
        assert_eq!(LogLevel::Warn.raised_by(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised_by(2), LogLevel::Debug);
        assert_eq!(LogLevel::Warn.raised_by(9), LogLevel::Trace);
        assert_eq!(LogLevel::Error.raised_by(1).directive(), "warn");
    }

    #[test]
    fn test_file_layer_opens_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let layer =
            file_layer::<tracing_subscriber::Registry>(&dir.path().join("steptrack.log"), false);
        assert!(layer.is_ok());
    }

    #[test]
    fn test_log_config_from_toml() {
        let config: LogConfig = toml::from_str("level = \"debug\"\nformat = \"json\"\n").unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.rotation);
        assert_eq!(config.file_path, None);
    }
}
