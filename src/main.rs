use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::PathBuf;

use steptrack::calories::CalorieCalculator;
use steptrack::config::AppConfig;
use steptrack::logging::{init_logging, LogFormat};
use steptrack::models::{ActivityKind, PhysicalProfile};
use steptrack::{daysteps, summary, training, TrackerError};

/// steptrack - Step and Training Summary CLI
///
/// Computes distance, mean speed and calories for a single activity record.
#[derive(Parser)]
#[command(name = "steptrack")]
#[command(author = "steptrack contributors")]
#[command(version)]
#[command(about = "Step and training summary CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format on stderr
    #[arg(long, value_enum, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a daily step record ("<steps>,<duration>")
    Day {
        /// Record such as 6000,1h30m
        record: String,

        #[command(flatten)]
        body: BodyArgs,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarize a training record ("<steps>,<label>,<duration>")
    Training {
        /// Record such as 6000,Walking,1h
        record: String,

        #[command(flatten)]
        body: BodyArgs,

        /// Calorie formula (walking unless given)
        #[arg(short, long)]
        kind: Option<ActivityKind>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show or create the configuration file
    Config {
        /// Write a default configuration file
        #[arg(long)]
        init: bool,

        /// Print the effective configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(clap::Args)]
struct BodyArgs {
    /// Weight in kilograms
    #[arg(short, long)]
    weight: Option<f64>,

    /// Height in meters
    #[arg(short = 'H', long)]
    height: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl BodyArgs {
    fn resolve(&self, config: &AppConfig) -> Result<PhysicalProfile> {
        let weight = self
            .weight
            .or(config.profile.weight_kg)
            .ok_or_else(|| anyhow!("weight is required (--weight or [profile] weight_kg)"))?;
        let height = self
            .height
            .or(config.profile.height_m)
            .ok_or_else(|| anyhow!("height is required (--height or [profile] height_m)"))?;
        Ok(PhysicalProfile::new(weight, height))
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "error:".red().bold(), error_message(&err));
        std::process::exit(1);
    }
}

/// Friendly text for a bare record error, the full context chain otherwise
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TrackerError>() {
        Some(tracker_err) if err.chain().count() == 1 => tracker_err.user_message(),
        _ => format!("{:#}", err),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);
    let loaded = AppConfig::load_if_exists(&config_path)?;
    let config_found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    let mut log_config = config.logging.clone();
    log_config.level = log_config.level.raised_by(cli.verbose);
    if let Some(format) = cli.log_format {
        log_config.format = format;
    }
    init_logging(&log_config)?;
    if config_found {
        tracing::debug!(path = %config_path.display(), "Configuration loaded");
    } else {
        tracing::warn!(path = %config_path.display(), "Config file not found, using defaults");
    }

    let calculator = config.calculator()?;

    match cli.command {
        Commands::Day {
            record,
            body,
            format,
        } => {
            let profile = body.resolve(&config)?;
            let report = daysteps::day_summary(&calculator, &record, &profile)?;
            print_summary(&report, format)?;
        }

        Commands::Training {
            record,
            body,
            kind,
            format,
        } => {
            let profile = body.resolve(&config)?;
            let kind = kind.unwrap_or(ActivityKind::Walking);
            let report = training::training_summary(&calculator, &record, &profile, kind)?;
            print_summary(&report, format)?;
        }

        Commands::Config { init, show } => {
            if init {
                if config_path.exists() {
                    return Err(anyhow!(
                        "config file already exists: {}",
                        config_path.display()
                    ));
                }
                AppConfig::default().save_to_file(&config_path)?;
                println!(
                    "{}",
                    format!("✓ Wrote {}", config_path.display()).green()
                );
            }
            if show || !init {
                print_config(&config, &calculator)?;
            }
        }
    }

    Ok(())
}

fn print_summary<T>(report: &T, format: OutputFormat) -> Result<()>
where
    T: std::fmt::Display + serde::Serialize,
{
    match format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", summary::to_json(report)?),
    }
    Ok(())
}

fn print_config(config: &AppConfig, calculator: &CalorieCalculator) -> Result<()> {
    println!(
        "{} {}",
        "Step length:".bold(),
        calculator.config().step_length.description()
    );
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use steptrack::{FormatError, ValidationError};

    #[test]
    fn test_bare_record_error_uses_user_message() {
        let err = anyhow::Error::from(TrackerError::from(FormatError::FieldCount {
            expected: 2,
            actual: 1,
        }));
        assert!(error_message(&err).starts_with("Record must contain 2 comma-separated fields"));
    }

    #[test]
    fn test_context_is_kept_for_wrapped_errors() {
        let err = anyhow::Error::from(TrackerError::Configuration(
            "invalid constant meters_per_km: 0".to_string(),
        ))
        .context("Invalid [calculation] section");
        let message = error_message(&err);
        assert!(message.starts_with("Invalid [calculation] section: "));
        assert!(message.contains("meters_per_km"));

        let err = anyhow::Error::from(TrackerError::from(ValidationError::NonPositiveDuration))
            .context("while reading record");
        assert!(error_message(&err).contains("while reading record"));
    }

    #[test]
    fn test_cli_parses_log_format() {
        let cli = Cli::try_parse_from([
            "steptrack",
            "--log-format",
            "json",
            "day",
            "1000,30m",
            "-w",
            "70",
            "-H",
            "1.75",
        ])
        .unwrap();
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(matches!(cli.command, Commands::Day { .. }));
    }
}
