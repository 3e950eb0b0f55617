//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format and destination come
//! from the `[logging]` table of the configuration file, overridable by environment.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter directives, e.g. `service_config=debug`.
pub const LOG_ENV: &str = "SERVICE_CONFIG_LOG";
pub const LOG_FORMAT_ENV: &str = "SERVICE_CONFIG_LOG_FORMAT";
pub const LOG_OUTPUT_ENV: &str = "SERVICE_CONFIG_LOG_OUTPUT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

// stdout is reserved for command output
fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("service-config.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: BTreeMap::new(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
    File,
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (SERVICE_CONFIG_LOG, SERVICE_CONFIG_LOG_FORMAT, SERVICE_CONFIG_LOG_OUTPUT)
/// 2. Configuration (file values, already overridden by CLI flags)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ApiError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let writer = match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => {
            let log_file = config.map(|c| c.file.clone()).unwrap_or_else(default_log_file);
            BoxMakeWriter::new(std::sync::Mutex::new(open_log_file(&log_file)?))
        }
    };

    let base_subscriber = Registry::default().with(filter);

    let result = match format {
        LogFormat::Json => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color && output != LogOutput::File)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| ApiError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Open the log file for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File, ApiError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");

    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<LogFormat, ApiError> {
    if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
        if let Ok(parsed) = parse_format(&format) {
            return Ok(parsed);
        }
    }

    parse_format(config.map(|c| c.format.as_str()).unwrap_or("text"))
}

fn parse_format(format: &str) -> Result<LogFormat, ApiError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        ))),
    }
}

/// Determine output destination from config or environment
fn determine_output(config: Option<&LoggingConfig>) -> Result<LogOutput, ApiError> {
    if let Ok(output) = std::env::var(LOG_OUTPUT_ENV) {
        return parse_output(&output);
    }

    parse_output(config.map(|c| c.output.as_str()).unwrap_or("stderr"))
}

fn parse_output(output: &str) -> Result<LogOutput, ApiError> {
    match output {
        "stdout" => Ok(LogOutput::Stdout),
        "stderr" => Ok(LogOutput::Stderr),
        "file" => Ok(LogOutput::File),
        _ => Err(ApiError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}
