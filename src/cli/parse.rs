//! CLI parse: clap types for svcconf. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// svcconf - inspect resolved service discovery configuration
#[derive(Debug, Parser)]
#[command(name = "svcconf")]
#[command(about = "Inspect per-service URIs, tokens and TLS profiles after defaults are applied")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/services.* is read from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides layered config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every configured service and where its token and TLS profile come from
    List {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show the effective configuration of one service
    Show {
        /// Service name
        service: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Load and validate the configuration
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
