//! svcconf CLI Binary
//!
//! Inspects the resolved service discovery configuration of a workspace.

use clap::Parser;
use service_config::cli::{Cli, RunContext};
use service_config::config::ConfigLoader;
use service_config::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("svcconf starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", service_config::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", service_config::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(&cli.workspace),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_else(|_| LoggingConfig {
        level: "warn".to_string(),
        ..LoggingConfig::default()
    });

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
