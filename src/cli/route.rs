//! CLI route: single route table and run context. Dispatches to the registry and presentation.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_service_list_json, format_service_list_text, format_service_show_json,
    format_service_show_text, format_validate_result, ServiceSummary,
};
use crate::config::{AppConfig, ConfigLoader};
use crate::error::ApiError;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: the loaded configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    config: AppConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        info!(services = config.discovery.len(), "Service registry ready");
        Ok(Self { config })
    }

    /// Run context over an already loaded configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let registry = &self.config.discovery;
        match command {
            Commands::List { format } => {
                let summaries = ServiceSummary::all(registry)?;
                Ok(match format {
                    OutputFormat::Text => format_service_list_text(&summaries),
                    OutputFormat::Json => format_service_list_json(&summaries),
                })
            }
            Commands::Show { service, format } => {
                debug!(service = %service, "Showing service configuration");
                let summary = ServiceSummary::from_registry(registry, service)?;
                Ok(match format {
                    OutputFormat::Text => format_service_show_text(&summary),
                    OutputFormat::Json => format_service_show_json(&summary),
                })
            }
            Commands::Validate => Ok(format_validate_result(registry)),
        }
    }
}
