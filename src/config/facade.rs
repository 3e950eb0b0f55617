//! Configuration loading facade: layers file sources and validates the result.

use crate::config::sources::{global_file, workspace_file};
use crate::config::AppConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use std::path::Path;
use tracing::{debug, info};

/// Loads [`AppConfig`] from configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for a workspace.
    ///
    /// Sources, lowest to highest precedence: the global config file, the workspace
    /// `config/services.*` file, then the environment-specific workspace file.
    pub fn load(workspace_root: &Path) -> Result<AppConfig, ApiError> {
        let builder = global_file::add_to_builder(Config::builder())?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        Self::finish(builder)
    }

    /// Load configuration from a single file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ApiError> {
        info!(config_path = %path.display(), "Loading service configuration file");
        let builder = Config::builder().add_source(File::from(path).required(true));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ApiError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        debug!(services = config.discovery.len(), "Service configuration loaded");
        Ok(config)
    }
}
