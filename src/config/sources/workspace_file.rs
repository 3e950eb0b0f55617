//! Workspace config file source: config/services.* and config/services.{env}.*

use super::find_config_file;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::info;

/// Environment variable selecting the environment-specific file.
pub const ENV_VAR: &str = "SERVICE_CONFIG_ENV";

const DEFAULT_ENV: &str = "development";

/// Add workspace config files to builder.
/// Precedence: config/services.* (base) then config/services.{SERVICE_CONFIG_ENV}.* (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_dir = workspace_root.join("config");
    let env_name = std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV.to_string());

    let mut builder = builder;

    if let Some(base_config_path) = find_config_file(&config_dir, "services") {
        info!(config_path = %base_config_path.display(), "Loading workspace service configuration");
        builder = builder.add_source(File::from(base_config_path.as_path()).required(true));
    }

    if let Some(env_config_path) = find_config_file(&config_dir, &format!("services.{}", env_name))
    {
        info!(
            config_path = %env_config_path.display(),
            env = %env_name,
            "Loading environment service configuration"
        );
        builder = builder.add_source(File::from(env_config_path.as_path()).required(true));
    }

    Ok(builder)
}
