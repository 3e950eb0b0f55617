//! Global config file source: $XDG_CONFIG_HOME/service-config/config.{toml,yaml,json}

use super::find_config_file;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Directory holding the user-level configuration file.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "service-config").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(config_dir) = global_config_dir() {
        match find_config_file(&config_dir, "config") {
            Some(path) => {
                info!(config_path = %path.display(), "Loading global service configuration");
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                warn!(
                    config_dir = %config_dir.display(),
                    "No global service configuration found. \
                     Consider creating config.toml there for user-level defaults."
                );
            }
        }
    }
    Ok(builder)
}
