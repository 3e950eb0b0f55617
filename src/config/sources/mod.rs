//! Configuration file sources, in precedence order: global, workspace, workspace env.

use std::path::{Path, PathBuf};

pub mod global_file;
pub mod workspace_file;

/// Extensions tried for a configuration file, in lookup order.
const SUPPORTED_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// First existing `<stem>.<ext>` in `dir`.
pub(crate) fn find_config_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|candidate| candidate.is_file())
}
