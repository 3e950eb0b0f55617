//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Lookup(lookup) => {
            format!("{}. Run `svcconf list` to see configured services.", lookup)
        }
        other => other.to_string(),
    }
}
