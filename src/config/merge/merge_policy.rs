//! Merge rules: registry defaults applied to per-service configuration.
//!
//! Each optional field resolves independently: a value authored on the service wins,
//! otherwise the registry default applies. `uris` is copied verbatim and never defaulted.

use crate::config::{RegistryDefaults, ServiceConfig};
use std::collections::BTreeMap;
use tracing::debug;

/// Resolve the effective configuration of a single service.
pub fn resolve_service(raw: &ServiceConfig, defaults: &RegistryDefaults) -> ServiceConfig {
    ServiceConfig {
        uris: raw.uris.clone(),
        api_token: raw.api_token.clone().or_else(|| defaults.api_token.clone()),
        security: raw.security.clone().or_else(|| defaults.security.clone()),
    }
}

/// Resolve every service. The result has exactly the key set of `raw`.
pub fn resolve_all(
    raw: &BTreeMap<String, ServiceConfig>,
    defaults: &RegistryDefaults,
) -> BTreeMap<String, ServiceConfig> {
    raw.iter()
        .map(|(name, service)| {
            debug!(
                service = %name,
                uris = service.uris.len(),
                inherits_token = service.api_token.is_none() && defaults.api_token.is_some(),
                inherits_security = service.security.is_none() && defaults.security.is_some(),
                "Resolved service configuration"
            );
            (name.clone(), resolve_service(service, defaults))
        })
        .collect()
}
