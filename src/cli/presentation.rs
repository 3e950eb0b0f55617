//! Service command presentation: list, show, validate text/json.
//!
//! Tokens are never rendered; only whether one is set and where it comes from.

use crate::config::{ServiceDiscoveryConfig, ValueSource};
use crate::error::LookupError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

/// Display view of one service's effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub name: String,
    pub uris: Vec<String>,
    pub token: ValueSource,
    pub security: ValueSource,
    pub trust_store: Option<PathBuf>,
    pub mutual_tls: bool,
}

impl ServiceSummary {
    pub fn from_registry(
        registry: &ServiceDiscoveryConfig,
        service_name: &str,
    ) -> Result<Self, LookupError> {
        let security = registry.security(service_name)?;
        Ok(Self {
            name: service_name.to_string(),
            uris: registry.uris(service_name)?.to_vec(),
            token: registry.api_token_source(service_name)?,
            security: registry.security_source(service_name)?,
            trust_store: security.map(|s| s.trust_store_path.clone()),
            mutual_tls: security.map(|s| s.is_mutual()).unwrap_or(false),
        })
    }

    /// Summaries of all services, in name order.
    pub fn all(registry: &ServiceDiscoveryConfig) -> Result<Vec<Self>, LookupError> {
        registry
            .service_names()
            .map(|name| Self::from_registry(registry, name))
            .collect()
    }
}

pub fn format_service_list_text(summaries: &[ServiceSummary]) -> String {
    if summaries.is_empty() {
        return "No services configured.\n\nAdd a [services.<name>] table to config/services.toml."
            .to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Service", "URIs", "Token", "Security"]);
    for summary in summaries {
        table.add_row(vec![
            summary.name.clone(),
            summary.uris.len().to_string(),
            summary.token.to_string(),
            summary.security.to_string(),
        ]);
    }
    format!("{}\n\nTotal: {} service(s)", table, summaries.len())
}

pub fn format_service_list_json(summaries: &[ServiceSummary]) -> String {
    let out = json!({ "services": summaries, "total": summaries.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_service_show_text(summary: &ServiceSummary) -> String {
    let mut output = format!("Service: {}\n", summary.name);
    if summary.uris.is_empty() {
        output.push_str("URIs: (none)\n");
    } else {
        output.push_str("URIs:\n");
        for uri in &summary.uris {
            output.push_str(&format!("  {}\n", uri));
        }
    }
    output.push_str(&format!("Token: {}\n", token_label(summary.token)));
    match &summary.trust_store {
        Some(path) => {
            output.push_str(&format!(
                "Security: {} (trust store {}{})\n",
                summary.security,
                path.display(),
                if summary.mutual_tls { ", mutual TLS" } else { "" }
            ));
        }
        None => output.push_str("Security: none\n"),
    }
    output
}

pub fn format_service_show_json(summary: &ServiceSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_validate_result(registry: &ServiceDiscoveryConfig) -> String {
    format!(
        "Configuration is valid: {} service(s), default token {}, default security {}",
        registry.len(),
        if registry.default_api_token().is_some() { "set" } else { "unset" },
        if registry.default_security().is_some() { "set" } else { "unset" },
    )
}

fn token_label(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Service => "set on service",
        ValueSource::Default => "inherited from default",
        ValueSource::Absent => "none",
    }
}
