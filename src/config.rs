//! Service Discovery Configuration
//!
//! Holds per-service connection settings (URIs, API token, TLS profile) together with
//! registry-wide fallback values. The effective configuration of every service is
//! resolved once, when the registry is built, and is read-only afterwards.

use crate::error::{ApiError, LookupError, ValidationError};
use crate::logging::LoggingConfig;
use crate::security::SslConfiguration;
use crate::token::BearerToken;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

mod facade;
pub mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_dir;

/// Per-service configuration as authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service endpoint addresses, in preference order
    pub uris: Vec<String>,

    /// Token for this service; falls back to the registry default when absent
    #[serde(
        rename = "apiToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub api_token: Option<BearerToken>,

    /// TLS profile for this service; falls back to the registry default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SslConfiguration>,
}

impl ServiceConfig {
    /// Service with the given URIs and no token or TLS override.
    pub fn new(uris: Vec<String>) -> Self {
        Self {
            uris,
            api_token: None,
            security: None,
        }
    }

    /// Set a service-specific token, overriding the registry default.
    pub fn with_api_token(mut self, token: impl Into<BearerToken>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set a service-specific TLS profile, overriding the registry default.
    pub fn with_security(mut self, security: SslConfiguration) -> Self {
        self.security = Some(security);
        self
    }
}

/// Registry-wide fallback values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryDefaults {
    pub api_token: Option<BearerToken>,
    pub security: Option<SslConfiguration>,
}

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Authored on the service itself
    Service,
    /// Inherited from the registry default
    Default,
    /// Neither the service nor the registry sets it
    #[serde(rename = "none")]
    Absent,
}

impl ValueSource {
    fn of<T>(own: &Option<T>, fallback: &Option<T>) -> Self {
        match (own, fallback) {
            (Some(_), _) => ValueSource::Service,
            (None, Some(_)) => ValueSource::Default,
            (None, None) => ValueSource::Absent,
        }
    }
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueSource::Service => "service",
            ValueSource::Default => "default",
            ValueSource::Absent => "none",
        };
        f.write_str(name)
    }
}

/// Immutable registry of service configurations.
///
/// Deserializes from, and serializes back to, the authored document shape:
///
/// ```text
/// apiToken = "..."            # optional default
/// [security]                  # optional default
/// [services.<name>]
/// uris = ["..."]
/// apiToken = "..."            # optional override
/// [services.<name>.security]  # optional override
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ServiceDiscoveryDocument", into = "ServiceDiscoveryDocument")]
pub struct ServiceDiscoveryConfig {
    defaults: RegistryDefaults,
    authored_services: BTreeMap<String, ServiceConfig>,
    services: BTreeMap<String, ServiceConfig>,
}

impl ServiceDiscoveryConfig {
    pub fn builder() -> ServiceDiscoveryConfigBuilder {
        ServiceDiscoveryConfigBuilder::default()
    }

    fn resolve(
        defaults: RegistryDefaults,
        authored_services: BTreeMap<String, ServiceConfig>,
    ) -> Self {
        let services = merge::merge_policy::resolve_all(&authored_services, &defaults);
        Self {
            defaults,
            authored_services,
            services,
        }
    }

    /// Fallback API token for services that do not define their own
    pub fn default_api_token(&self) -> Option<&BearerToken> {
        self.defaults.api_token.as_ref()
    }

    /// Fallback TLS profile for services that do not define their own
    pub fn default_security(&self) -> Option<&SslConfiguration> {
        self.defaults.security.as_ref()
    }

    /// Effective configuration of every service, keyed by service name.
    pub fn services(&self) -> &BTreeMap<String, ServiceConfig> {
        &self.services
    }

    /// Effective configuration of one service.
    pub fn service(&self, service_name: &str) -> Result<&ServiceConfig, LookupError> {
        self.services
            .get(service_name)
            .ok_or_else(|| LookupError::ServiceNotFound(service_name.to_string()))
    }

    /// API token for the service, or the default token if the service does not define one.
    pub fn api_token(&self, service_name: &str) -> Result<Option<&BearerToken>, LookupError> {
        Ok(self.service(service_name)?.api_token.as_ref())
    }

    /// TLS profile for the service, or the default profile if the service does not define one.
    pub fn security(&self, service_name: &str) -> Result<Option<&SslConfiguration>, LookupError> {
        Ok(self.service(service_name)?.security.as_ref())
    }

    /// URIs of the service. Never defaulted.
    pub fn uris(&self, service_name: &str) -> Result<&[String], LookupError> {
        Ok(self.service(service_name)?.uris.as_slice())
    }

    /// Where the effective token of a service comes from.
    pub fn api_token_source(&self, service_name: &str) -> Result<ValueSource, LookupError> {
        let raw = self.authored(service_name)?;
        Ok(ValueSource::of(&raw.api_token, &self.defaults.api_token))
    }

    /// Where the effective TLS profile of a service comes from.
    pub fn security_source(&self, service_name: &str) -> Result<ValueSource, LookupError> {
        let raw = self.authored(service_name)?;
        Ok(ValueSource::of(&raw.security, &self.defaults.security))
    }

    pub fn contains(&self, service_name: &str) -> bool {
        self.services.contains_key(service_name)
    }

    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Check every TLS profile in the document for structural completeness.
    ///
    /// The default profile is checked once; services are checked only for profiles
    /// they author themselves.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(security) = &self.defaults.security {
            if let Err(e) = security.validate() {
                errors.push(ValidationError::DefaultSecurity(e));
            }
        }

        for (name, service) in &self.authored_services {
            if let Some(security) = &service.security {
                if let Err(e) = security.validate() {
                    errors.push(ValidationError::Service(name.clone(), e));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn authored(&self, service_name: &str) -> Result<&ServiceConfig, LookupError> {
        self.authored_services
            .get(service_name)
            .ok_or_else(|| LookupError::ServiceNotFound(service_name.to_string()))
    }
}

impl Default for ServiceDiscoveryConfig {
    fn default() -> Self {
        Self::resolve(RegistryDefaults::default(), BTreeMap::new())
    }
}

/// Builder for [`ServiceDiscoveryConfig`]
#[derive(Debug, Clone, Default)]
pub struct ServiceDiscoveryConfigBuilder {
    defaults: RegistryDefaults,
    services: BTreeMap<String, ServiceConfig>,
    duplicates: Vec<String>,
}

impl ServiceDiscoveryConfigBuilder {
    /// Token inherited by services that do not set their own.
    pub fn default_api_token(mut self, token: impl Into<BearerToken>) -> Self {
        self.defaults.api_token = Some(token.into());
        self
    }

    /// TLS profile inherited by services that do not set their own.
    pub fn default_security(mut self, security: SslConfiguration) -> Self {
        self.defaults.security = Some(security);
        self
    }

    /// Add one service. Adding the same name twice fails `build`.
    pub fn service(mut self, name: impl Into<String>, config: ServiceConfig) -> Self {
        let name = name.into();
        if self.services.insert(name.clone(), config).is_some() {
            self.duplicates.push(name);
        }
        self
    }

    /// Replace all services, including any added earlier with [`service`](Self::service).
    pub fn services<K>(mut self, services: impl IntoIterator<Item = (K, ServiceConfig)>) -> Self
    where
        K: Into<String>,
    {
        self.services.clear();
        self.duplicates.clear();
        for (name, config) in services {
            self = self.service(name, config);
        }
        self
    }

    /// Seed the builder with the defaults and authored services of an existing registry.
    ///
    /// Defaults already set on the builder are kept when `other` has none; services are
    /// added as with [`service`](Self::service).
    pub fn from(mut self, other: &ServiceDiscoveryConfig) -> Self {
        if let Some(token) = &other.defaults.api_token {
            self.defaults.api_token = Some(token.clone());
        }
        if let Some(security) = &other.defaults.security {
            self.defaults.security = Some(security.clone());
        }
        for (name, config) in &other.authored_services {
            self = self.service(name.clone(), config.clone());
        }
        self
    }

    /// Resolve every service against the defaults.
    ///
    /// Fails with [`ApiError::DuplicateService`] if a service name was added twice.
    pub fn build(self) -> Result<ServiceDiscoveryConfig, ApiError> {
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(ApiError::DuplicateService(name));
        }
        Ok(ServiceDiscoveryConfig::resolve(self.defaults, self.services))
    }
}

/// Authored document shape; the registry (de)serializes through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServiceDiscoveryDocument {
    #[serde(
        rename = "apiToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    api_token: Option<BearerToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    security: Option<SslConfiguration>,

    #[serde(default, deserialize_with = "unique_services")]
    services: BTreeMap<String, ServiceConfig>,
}

impl From<ServiceDiscoveryDocument> for ServiceDiscoveryConfig {
    fn from(document: ServiceDiscoveryDocument) -> Self {
        let defaults = RegistryDefaults {
            api_token: document.api_token,
            security: document.security,
        };
        ServiceDiscoveryConfig::resolve(defaults, document.services)
    }
}

impl From<ServiceDiscoveryConfig> for ServiceDiscoveryDocument {
    fn from(config: ServiceDiscoveryConfig) -> Self {
        Self {
            api_token: config.defaults.api_token,
            security: config.defaults.security,
            services: config.authored_services,
        }
    }
}

/// Deserialize the services table, rejecting a repeated service name.
fn unique_services<'de, D>(deserializer: D) -> Result<BTreeMap<String, ServiceConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueServices;

    impl<'de> Visitor<'de> for UniqueServices {
        type Value = BTreeMap<String, ServiceConfig>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of service names to service configurations")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut services = BTreeMap::new();
            while let Some(name) = access.next_key::<String>()? {
                if services.contains_key(&name) {
                    return Err(de::Error::custom(format!(
                        "duplicate service name '{}'",
                        name
                    )));
                }
                let service = access.next_value::<ServiceConfig>()?;
                services.insert(name, service);
            }
            Ok(services)
        }
    }

    deserializer.deserialize_map(UniqueServices)
}

/// Root configuration document: service discovery plus ambient settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub discovery: ServiceDiscoveryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.discovery.validate()
    }
}
