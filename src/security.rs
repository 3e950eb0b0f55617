//! Transport security profiles.
//!
//! A profile only references TLS material (trust store, optional key store). The
//! registry treats it as a value; no file is read and no handshake happens here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Format of a trust store or key store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StoreType {
    #[default]
    Jks,
    Pem,
    Pkcs12,
    Puppet,
}

impl std::fmt::Display for StoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreType::Jks => "JKS",
            StoreType::Pem => "PEM",
            StoreType::Pkcs12 => "PKCS12",
            StoreType::Puppet => "PUPPET",
        };
        f.write_str(name)
    }
}

/// TLS configuration for talking to a service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslConfiguration {
    #[serde(rename = "trustStorePath")]
    pub trust_store_path: PathBuf,

    #[serde(rename = "trustStoreType", default)]
    pub trust_store_type: StoreType,

    #[serde(
        rename = "keyStorePath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub key_store_path: Option<PathBuf>,

    #[serde(
        rename = "keyStorePassword",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub key_store_password: Option<String>,

    #[serde(rename = "keyStoreType", default)]
    pub key_store_type: StoreType,

    /// Alias of the key entry to present when the key store holds several
    #[serde(
        rename = "keyStoreKeyAlias",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub key_store_key_alias: Option<String>,
}

impl SslConfiguration {
    /// Profile that only verifies the peer (no client certificate).
    pub fn trust_only(trust_store_path: impl Into<PathBuf>) -> Self {
        Self {
            trust_store_path: trust_store_path.into(),
            trust_store_type: StoreType::default(),
            key_store_path: None,
            key_store_password: None,
            key_store_type: StoreType::default(),
            key_store_key_alias: None,
        }
    }

    pub fn with_trust_store_type(mut self, store_type: StoreType) -> Self {
        self.trust_store_type = store_type;
        self
    }

    /// Attach a client key store for mutual TLS.
    pub fn with_key_store(
        mut self,
        path: impl Into<PathBuf>,
        password: impl Into<String>,
        store_type: StoreType,
    ) -> Self {
        self.key_store_path = Some(path.into());
        self.key_store_password = Some(password.into());
        self.key_store_type = store_type;
        self
    }

    pub fn with_key_alias(mut self, alias: impl Into<String>) -> Self {
        self.key_store_key_alias = Some(alias.into());
        self
    }

    /// Whether a client certificate is presented.
    pub fn is_mutual(&self) -> bool {
        self.key_store_path.is_some()
    }

    /// Check that the profile is structurally complete.
    pub fn validate(&self) -> Result<(), String> {
        if self.trust_store_path.as_os_str().is_empty() {
            return Err("trustStorePath cannot be empty".to_string());
        }
        match (&self.key_store_path, &self.key_store_password) {
            (Some(_), None) => {
                return Err("keyStorePassword must be set when keyStorePath is set".to_string())
            }
            (None, Some(_)) => {
                return Err("keyStorePath must be set when keyStorePassword is set".to_string())
            }
            _ => {}
        }
        if self.key_store_key_alias.is_some() && self.key_store_path.is_none() {
            return Err("keyStoreKeyAlias requires keyStorePath".to_string());
        }
        Ok(())
    }
}

impl std::fmt::Debug for SslConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SslConfiguration")
            .field("trust_store_path", &self.trust_store_path)
            .field("trust_store_type", &self.trust_store_type)
            .field("key_store_path", &self.key_store_path)
            .field(
                "key_store_password",
                &self.key_store_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("key_store_type", &self.key_store_type)
            .field("key_store_key_alias", &self.key_store_key_alias)
            .finish()
    }
}
