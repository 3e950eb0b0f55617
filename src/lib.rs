//! Service Config: service discovery configuration
//!
//! Per-service URIs, API tokens and TLS profiles, with registry-wide defaults applied
//! to services that leave a token or TLS profile unset.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod security;
pub mod token;

pub use crate::config::{ServiceConfig, ServiceDiscoveryConfig};
pub use crate::error::{ApiError, LookupError};
pub use crate::security::SslConfiguration;
pub use crate::token::BearerToken;
