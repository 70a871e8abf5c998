//! Application configuration from the environment.

use std::net::SocketAddr;

use crate::entur::{DEFAULT_BASE_URL, EnturConfig};
use crate::query::DEFAULT_TIMEZONE;

/// Default listen address of the HTTP handler.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable could not be parsed
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Settings shared by the server and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Sent as the client-name header on every journey planner call
    pub client_name: String,
    /// Journey planner GraphQL endpoint
    pub base_url: String,
    /// Zone used for departure and display times
    pub timezone: String,
    /// Server listen address
    pub bind_addr: SocketAddr,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Journey planner request timeout, if any
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let client_name = var("CLIENT_NAME").ok_or(ConfigError::Missing("CLIENT_NAME"))?;

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let timeout_secs = var("REQUEST_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>().map_err(|_| ConfigError::Invalid {
                    name: "REQUEST_TIMEOUT_SECS",
                    value: v.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            client_name,
            base_url: var("ENTUR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timezone: var("HOME_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            bind_addr,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            timeout_secs,
        })
    }

    /// Journey planner client settings.
    pub fn entur(&self) -> EnturConfig {
        let config = EnturConfig::new(&self.client_name).with_base_url(&self.base_url);
        match self.timeout_secs {
            Some(secs) => config.with_timeout(secs),
            None => config,
        }
    }
}
