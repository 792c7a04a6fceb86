use std::time::Duration;

use discovery::{DiscoveryConfig, REGISTRY_ENV};
use error::ConfigError;
use serde::{Deserialize, Serialize};

/// Caller service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerConfig {
    /// HTTP listen address
    pub http_addr: String,

    /// Logical name of the greeter in the registry
    pub greeter_service: String,

    /// Static registry: logical name -> base URL
    pub registry: DiscoveryConfig,

    /// Total timeout for the upstream call in milliseconds
    pub upstream_timeout_ms: u64,

    /// Connect timeout for the upstream call in milliseconds
    pub upstream_connect_timeout_ms: u64,

    /// Service version
    pub version: String,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8080".to_string(),
            greeter_service: "hello".to_string(),
            registry: DiscoveryConfig::default(),
            upstream_timeout_ms: 5_000,
            upstream_connect_timeout_ms: 2_000,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl CallerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but unparsable keys are errors.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = lookup("HTTP_ADDR") {
            config.http_addr = addr;
        }

        if let Some(name) = lookup("GREETER_SERVICE_NAME") {
            if name.trim().is_empty() {
                return Err(ConfigError::Empty("GREETER_SERVICE_NAME".to_string()));
            }
            config.greeter_service = name.trim().to_string();
        }

        match lookup(REGISTRY_ENV) {
            Some(table) => {
                config.registry = DiscoveryConfig::parse(&table).map_err(|e| ConfigError::Invalid {
                    key: REGISTRY_ENV.to_string(),
                    reason: e.to_string(),
                })?;
            }
            None => tracing::warn!("{} is not set, no services can be resolved", REGISTRY_ENV),
        }

        if let Some(ms) = lookup("UPSTREAM_TIMEOUT_MS") {
            config.upstream_timeout_ms = parse_millis("UPSTREAM_TIMEOUT_MS", &ms)?;
        }

        if let Some(ms) = lookup("UPSTREAM_CONNECT_TIMEOUT_MS") {
            config.upstream_connect_timeout_ms = parse_millis("UPSTREAM_CONNECT_TIMEOUT_MS", &ms)?;
        }

        Ok(config)
    }

    /// Get upstream timeout as Duration
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    /// Get upstream connect timeout as Duration
    pub fn upstream_connect_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_connect_timeout_ms)
    }
}

fn parse_millis(key: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            key: key.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}
