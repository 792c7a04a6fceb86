use error::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable holding the greeting (`hello.text`).
pub const MESSAGE_ENV: &str = "HELLO_TEXT";

/// Environment variable holding the listen address.
pub const HTTP_ADDR_ENV: &str = "HTTP_ADDR";

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8081";

/// Greeter service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreeterConfig {
    /// HTTP listen address
    pub http_addr: String,

    /// Greeting returned on `GET /`
    pub message: String,

    /// Service version
    pub version: String,
}

impl GreeterConfig {
    /// Configuration with the given greeting and default everything else.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            message: message.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// The greeting is required: absent or blank is a configuration error.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let message = lookup(MESSAGE_ENV).ok_or_else(|| ConfigError::Missing(MESSAGE_ENV.to_string()))?;
        if message.trim().is_empty() {
            return Err(ConfigError::Empty(MESSAGE_ENV.to_string()));
        }

        let mut config = Self::new(message);

        if let Some(addr) = lookup(HTTP_ADDR_ENV) {
            config.http_addr = addr;
        }

        Ok(config)
    }
}
