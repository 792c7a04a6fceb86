//! Service discovery trait and the static implementation.

use std::collections::BTreeMap;

use error::DiscoveryError;
use url::Url;

use crate::config::DiscoveryConfig;

/// Resolves a logical service name to the base URL of one reachable instance.
pub trait ServiceDiscovery: Send + Sync {
    fn resolve(&self, service_name: &str) -> Result<Url, DiscoveryError>;
}

/// Discovery from a static name → URL table.
#[derive(Debug, Clone, Default)]
pub struct StaticDiscovery {
    services: BTreeMap<String, Url>,
}

impl StaticDiscovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            services: config.services,
        }
    }

    /// Build from `(name, url)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Url)>) -> Self {
        Self {
            services: pairs
                .into_iter()
                .map(|(name, url)| (name.to_string(), url))
                .collect(),
        }
    }

    /// Registered service names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }
}

impl ServiceDiscovery for StaticDiscovery {
    fn resolve(&self, service_name: &str) -> Result<Url, DiscoveryError> {
        let url = self
            .services
            .get(service_name)
            .cloned()
            .ok_or_else(|| DiscoveryError::NotRegistered(service_name.to_string()))?;

        tracing::debug!(service = service_name, %url, "resolved service");
        Ok(url)
    }
}
