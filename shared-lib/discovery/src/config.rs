//! Registry configuration.

use std::collections::BTreeMap;

use error::DiscoveryError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable holding the static registry table.
pub const REGISTRY_ENV: &str = "SERVICE_REGISTRY";

/// Static registry configuration: logical service name → base URL.
///
/// The textual form is a comma separated list of `name=url` pairs, e.g.
/// `hello=http://127.0.0.1:8081,billing=http://billing.internal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Registered services
    pub services: BTreeMap<String, Url>,
}

impl DiscoveryConfig {
    /// Parse the `name=url[,name=url...]` form.
    ///
    /// Blank entries are skipped. An entry without `=`, with an empty name,
    /// with a URL that is not absolute `http`/`https`, or repeating an
    /// earlier name is rejected.
    pub fn parse(table: &str) -> Result<Self, DiscoveryError> {
        let mut services = BTreeMap::new();

        for entry in table.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, address) = entry.split_once('=').ok_or_else(|| invalid(entry, "expected name=url"))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(invalid(entry, "service name is empty"));
            }

            let url = parse_base_url(address.trim()).map_err(|reason| invalid(entry, &reason))?;
            if services.insert(name.to_string(), url).is_some() {
                return Err(invalid(entry, "service registered twice"));
            }
        }

        Ok(Self { services })
    }

    /// Register one more service.
    pub fn with_service(mut self, name: impl Into<String>, url: Url) -> Self {
        self.services.insert(name.into(), url);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

fn parse_base_url(address: &str) -> Result<Url, String> {
    let url = Url::parse(address).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme {:?}", other)),
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(url)
}

fn invalid(entry: &str, reason: &str) -> DiscoveryError {
    DiscoveryError::InvalidEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    }
}
