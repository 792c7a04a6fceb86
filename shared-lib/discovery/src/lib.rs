//! Logical service name resolution.
//!
//! Turns a symbolic service name (e.g. `"hello"`) into a concrete base URL.
//! The only backend shipped here is a static name → URL table loaded from
//! configuration; anything else (DNS, a registry client) plugs in behind
//! [`ServiceDiscovery`].

mod config;
mod registry;

pub use config::{DiscoveryConfig, REGISTRY_ENV};
pub use registry::{ServiceDiscovery, StaticDiscovery};

// Re-export for implementors of ServiceDiscovery
pub use error::DiscoveryError;
pub use url::Url;
