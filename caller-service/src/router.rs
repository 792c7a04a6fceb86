//! Service Router
//!
//! Routes calls to other services by logical name: resolve through
//! discovery, then one GET on the resolved root.

use std::sync::Arc;

use discovery::ServiceDiscovery;
use error::AppError;

use crate::upstream::{root_url, UpstreamClient};

/// Calls the greeter through the registry.
pub struct ServiceRouter {
    discovery: Arc<dyn ServiceDiscovery>,
    client: UpstreamClient,
    greeter_service: String,
}

impl ServiceRouter {
    pub fn new(
        discovery: Arc<dyn ServiceDiscovery>,
        client: UpstreamClient,
        greeter_service: impl Into<String>,
    ) -> Self {
        Self {
            discovery,
            client,
            greeter_service: greeter_service.into(),
        }
    }

    pub fn greeter_service(&self) -> &str {
        &self.greeter_service
    }

    /// Fetch the greeting from whichever instance the registry names.
    pub async fn get_greeting(&self) -> Result<String, AppError> {
        let base = self.discovery.resolve(&self.greeter_service)?;
        let url = root_url(&base);
        let greeting = self.client.get_text(&url).await?;
        Ok(greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discovery::StaticDiscovery;
    use error::DiscoveryError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unregistered_greeter_fails_without_calling_out() {
        let client = UpstreamClient::new(Duration::from_secs(1), Duration::from_secs(1)).unwrap();
        let router = ServiceRouter::new(Arc::new(StaticDiscovery::default()), client, "hello");

        let result = router.get_greeting().await;
        assert!(matches!(
            result,
            Err(AppError::Discovery(DiscoveryError::NotRegistered(name))) if name == "hello"
        ));
    }
}
