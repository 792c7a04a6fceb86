//! Outbound HTTP client
//!
//! One `reqwest::Client` is built at startup and shared by every request.
//! Calls are made once: no retry, no fallback.

use std::time::Duration;

use error::UpstreamError;
use url::Url;

#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Build the shared client with a total and a connect timeout.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(format!("caller-service/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        Ok(Self { client })
    }

    /// GET `url` and return the body as text. Non-2xx is an error.
    pub async fn get_text(&self, url: &Url) -> Result<String, UpstreamError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| classify(url, e))
    }
}

fn classify(url: &Url, err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout(url.to_string())
    } else if err.is_connect() {
        UpstreamError::Connect(url.to_string())
    } else {
        UpstreamError::Request(err.to_string())
    }
}

/// `<base>/`: the root path under a resolved base address.
///
/// A base with a path prefix keeps it (`http://h/api` -> `http://h/api/`).
pub fn root_url(base: &Url) -> Url {
    let mut url = base.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    url
}
