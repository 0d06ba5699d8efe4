/// HTTP transport for submitting request URLs to the remote API.
///
/// The transport is the injection seam of the client: anything that can turn
/// a fully formed request URL into a response body. [`HttpTransport`] is the
/// reqwest-backed default.
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "wolfram-alpha-client";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response body was empty")]
    EmptyBody,
}

/// Turns a fully formed request URL into a response body.
///
/// A blank body counts as a transport failure; implementations never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, TransportError>;
}

/// Configuration for [`HttpTransport`], loaded explicitly from environment
/// variables.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Per-request timeout. A hung remote call fails instead of hanging the
    /// whole operation.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpTransportConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `WOLFRAM_TIMEOUT_SECS`: per-request timeout in seconds (default 30)
    pub fn from_env() -> Self {
        let timeout = std::env::var("WOLFRAM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            timeout,
            ..Self::default()
        }
    }
}

/// Reqwest-backed transport with a per-request timeout.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(HttpTransportConfig::default())
    }

    pub fn with_config(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self {
            http,
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        debug!(url, "fetching");
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(TransportError::EmptyBody);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = HttpTransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "wolfram-alpha-client");
    }
}
