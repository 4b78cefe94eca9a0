//! HTTP transport for the betting line API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::settings::HttpConfig;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::Transport;

/// `reqwest`-backed [`Transport`] sending a fixed header profile.
///
/// Every request is bounded by the configured timeouts so a hung fetch
/// surfaces as a fetch error instead of holding a worker forever. There are
/// no retries.
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Build the client from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid headers or when the TLS
    /// backend cannot be initialised.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(config.header_map()?)
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder.build().map_err(|err| ConfigError::InvalidValue {
            field: "http",
            reason: err.to_string(),
        })?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| Error::fetch(url, err))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Failed to fetch data from URL");
            return Err(Error::fetch(url, format!("HTTP status {status}")));
        }

        response.text().await.map_err(|err| Error::fetch(url, err))
    }
}
