//! HTTP client for fetching the status page from a device.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use modemwatch_types::Status;

use crate::arris::parse_status;
use crate::error::AdapterError;

/// Default device endpoint on a DOCSIS network.
const DEFAULT_ENDPOINT: &str = "http://192.168.100.1";

/// Path of the status page on the device.
const STATUS_PATH: &str = "/cgi-bin/status_cgi";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the HTML status page of an Arris Touchstone cable modem.
#[derive(Debug, Clone)]
pub struct ArrisClient {
    client: Client,
    endpoint: String,
}

impl ArrisClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> ArrisClientBuilder {
        ArrisClientBuilder::default()
    }

    /// Fetch and parse the device status page.
    pub async fn status(&self) -> Result<Status, AdapterError> {
        let url = format!("{}{}", self.endpoint, STATUS_PATH);
        debug!("fetching status page from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AdapterError::Http(format!(
                "device returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        debug!("fetched {} bytes from {}", body.len(), url);

        Ok(parse_status(&body)?)
    }
}

/// Builder for ArrisClient.
#[derive(Debug, Default)]
pub struct ArrisClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl ArrisClientBuilder {
    /// Set the device endpoint (e.g., "http://192.168.100.1").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout (default: 5 seconds). A zero duration
    /// disables the timeout entirely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> ArrisClient {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut builder = Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().expect("Failed to build HTTP client");

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        ArrisClient {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}
