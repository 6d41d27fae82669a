// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the calculation service.

use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::protocol::{CalculationService, ServiceResponse};
use crate::request::{CALCULATE_PATH, CalculationRequest};

// ============================================================================
// HttpConfig - Connection parameters for the calculation service
// ============================================================================

/// Configuration for reaching the calculation service over HTTP.
///
/// No timeout is applied unless one is set explicitly; the transport's own
/// behaviour governs how long a request may take.
///
/// # Examples
///
/// ```
/// use irrigation_panel::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Defaults to http://localhost:5000
/// let config = HttpConfig::default();
/// assert_eq!(config.base_url(), "http://localhost:5000");
///
/// let config = HttpConfig::new("192.168.1.20:5000")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.20:5000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpConfig {
    /// Default service base URL.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";

    /// Creates a configuration for the given base URL.
    ///
    /// A missing scheme defaults to `http://`; trailing slashes are dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout, if one was set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let host = self.base_url.split_once("://").map_or("", |(_, rest)| rest);
        if host.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "base URL has no host".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url,
            client,
            timeout: self.timeout,
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(url: String) -> String {
    let url = url.trim().trim_end_matches('/').to_string();
    if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        format!("http://{url}")
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the calculation service.
///
/// Sends `POST /calculate` with a JSON reading and `GET /` for liveness.
///
/// # Examples
///
/// ```no_run
/// use irrigation_panel::protocol::{CalculationService, HttpClient};
///
/// # async fn example() -> irrigation_panel::Result<()> {
/// let client = HttpClient::new("http://localhost:5000")?;
/// let status = client.status().await?;
/// assert!(status.is_running());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    timeout: Option<Duration>,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(base_url).into_client()
    }

    /// Returns the base URL of the service.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transport_error(&self, err: reqwest::Error) -> ProtocolError {
        if err.is_timeout()
            && let Some(timeout) = self.timeout
        {
            return ProtocolError::Timeout(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        }
        if err.is_connect() {
            return ProtocolError::ConnectionFailed(err.to_string());
        }
        ProtocolError::Http(err)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<ServiceResponse, ProtocolError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(ServiceResponse::new(body))
    }
}

impl CalculationService for HttpClient {
    async fn send_calculation(
        &self,
        request: &CalculationRequest,
    ) -> Result<ServiceResponse, ProtocolError> {
        let url = self.build_url(CALCULATE_PATH);

        tracing::debug!(url = %url, request_id = %request.id(), %request, "Sending calculation request");

        let response = self
            .client
            .post(&url)
            .json(request.reading())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_body(response).await
    }

    async fn send_status_query(&self) -> Result<ServiceResponse, ProtocolError> {
        let url = self.build_url("/");

        tracing::debug!(url = %url, "Sending status query");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_body(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::default();
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn http_config_adds_scheme() {
        let config = HttpConfig::new("192.168.1.100:5000");
        assert_eq!(config.base_url(), "http://192.168.1.100:5000");
    }

    #[test]
    fn http_config_keeps_https() {
        let config = HttpConfig::new("https://irrigation.example.com/");
        assert_eq!(config.base_url(), "https://irrigation.example.com");
    }

    #[test]
    fn http_config_with_timeout() {
        let config = HttpConfig::default().with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn http_config_rejects_empty_host() {
        let result = HttpConfig::new("").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn build_url_appends_path() {
        let client = HttpClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.build_url(CALCULATE_PATH),
            "http://localhost:5000/calculate"
        );
        assert_eq!(client.build_url("/"), "http://localhost:5000/");
    }

    #[test]
    fn http_config_into_client() {
        let client = HttpConfig::new("localhost:8080").into_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
