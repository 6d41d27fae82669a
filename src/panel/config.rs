// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration for HTTP-backed panels.

use std::time::Duration;

use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};
use crate::reading::Reading;

use super::ControlPanel;

/// Environment variable holding the service base URL.
pub const ENV_API_URL: &str = "IRRIGATION_API_URL";

/// Environment variable holding an optional request timeout in seconds.
pub const ENV_API_TIMEOUT_SECS: &str = "IRRIGATION_API_TIMEOUT_SECS";

/// Configuration for building a [`ControlPanel`] that talks HTTP.
///
/// # Examples
///
/// ```
/// use irrigation_panel::panel::PanelConfig;
/// use irrigation_panel::protocol::HttpConfig;
///
/// let config = PanelConfig::new(HttpConfig::new("http://garden-pi:5000"));
/// assert_eq!(config.http().base_url(), "http://garden-pi:5000");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelConfig {
    http: HttpConfig,
    initial_reading: Reading,
}

impl PanelConfig {
    /// Creates a configuration with default initial inputs.
    #[must_use]
    pub fn new(http: HttpConfig) -> Self {
        Self {
            http,
            initial_reading: Reading::default(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// Uses `IRRIGATION_API_URL` for the base URL (falling back to
    /// `http://localhost:5000`) and `IRRIGATION_API_TIMEOUT_SECS` for an
    /// optional timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if the timeout is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps variable names
    /// to values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if the timeout is not a
    /// positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut http = lookup(ENV_API_URL)
            .filter(|url| !url.trim().is_empty())
            .map_or_else(HttpConfig::default, HttpConfig::new);

        if let Some(raw) = lookup(ENV_API_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::InvalidConfiguration(format!(
                        "{ENV_API_TIMEOUT_SECS} must be a positive integer, got {raw:?}"
                    ))
                })?;
            http = http.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self::new(http))
    }

    /// Sets the inputs a new panel starts with.
    #[must_use]
    pub fn with_initial_reading(mut self, reading: Reading) -> Self {
        self.initial_reading = reading;
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn http(&self) -> &HttpConfig {
        &self.http
    }

    /// Returns the initial inputs.
    #[must_use]
    pub fn initial_reading(&self) -> Reading {
        self.initial_reading
    }

    /// Builds a panel from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_panel(self) -> Result<ControlPanel<HttpClient>, Error> {
        let client = self.http.into_client()?;
        Ok(ControlPanel::with_reading(client, self.initial_reading))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = PanelConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.http().base_url(), "http://localhost:5000");
        assert!(config.http().timeout().is_none());
        assert_eq!(config.initial_reading(), Reading::default());
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = PanelConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "garden-pi:5000"),
            (ENV_API_TIMEOUT_SECS, "8"),
        ]))
        .unwrap();
        assert_eq!(config.http().base_url(), "http://garden-pi:5000");
        assert_eq!(config.http().timeout(), Some(Duration::from_secs(8)));
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = PanelConfig::from_lookup(lookup_from(&[(ENV_API_URL, "  ")])).unwrap();
        assert_eq!(config.http().base_url(), HttpConfig::DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_bad_timeout() {
        for raw in ["0", "-3", "soon"] {
            let result = PanelConfig::from_lookup(lookup_from(&[(ENV_API_TIMEOUT_SECS, raw)]));
            assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn into_panel_uses_initial_reading() {
        let reading = Reading::clamped(10.0, 30.0, 70.0);
        let panel = PanelConfig::default()
            .with_initial_reading(reading)
            .into_panel()
            .unwrap();
        assert_eq!(panel.reading(), reading);
    }
}
