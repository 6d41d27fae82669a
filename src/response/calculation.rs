// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calculation service response bodies.

use serde::Deserialize;

use crate::error::{CalculationError, ParseError};

/// Status string the service uses for a successful answer.
pub const SUCCESS_STATUS: &str = "success";

/// Body returned by `POST /calculate`.
///
/// The service answers in one of two shapes:
/// - `{"status": "success", "watering_time": 14.6}`
/// - `{"status": "error", "error": "Temperature must be between 0 and 40"}`
///
/// `watering_time` is only read when `status` is `"success"`. Any other
/// status, including a missing or non-string one, is a rejection.
///
/// # Examples
///
/// ```
/// use irrigation_panel::response::CalculationResponse;
///
/// let json = r#"{"status": "success", "watering_time": 15}"#;
/// let response: CalculationResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.into_watering_time().unwrap(), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationResponse {
    #[serde(default)]
    status: Option<serde_json::Value>,
    #[serde(default)]
    watering_time: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

impl CalculationResponse {
    /// Returns the status string, if the service sent a string.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().and_then(serde_json::Value::as_str)
    }

    /// Returns `true` if the status is `"success"`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status() == Some(SUCCESS_STATUS)
    }

    /// Returns the status as text for diagnostics; empty when absent.
    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.status {
            Some(serde_json::Value::String(status)) => status.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// Returns the `error` detail, if the service sent one.
    #[must_use]
    pub fn error_detail(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Extracts the watering time in minutes.
    ///
    /// # Errors
    ///
    /// - `CalculationError::ServiceRejected` if the status is not `"success"`
    /// - `CalculationError::Malformed` if a successful body lacks `watering_time`
    pub fn into_watering_time(self) -> Result<f64, CalculationError> {
        if !self.is_success() {
            return Err(CalculationError::ServiceRejected {
                status: self.status_text(),
                detail: self.error,
            });
        }
        self.watering_time
            .ok_or_else(|| ParseError::MissingField("watering_time".to_string()).into())
    }
}

/// Body returned by `GET /`, the service liveness route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceStatus {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

impl ServiceStatus {
    /// Returns `true` if the service reports itself as running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Returns the status string as reported.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the human-readable message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
