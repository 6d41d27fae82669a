// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the irrigation panel.
//!
//! This module provides the error hierarchy used across the crate: value
//! validation, transport communication, response parsing, and the
//! calculation taxonomy that the orchestrator folds into a
//! [`CalculationOutcome::Failure`](crate::response::CalculationOutcome).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A calculation did not produce a watering time.
    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Panel configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors related to value validation and constraints.
///
/// Only produced by the strict constructors of the bounded value types; the
/// input model clamps instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the constrained field.
        field: &'static str,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// The value was NaN.
    #[error("{0} value is not a number")]
    NotANumber(&'static str),
}

/// Errors related to transport communication with the calculation service.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("request failed with status code {status}: {reason}")]
    HttpStatus {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Connection to the service failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing service responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Why a calculation did not yield a watering time.
///
/// Every variant is caught at the orchestrator boundary and turned into a
/// failure outcome; none reaches the caller as an `Err`.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// The service answered, but its status was not `"success"`.
    #[error("{}", REJECTED_REASON)]
    ServiceRejected {
        /// Status string the service reported.
        status: String,
        /// The `error` field of the response body, if any.
        detail: Option<String>,
    },

    /// The request could not complete.
    #[error("{0}")]
    Transport(#[from] ProtocolError),

    /// The response body could not be understood.
    #[error("{0}")]
    Malformed(#[from] ParseError),
}

/// User-visible reason for a rejected calculation.
pub const REJECTED_REASON: &str = "Failed to calculate watering time";

impl CalculationError {
    /// Returns `true` if the service answered but declined to calculate.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::ServiceRejected { .. })
    }

    /// Returns the human-readable reason shown on the panel.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
