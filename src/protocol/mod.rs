// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport to the remote calculation service.
//!
//! The [`CalculationService`] trait is the seam between the panel and the
//! network. [`HttpClient`] implements it over HTTP; tests and alternative
//! transports can provide their own implementation.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use crate::error::{Error, ProtocolError};
use crate::request::CalculationRequest;
use crate::response::ServiceStatus;

/// Raw response from the calculation service.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    /// The raw JSON response body.
    body: String,
}

impl ServiceResponse {
    /// Creates a new service response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::error::ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// A transport able to reach the calculation service.
#[allow(async_fn_in_trait)]
pub trait CalculationService {
    /// Sends a calculation request and returns the raw response.
    ///
    /// Implementations must return `Err` for any non-2xx answer.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails to send or receive.
    async fn send_calculation(
        &self,
        request: &CalculationRequest,
    ) -> Result<ServiceResponse, ProtocolError>;

    /// Queries the service liveness route and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    async fn send_status_query(&self) -> Result<ServiceResponse, ProtocolError>;

    /// Queries and parses the service liveness status.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a status object.
    async fn status(&self) -> Result<ServiceStatus, Error> {
        let response = self.send_status_query().await?;
        Ok(response.parse()?)
    }
}
