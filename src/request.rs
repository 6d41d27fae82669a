// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound calculation request.

use std::fmt;

use uuid::Uuid;

use crate::reading::Reading;

/// Path of the calculation endpoint, relative to the service base URL.
pub const CALCULATE_PATH: &str = "/calculate";

/// One outbound calculation, built from a [`Reading`] snapshot.
///
/// The request is immutable and carries a random identifier used to
/// correlate log events of the same calculation. Only the reading is sent
/// over the wire.
///
/// # Examples
///
/// ```
/// use irrigation_panel::reading::Reading;
/// use irrigation_panel::request::CalculationRequest;
///
/// let request = CalculationRequest::new(Reading::default());
/// let body = serde_json::to_value(request.reading()).unwrap();
/// assert_eq!(body["soil_moisture"], 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    id: Uuid,
    reading: Reading,
}

impl CalculationRequest {
    /// Creates a request with a fresh identifier.
    #[must_use]
    pub fn new(reading: Reading) -> Self {
        Self {
            id: Uuid::new_v4(),
            reading,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the reading this request was built from; it is also the JSON
    /// body sent to the service.
    #[must_use]
    pub fn reading(&self) -> &Reading {
        &self.reading
    }
}

impl fmt::Display for CalculationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "moisture={} temperature={} sunlight={}",
            self.reading.soil_moisture, self.reading.temperature, self.reading.sunlight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_get_distinct_ids() {
        let a = CalculationRequest::new(Reading::default());
        let b = CalculationRequest::new(Reading::default());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.reading(), b.reading());
    }

    #[test]
    fn body_has_exactly_three_fields() {
        let request = CalculationRequest::new(Reading::clamped(0.0, 40.0, 100.0));
        let body = serde_json::to_value(request.reading()).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(body["soil_moisture"], 0.0);
        assert_eq!(body["temperature"], 40.0);
        assert_eq!(body["sunlight"], 100.0);
    }

    #[test]
    fn request_display() {
        let request = CalculationRequest::new(Reading::default());
        assert_eq!(
            request.to_string(),
            "moisture=50% temperature=20°C sunlight=50%"
        );
    }
}
