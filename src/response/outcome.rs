// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolved result of one calculation.

use serde::{Deserialize, Serialize};

use crate::error::CalculationError;

/// The result of a calculation: a watering time or a failure reason.
///
/// Exactly one outcome is produced per calculation request.
///
/// # Examples
///
/// ```
/// use irrigation_panel::response::CalculationOutcome;
///
/// let outcome = CalculationOutcome::success(15.0);
/// assert!(outcome.is_success());
/// assert_eq!(outcome.watering_time_minutes(), Some(15.0));
///
/// let failed = CalculationOutcome::failure("connection refused");
/// assert_eq!(failed.reason(), Some("connection refused"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationOutcome {
    /// The service recommended a watering time.
    Success {
        /// Recommended watering duration in minutes.
        watering_time_minutes: f64,
    },

    /// No recommendation could be obtained.
    Failure {
        /// Human-readable reason shown to the user.
        reason: String,
    },
}

impl CalculationOutcome {
    /// Creates a success outcome.
    #[must_use]
    pub fn success(watering_time_minutes: f64) -> Self {
        Self::Success {
            watering_time_minutes,
        }
    }

    /// Creates a failure outcome.
    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// Returns `true` for a success outcome.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the watering time for a success outcome.
    #[must_use]
    pub fn watering_time_minutes(&self) -> Option<f64> {
        match self {
            Self::Success {
                watering_time_minutes,
            } => Some(*watering_time_minutes),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the reason for a failure outcome.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason } => Some(reason),
        }
    }
}

impl From<Result<f64, CalculationError>> for CalculationOutcome {
    fn from(result: Result<f64, CalculationError>) -> Self {
        match result {
            Ok(minutes) => Self::success(minutes),
            Err(err) => Self::failure(err.reason()),
        }
    }
}
