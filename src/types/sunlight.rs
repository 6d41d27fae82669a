// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sunlight intensity type.

use std::fmt;

use crate::error::ValueError;

/// Relative sunlight intensity as a percentage (0-100).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Sunlight(f64);

impl Sunlight {
    /// Full shade (0%).
    pub const MIN: Self = Self(0.0);

    /// Full sun (100%).
    pub const MAX: Self = Self(100.0);

    /// Initial intensity of a fresh panel (50%).
    pub const DEFAULT: Self = Self(50.0);

    /// Creates a new sunlight value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [0, 100], or
    /// `ValueError::NotANumber` for NaN.
    pub fn new(percent: f64) -> Result<Self, ValueError> {
        super::checked("sunlight", percent, Self::MIN.0, Self::MAX.0).map(Self)
    }

    /// Creates a sunlight value, clamping to the valid range.
    #[must_use]
    pub fn clamped(percent: f64) -> Self {
        Self(super::clamp(
            percent,
            Self::MIN.0,
            Self::MAX.0,
            Self::DEFAULT.0,
        ))
    }

    /// Returns the intensity percentage.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Sunlight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Sunlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<f64> for Sunlight {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sunlight> for f64 {
    fn from(value: Sunlight) -> Self {
        value.0
    }
}
