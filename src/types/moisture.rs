// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Soil moisture type.
//!
//! Soil moisture is the share of water held by the soil, expressed as a
//! percentage where 0 is bone dry and 100 is saturated.

use std::fmt;

use crate::error::ValueError;

/// Soil water content as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use irrigation_panel::types::SoilMoisture;
///
/// let moisture = SoilMoisture::new(35.0).unwrap();
/// assert_eq!(moisture.to_string(), "35%");
///
/// assert_eq!(SoilMoisture::clamped(120.0), SoilMoisture::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SoilMoisture(f64);

impl SoilMoisture {
    /// Completely dry soil (0%).
    pub const MIN: Self = Self(0.0);

    /// Saturated soil (100%).
    pub const MAX: Self = Self(100.0);

    /// Initial moisture of a fresh panel (50%).
    pub const DEFAULT: Self = Self(50.0);

    /// Creates a new soil moisture value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [0, 100], or
    /// `ValueError::NotANumber` for NaN.
    pub fn new(percent: f64) -> Result<Self, ValueError> {
        super::checked("soil moisture", percent, Self::MIN.0, Self::MAX.0).map(Self)
    }

    /// Creates a soil moisture value, clamping to the valid range.
    ///
    /// NaN maps to [`SoilMoisture::DEFAULT`].
    #[must_use]
    pub fn clamped(percent: f64) -> Self {
        Self(super::clamp(
            percent,
            Self::MIN.0,
            Self::MAX.0,
            Self::DEFAULT.0,
        ))
    }

    /// Returns the moisture percentage.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for SoilMoisture {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SoilMoisture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<f64> for SoilMoisture {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SoilMoisture> for f64 {
    fn from(value: SoilMoisture) -> Self {
        value.0
    }
}
