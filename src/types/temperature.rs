// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ambient temperature type.

use std::fmt;

use crate::error::ValueError;

/// Ambient temperature in degrees Celsius (0-40).
///
/// # Examples
///
/// ```
/// use irrigation_panel::types::Temperature;
///
/// let temp = Temperature::new(25.0).unwrap();
/// assert_eq!(temp.value(), 25.0);
///
/// // Out-of-range values are rejected...
/// assert!(Temperature::new(41.0).is_err());
///
/// // ...or clamped onto the nearest bound
/// assert_eq!(Temperature::clamped(41.0), Temperature::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Temperature(f64);

impl Temperature {
    /// Coldest accepted temperature (0°C).
    pub const MIN: Self = Self(0.0);

    /// Hottest accepted temperature (40°C).
    pub const MAX: Self = Self(40.0);

    /// Initial temperature of a fresh panel (20°C).
    pub const DEFAULT: Self = Self(20.0);

    /// Creates a new temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [0, 40], or
    /// `ValueError::NotANumber` for NaN.
    pub fn new(celsius: f64) -> Result<Self, ValueError> {
        super::checked("temperature", celsius, Self::MIN.0, Self::MAX.0).map(Self)
    }

    /// Creates a temperature value, clamping to the valid range.
    ///
    /// NaN maps to [`Temperature::DEFAULT`].
    #[must_use]
    pub fn clamped(celsius: f64) -> Self {
        Self(super::clamp(
            celsius,
            Self::MIN.0,
            Self::MAX.0,
            Self::DEFAULT.0,
        ))
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f64 {
    fn from(value: Temperature) -> Self {
        value.0
    }
}
