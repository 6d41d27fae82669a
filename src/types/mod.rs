// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded value types for garden conditions.
//!
//! Each type guarantees its value stays within a closed range. Two ways of
//! construction are offered:
//!
//! - `new` rejects out-of-range input with [`ValueError`]
//! - `clamped` pulls out-of-range input onto the nearest bound
//!
//! The [`InputModel`](crate::reading::InputModel) always clamps, mirroring a
//! range-bound slider that cannot be dragged past its ends.
//!
//! # Types
//!
//! - [`SoilMoisture`] - Soil water content (0-100%, default 50)
//! - [`Temperature`] - Ambient temperature (0-40°C, default 20)
//! - [`Sunlight`] - Sunlight intensity (0-100%, default 50)

mod moisture;
mod sunlight;
mod temperature;

pub use moisture::SoilMoisture;
pub use sunlight::Sunlight;
pub use temperature::Temperature;

use crate::error::ValueError;

/// Validates `value` against `[min, max]`.
fn checked(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ValueError> {
    if value.is_nan() {
        return Err(ValueError::NotANumber(field));
    }
    if !(min..=max).contains(&value) {
        return Err(ValueError::OutOfRange {
            field,
            min,
            max,
            actual: value,
        });
    }
    Ok(value)
}

/// Pulls `value` onto `[min, max]`; NaN falls back to `default`.
fn clamp(value: f64, min: f64, max: f64, default: f64) -> f64 {
    if value.is_nan() {
        default
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_bounds() {
        assert_eq!(checked("x", 0.0, 0.0, 40.0), Ok(0.0));
        assert_eq!(checked("x", 40.0, 0.0, 40.0), Ok(40.0));
    }

    #[test]
    fn checked_rejects_nan() {
        assert_eq!(
            checked("x", f64::NAN, 0.0, 40.0),
            Err(ValueError::NotANumber("x"))
        );
    }

    #[test]
    fn clamp_handles_infinities() {
        assert!((clamp(f64::INFINITY, 0.0, 40.0, 20.0) - 40.0).abs() < f64::EPSILON);
        assert!(clamp(f64::NEG_INFINITY, 0.0, 40.0, 20.0).abs() < f64::EPSILON);
        assert!((clamp(f64::NAN, 0.0, 40.0, 20.0) - 20.0).abs() < f64::EPSILON);
    }
}
