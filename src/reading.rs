// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Garden condition inputs.
//!
//! [`InputModel`] holds the three values the user edits. [`Reading`] is a
//! copy of those values taken at one instant; it is what a calculation is
//! built from, so editing the model afterwards never affects a calculation
//! that is already in flight.
//!
//! # Examples
//!
//! ```
//! use irrigation_panel::reading::InputModel;
//!
//! let mut inputs = InputModel::new();
//! inputs.set_temperature(41.0);
//!
//! // Out-of-range values are clamped onto the nearest bound
//! assert_eq!(inputs.temperature().value(), 40.0);
//!
//! let reading = inputs.snapshot();
//! inputs.set_temperature(10.0);
//! assert_eq!(reading.temperature.value(), 40.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::{SoilMoisture, Sunlight, Temperature};

/// Snapshot of the three environmental inputs.
///
/// Serializes to the calculation payload shape:
/// `{"soil_moisture": n, "temperature": n, "sunlight": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Soil water content (0-100%).
    pub soil_moisture: SoilMoisture,
    /// Ambient temperature (0-40°C).
    pub temperature: Temperature,
    /// Sunlight intensity (0-100%).
    pub sunlight: Sunlight,
}

impl Reading {
    /// Creates a reading from already-bounded values.
    #[must_use]
    pub fn new(soil_moisture: SoilMoisture, temperature: Temperature, sunlight: Sunlight) -> Self {
        Self {
            soil_moisture,
            temperature,
            sunlight,
        }
    }

    /// Creates a reading from raw numbers, rejecting out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValueError`] encountered, checking soil moisture,
    /// then temperature, then sunlight.
    pub fn try_from_raw(soil_moisture: f64, temperature: f64, sunlight: f64) -> Result<Self, ValueError> {
        Ok(Self {
            soil_moisture: SoilMoisture::new(soil_moisture)?,
            temperature: Temperature::new(temperature)?,
            sunlight: Sunlight::new(sunlight)?,
        })
    }

    /// Creates a reading from raw numbers, clamping each onto its range.
    #[must_use]
    pub fn clamped(soil_moisture: f64, temperature: f64, sunlight: f64) -> Self {
        Self {
            soil_moisture: SoilMoisture::clamped(soil_moisture),
            temperature: Temperature::clamped(temperature),
            sunlight: Sunlight::clamped(sunlight),
        }
    }
}

/// The user-editable inputs of one panel.
///
/// Each setter clamps onto the field's range and has no other effect.
/// Getters are side-effect free. The model lives in memory only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputModel {
    current: Reading,
}

impl InputModel {
    /// Creates a model holding the default values (50%, 20°C, 50%).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model starting from the given reading.
    #[must_use]
    pub fn with_reading(reading: Reading) -> Self {
        Self { current: reading }
    }

    /// Returns the current soil moisture.
    #[must_use]
    pub fn soil_moisture(&self) -> SoilMoisture {
        self.current.soil_moisture
    }

    /// Returns the current temperature.
    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.current.temperature
    }

    /// Returns the current sunlight intensity.
    #[must_use]
    pub fn sunlight(&self) -> Sunlight {
        self.current.sunlight
    }

    /// Sets soil moisture, clamping to [0, 100].
    pub fn set_soil_moisture(&mut self, percent: f64) {
        self.current.soil_moisture = SoilMoisture::clamped(percent);
    }

    /// Sets temperature, clamping to [0, 40].
    pub fn set_temperature(&mut self, celsius: f64) {
        self.current.temperature = Temperature::clamped(celsius);
    }

    /// Sets sunlight intensity, clamping to [0, 100].
    pub fn set_sunlight(&mut self, percent: f64) {
        self.current.sunlight = Sunlight::clamped(percent);
    }

    /// Copies the current values into an independent [`Reading`].
    #[must_use]
    pub fn snapshot(&self) -> Reading {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn defaults_match_panel_defaults() {
        let reading = InputModel::new().snapshot();
        assert_eq!(reading.soil_moisture, SoilMoisture::DEFAULT);
        assert_eq!(reading.temperature, Temperature::DEFAULT);
        assert_eq!(reading.sunlight, Sunlight::DEFAULT);
    }

    #[test]
    fn setters_clamp_to_bounds() {
        let mut inputs = InputModel::new();
        inputs.set_soil_moisture(-5.0);
        inputs.set_temperature(41.0);
        inputs.set_sunlight(250.0);

        assert_eq!(inputs.soil_moisture(), SoilMoisture::MIN);
        assert_eq!(inputs.temperature(), Temperature::MAX);
        assert_eq!(inputs.sunlight(), Sunlight::MAX);
    }

    #[test]
    fn setters_are_independent() {
        let mut inputs = InputModel::new();
        inputs.set_sunlight(80.0);
        assert_eq!(inputs.soil_moisture(), SoilMoisture::DEFAULT);
        assert_eq!(inputs.temperature(), Temperature::DEFAULT);
    }

    #[test]
    fn snapshot_is_detached_from_model() {
        let mut inputs = InputModel::new();
        let before = inputs.snapshot();
        inputs.set_soil_moisture(10.0);
        assert_eq!(before.soil_moisture, SoilMoisture::DEFAULT);
        assert_ne!(before, inputs.snapshot());
    }

    #[test]
    fn reading_serializes_to_payload_shape() {
        let reading = Reading::clamped(50.0, 20.0, 50.0);
        let json = serde_json::to_value(reading).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "soil_moisture": 50.0,
                "temperature": 20.0,
                "sunlight": 50.0
            })
        );
    }

    #[test]
    fn reading_try_from_raw_rejects_first_invalid_field() {
        let err = Reading::try_from_raw(50.0, 41.0, 150.0).unwrap_err();
        assert!(matches!(
            err,
            ValueError::OutOfRange {
                field: "temperature",
                ..
            }
        ));
    }

    proptest! {
        #[test]
        fn setters_keep_every_field_in_range(
            moisture in any::<f64>(),
            temperature in any::<f64>(),
            sunlight in any::<f64>(),
        ) {
            let mut model = InputModel::new();
            model.set_soil_moisture(moisture);
            model.set_temperature(temperature);
            model.set_sunlight(sunlight);

            let reading = model.snapshot();
            prop_assert!(reading.soil_moisture >= SoilMoisture::MIN);
            prop_assert!(reading.soil_moisture <= SoilMoisture::MAX);
            prop_assert!(reading.temperature >= Temperature::MIN);
            prop_assert!(reading.temperature <= Temperature::MAX);
            prop_assert!(reading.sunlight >= Sunlight::MIN);
            prop_assert!(reading.sunlight <= Sunlight::MAX);
        }

        #[test]
        fn in_range_values_are_kept_exactly(
            moisture in 0.0f64..=100.0,
            temperature in 0.0f64..=40.0,
            sunlight in 0.0f64..=100.0,
        ) {
            let strict = Reading::try_from_raw(moisture, temperature, sunlight).unwrap();
            prop_assert_eq!(Reading::clamped(moisture, temperature, sunlight), strict);
        }
    }
}
