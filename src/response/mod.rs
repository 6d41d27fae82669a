// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing and calculation outcomes.
//!
//! This module provides structures for deserializing JSON bodies returned by
//! the calculation service, and the [`CalculationOutcome`] every calculation
//! resolves to.

mod calculation;
mod outcome;

pub use calculation::{CalculationResponse, ServiceStatus, SUCCESS_STATUS};
pub use outcome::CalculationOutcome;
