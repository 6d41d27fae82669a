// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.

use crate::response::CalculationOutcome;

/// A transition of the presentation state machine.
///
/// State changes are applied to a [`UiState`](super::UiState) and handed to
/// state-change subscribers afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// A calculation was triggered and is now in flight.
    Loading,

    /// The in-flight calculation resolved.
    Settled(CalculationOutcome),
}

impl StateChange {
    /// Creates a settled change.
    #[must_use]
    pub fn settled(outcome: CalculationOutcome) -> Self {
        Self::Settled(outcome)
    }

    /// Returns `true` if this change starts a calculation.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the outcome carried by a settled change.
    #[must_use]
    pub fn outcome(&self) -> Option<&CalculationOutcome> {
        match self {
            Self::Loading => None,
            Self::Settled(outcome) => Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_carries_outcome() {
        let change = StateChange::settled(CalculationOutcome::success(15.0));
        assert!(!change.is_loading());
        assert_eq!(change.outcome(), Some(&CalculationOutcome::success(15.0)));
    }

    #[test]
    fn loading_has_no_outcome() {
        assert!(StateChange::Loading.is_loading());
        assert!(StateChange::Loading.outcome().is_none());
    }
}
