// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel state tracking.

use std::fmt;

use crate::response::CalculationOutcome;

use super::StateChange;

/// Lifecycle phase of the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// No calculation has been triggered yet.
    #[default]
    Idle,
    /// A calculation is in flight; the trigger is disabled.
    Loading,
    /// The latest calculation resolved.
    Settled,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Settled => "settled",
        };
        f.write_str(name)
    }
}

/// Presentation state of one panel.
///
/// Starts as `Idle` with no outcome. While `Loading`, the previous outcome
/// (if any) is kept so the recommendation area stays unchanged until the new
/// calculation settles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    phase: Phase,
    last_outcome: Option<CalculationOutcome>,
}

impl UiState {
    /// Creates the initial `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a calculation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Returns the most recent outcome, if any calculation has settled.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&CalculationOutcome> {
        self.last_outcome.as_ref()
    }

    /// Applies a state change.
    ///
    /// Returns `true` if the change was a legal transition and was applied.
    /// `Loading` is refused while already loading; `Settled` is refused
    /// unless loading.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match (self.phase, change) {
            (Phase::Loading, StateChange::Loading)
            | (Phase::Idle | Phase::Settled, StateChange::Settled(_)) => false,
            (_, StateChange::Loading) => {
                self.phase = Phase::Loading;
                true
            }
            (Phase::Loading, StateChange::Settled(outcome)) => {
                self.phase = Phase::Settled;
                self.last_outcome = Some(outcome.clone());
                true
            }
        }
    }
}
