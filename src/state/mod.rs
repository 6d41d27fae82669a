// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presentation state machine.
//!
//! [`UiState`] tracks which [`Phase`] the panel is in and the latest
//! outcome. It only changes through [`StateChange`]s:
//!
//! ```text
//! Idle ──[Loading]──▶ Loading ──[Settled]──▶ Settled
//!                        ▲                      │
//!                        └──────[Loading]───────┘
//! ```
//!
//! There is no way back to `Idle`.
//!
//! # Examples
//!
//! ```
//! use irrigation_panel::response::CalculationOutcome;
//! use irrigation_panel::state::{Phase, StateChange, UiState};
//!
//! let mut state = UiState::new();
//! assert_eq!(state.phase(), Phase::Idle);
//!
//! assert!(state.apply(&StateChange::Loading));
//! assert!(state.apply(&StateChange::settled(CalculationOutcome::success(15.0))));
//! assert_eq!(state.phase(), Phase::Settled);
//! ```

mod state_change;
mod ui_state;

pub use state_change::StateChange;
pub use ui_state::{Phase, UiState};
