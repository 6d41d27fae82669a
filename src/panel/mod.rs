// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The control panel and its request orchestration.
//!
//! - [`Orchestrator`] turns a [`Reading`](crate::reading::Reading) into one
//!   outbound calculation and drives the [`UiState`](crate::state::UiState)
//! - [`PendingCalculation`] is a calculation that has entered `Loading` but
//!   not yet resolved
//! - [`ControlPanel`] pairs an orchestrator with the user-editable
//!   [`InputModel`](crate::reading::InputModel)
//! - [`PanelConfig`] describes how to build an HTTP-backed panel
//!
//! At most one calculation is outstanding per panel. Triggering while one
//! is in flight is a no-op, whether the trigger comes from a UI or from code.

#[cfg(feature = "http")]
mod config;
mod control_panel;
mod orchestrator;

#[cfg(feature = "http")]
pub use config::PanelConfig;
pub use control_panel::ControlPanel;
pub use orchestrator::{ABANDONED_REASON, Orchestrator, PendingCalculation};
