// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that publish panel state changes.

use crate::response::CalculationOutcome;
use crate::state::StateChange;
use crate::subscription::SubscriptionId;

/// Trait for types that support state-change subscriptions.
///
/// Implemented by [`Orchestrator`](crate::panel::Orchestrator) and
/// [`ControlPanel`](crate::panel::ControlPanel). A renderer typically
/// subscribes with [`on_state_changed`](Self::on_state_changed) and redraws
/// on every change.
pub trait Subscribable {
    /// Subscribes to calculation starts.
    fn on_loading<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static;

    /// Subscribes to resolved calculations.
    fn on_settled<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CalculationOutcome) + Send + Sync + 'static;

    /// Subscribes to all state changes.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
