// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for panel state subscriptions.
//!
//! This module provides the core types for managing subscription callbacks:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::response::CalculationOutcome;
use crate::state::StateChange;

/// Unique identifier for a subscription.
///
/// IDs are unique within one registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for loading callbacks.
type LoadingCallback = Arc<dyn Fn() + Send + Sync>;

/// Type alias for settled callbacks.
type SettledCallback = Arc<dyn Fn(&CalculationOutcome) + Send + Sync>;

/// Type alias for generic state change callbacks.
type StateChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;

/// Registry for managing panel subscription callbacks.
///
/// Uses `parking_lot::RwLock` for interior mutability so callbacks can be
/// registered through a shared reference. Callbacks are invoked after the
/// panel has released its own state lock, so they may read the panel.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Called when a calculation starts.
    loading_callbacks: RwLock<HashMap<SubscriptionId, LoadingCallback>>,
    /// Called with each resolved outcome.
    settled_callbacks: RwLock<HashMap<SubscriptionId, SettledCallback>>,
    /// Generic state change callbacks (receives all changes).
    state_changed_callbacks: RwLock<HashMap<SubscriptionId, StateChangedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            loading_callbacks: RwLock::new(HashMap::new()),
            settled_callbacks: RwLock::new(HashMap::new()),
            state_changed_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for calculation starts.
    pub fn on_loading<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.loading_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for resolved calculations.
    pub fn on_settled<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CalculationOutcome) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.settled_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for all state changes.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_changed_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        if self.loading_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.settled_callbacks.write().remove(&id).is_some() {
            return true;
        }
        self.state_changed_callbacks.write().remove(&id).is_some()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatches a state change to relevant callbacks.
    ///
    /// Generic callbacks run first, then the ones matching the change type.
    /// The callback maps are snapshotted before invocation, so a callback may
    /// subscribe or unsubscribe without deadlocking.
    pub fn dispatch(&self, change: &StateChange) {
        let generic: Vec<_> = self.state_changed_callbacks.read().values().cloned().collect();
        for callback in generic {
            callback(change);
        }

        match change {
            StateChange::Loading => {
                let callbacks: Vec<_> = self.loading_callbacks.read().values().cloned().collect();
                for callback in callbacks {
                    callback();
                }
            }
            StateChange::Settled(outcome) => {
                let callbacks: Vec<_> = self.settled_callbacks.read().values().cloned().collect();
                for callback in callbacks {
                    callback(outcome);
                }
            }
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.loading_callbacks.read().len()
            + self.settled_callbacks.read().len()
            + self.state_changed_callbacks.read().len()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
