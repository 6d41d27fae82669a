// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for panel state changes.
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Registry that stores callbacks and dispatches changes
//! - [`Subscribable`] - Trait for types that support subscriptions
//!
//! # Usage
//!
//! ```
//! use irrigation_panel::subscription::CallbackRegistry;
//! use irrigation_panel::state::StateChange;
//!
//! let registry = CallbackRegistry::new();
//! let id = registry.on_state_changed(|change| {
//!     println!("panel changed: {change:?}");
//! });
//!
//! registry.dispatch(&StateChange::Loading);
//! registry.unsubscribe(id);
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
