// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Irrigation Panel - the core of a garden watering control panel.
//!
//! The user describes current garden conditions with three bounded values
//! (soil moisture, temperature, sunlight). The panel sends them to a remote
//! calculation service, which runs a fuzzy-logic engine, and displays the
//! recommended watering time.
//!
//! This crate owns everything on the client side of that exchange:
//!
//! - **Inputs**: [`InputModel`] with clamped, range-bound values
//! - **Orchestration**: [`Orchestrator`] sends at most one request at a time
//!   and maps every result onto a [`CalculationOutcome`]
//! - **Presentation**: [`UiState`] moves `Idle -> Loading -> Settled`, and
//!   [`PanelView`] describes what to draw in each phase
//!
//! # Quick Start
//!
//! ```no_run
//! use irrigation_panel::ControlPanel;
//! use irrigation_panel::protocol::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> irrigation_panel::Result<()> {
//!     let panel = ControlPanel::new(HttpClient::new("http://localhost:5000")?);
//!
//!     panel.set_soil_moisture(25.0);
//!     panel.set_temperature(35.0);
//!     panel.set_sunlight(90.0);
//!
//!     // Failures never surface as `Err`; they become a failure outcome
//!     if let Some(outcome) = panel.calculate().await {
//!         println!("{outcome:?}");
//!     }
//!
//!     println!("{}", panel.view());
//!     Ok(())
//! }
//! ```
//!
//! ## Re-rendering on state changes
//!
//! ```no_run
//! use irrigation_panel::{ControlPanel, Subscribable};
//! use irrigation_panel::protocol::HttpClient;
//!
//! # async fn example() -> irrigation_panel::Result<()> {
//! let panel = ControlPanel::new(HttpClient::new("http://localhost:5000")?);
//!
//! panel.on_state_changed(|change| {
//!     println!("panel changed: {change:?}");
//! });
//!
//! panel.calculate().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `http` (default): the [`HttpClient`](protocol::HttpClient) transport.
//!   Without it, implement [`CalculationService`] for your own transport.

pub mod error;
pub mod panel;
pub mod protocol;
pub mod reading;
pub mod request;
pub mod response;
pub mod state;
pub mod subscription;
pub mod types;
pub mod view;

pub use error::{CalculationError, Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use panel::PanelConfig;
pub use panel::{ControlPanel, Orchestrator, PendingCalculation};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{CalculationService, ServiceResponse};
pub use reading::{InputModel, Reading};
pub use request::CalculationRequest;
pub use response::{CalculationOutcome, CalculationResponse, ServiceStatus};
pub use state::{Phase, StateChange, UiState};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{SoilMoisture, Sunlight, Temperature};
pub use view::{InfoTab, PanelView, RecommendationView};
