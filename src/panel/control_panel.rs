// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control panel combining inputs, orchestration, and rendering.

use parking_lot::Mutex;

use crate::protocol::CalculationService;
use crate::reading::{InputModel, Reading};
use crate::response::CalculationOutcome;
use crate::state::{StateChange, UiState};
use crate::subscription::{Subscribable, SubscriptionId};
use crate::view::{InfoTab, PanelView};

use super::{Orchestrator, PendingCalculation};

/// One irrigation control panel.
///
/// Holds the user-editable [`InputModel`] and an [`Orchestrator`]. Inputs
/// stay editable while a calculation is in flight and are never reset by a
/// calculation; the in-flight request uses the values captured when it was
/// triggered.
///
/// Each panel is independent; build a fresh one per window, per session, or
/// per test.
///
/// # Examples
///
/// ```no_run
/// use irrigation_panel::panel::ControlPanel;
/// use irrigation_panel::protocol::HttpClient;
///
/// # async fn example() -> irrigation_panel::Result<()> {
/// let panel = ControlPanel::new(HttpClient::new("http://localhost:5000")?);
///
/// panel.set_soil_moisture(25.0);
/// panel.set_temperature(35.0);
/// panel.set_sunlight(90.0);
///
/// panel.calculate().await;
/// println!("{}", panel.view());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ControlPanel<S: CalculationService> {
    inputs: Mutex<InputModel>,
    orchestrator: Orchestrator<S>,
}

impl<S: CalculationService> ControlPanel<S> {
    /// Creates a panel with default inputs in the `Idle` phase.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self::with_reading(service, Reading::default())
    }

    /// Creates a panel whose inputs start at `reading`.
    #[must_use]
    pub fn with_reading(service: S, reading: Reading) -> Self {
        Self {
            inputs: Mutex::new(InputModel::with_reading(reading)),
            orchestrator: Orchestrator::new(service),
        }
    }

    /// Returns the orchestrator driving this panel.
    #[must_use]
    pub fn orchestrator(&self) -> &Orchestrator<S> {
        &self.orchestrator
    }

    // ========== Inputs ==========

    /// Returns a copy of the current inputs.
    #[must_use]
    pub fn inputs(&self) -> InputModel {
        self.inputs.lock().clone()
    }

    /// Returns a snapshot of the current inputs.
    #[must_use]
    pub fn reading(&self) -> Reading {
        self.inputs.lock().snapshot()
    }

    /// Sets soil moisture, clamping to [0, 100].
    pub fn set_soil_moisture(&self, percent: f64) {
        self.inputs.lock().set_soil_moisture(percent);
    }

    /// Sets temperature, clamping to [0, 40].
    pub fn set_temperature(&self, celsius: f64) {
        self.inputs.lock().set_temperature(celsius);
    }

    /// Sets sunlight intensity, clamping to [0, 100].
    pub fn set_sunlight(&self, percent: f64) {
        self.inputs.lock().set_sunlight(percent);
    }

    // ========== Calculation ==========

    /// Triggers a calculation from the current inputs.
    ///
    /// See [`Orchestrator::begin`].
    #[must_use = "dropping the pending calculation settles it as abandoned"]
    pub fn trigger(&self) -> Option<PendingCalculation<'_, S>> {
        let reading = self.reading();
        self.orchestrator.begin(reading)
    }

    /// Triggers a calculation from the current inputs and waits for it.
    ///
    /// Returns `None` if a calculation was already in flight.
    pub async fn calculate(&self) -> Option<CalculationOutcome> {
        let pending = self.trigger()?;
        Some(pending.resolve().await)
    }

    /// Returns a copy of the presentation state.
    #[must_use]
    pub fn ui_state(&self) -> UiState {
        self.orchestrator.ui_state()
    }

    // ========== Rendering ==========

    /// Renders the panel with the overview tab selected.
    #[must_use]
    pub fn view(&self) -> PanelView {
        self.view_with_tab(InfoTab::default())
    }

    /// Renders the panel with the given information tab selected.
    #[must_use]
    pub fn view_with_tab(&self, tab: InfoTab) -> PanelView {
        PanelView::render(&self.ui_state(), &self.reading(), tab)
    }
}

impl<S: CalculationService> Subscribable for ControlPanel<S> {
    fn on_loading<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.orchestrator.on_loading(callback)
    }

    fn on_settled<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CalculationOutcome) + Send + Sync + 'static,
    {
        self.orchestrator.on_settled(callback)
    }

    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.orchestrator.on_state_changed(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.orchestrator.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::protocol::ServiceResponse;
    use crate::request::CalculationRequest;
    use crate::state::Phase;
    use crate::types::Temperature;
    use crate::view::RecommendationView;

    /// Answers every calculation with the watering time equal to the
    /// temperature it was sent, so tests can see which snapshot was used.
    struct EchoService;

    impl CalculationService for EchoService {
        async fn send_calculation(
            &self,
            request: &CalculationRequest,
        ) -> Result<ServiceResponse, ProtocolError> {
            Ok(ServiceResponse::new(format!(
                r#"{{"status": "success", "watering_time": {}}}"#,
                request.reading().temperature.value()
            )))
        }

        async fn send_status_query(&self) -> Result<ServiceResponse, ProtocolError> {
            Err(ProtocolError::ConnectionFailed("unused".to_string()))
        }
    }

    #[test]
    fn fresh_panel_is_idle_with_defaults() {
        let panel = ControlPanel::new(EchoService);
        assert_eq!(panel.ui_state().phase(), Phase::Idle);
        assert_eq!(panel.reading(), Reading::default());
        assert!(matches!(
            panel.view().recommendation,
            RecommendationView::Placeholder(_)
        ));
    }

    #[test]
    fn setters_clamp() {
        let panel = ControlPanel::new(EchoService);
        panel.set_temperature(41.0);
        assert_eq!(panel.reading().temperature, Temperature::MAX);
    }

    #[tokio::test]
    async fn trigger_uses_snapshot_taken_at_trigger_time() {
        let panel = ControlPanel::new(EchoService);
        panel.set_temperature(30.0);

        let pending = panel.trigger().unwrap();
        panel.set_temperature(5.0);
        let outcome = pending.resolve().await;

        assert_eq!(outcome, CalculationOutcome::success(30.0));
        // Inputs are untouched by the calculation
        assert!((panel.inputs().temperature().value() - 5.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn trigger_while_loading_is_noop() {
        let panel = ControlPanel::new(EchoService);
        let pending = panel.trigger().unwrap();

        assert!(panel.trigger().is_none());
        assert!(!panel.view().trigger.enabled);

        pending.resolve().await;
        assert!(panel.view().trigger.enabled);
    }

    #[tokio::test]
    async fn settled_view_shows_minutes() {
        let panel = ControlPanel::new(EchoService);
        panel.set_temperature(15.0);
        panel.calculate().await;

        let rendered = panel.view().to_string();
        assert!(rendered.contains("15 min"));
    }
}
