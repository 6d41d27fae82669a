// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request orchestration.

use parking_lot::Mutex;

use crate::error::CalculationError;
use crate::protocol::CalculationService;
use crate::reading::Reading;
use crate::request::CalculationRequest;
use crate::response::{CalculationOutcome, CalculationResponse};
use crate::state::{Phase, StateChange, UiState};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};

/// Failure reason recorded when a pending calculation is dropped unresolved.
pub const ABANDONED_REASON: &str = "calculation was abandoned";

/// Drives calculations against a [`CalculationService`].
///
/// The orchestrator owns the [`UiState`] of one panel. Entering `Loading`
/// happens synchronously in [`begin`](Self::begin), before any I/O is
/// started, and doubles as the single-flight guard: while a calculation is
/// outstanding, further triggers return `None` and send nothing.
///
/// # Examples
///
/// ```no_run
/// use irrigation_panel::panel::Orchestrator;
/// use irrigation_panel::protocol::HttpClient;
/// use irrigation_panel::reading::Reading;
///
/// # async fn example() -> irrigation_panel::Result<()> {
/// let orchestrator = Orchestrator::new(HttpClient::new("http://localhost:5000")?);
///
/// if let Some(outcome) = orchestrator.calculate(Reading::default()).await {
///     println!("{outcome:?}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Orchestrator<S: CalculationService> {
    service: S,
    state: Mutex<UiState>,
    callbacks: CallbackRegistry,
}

impl<S: CalculationService> Orchestrator<S> {
    /// Creates an orchestrator in the `Idle` phase.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Mutex::new(UiState::new()),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Returns the underlying service.
    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Returns a copy of the current presentation state.
    #[must_use]
    pub fn ui_state(&self) -> UiState {
        self.state.lock().clone()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.lock().phase()
    }

    /// Returns `true` while a calculation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading()
    }

    /// Starts a calculation for `reading`.
    ///
    /// On success the state is already `Loading` when this returns, and the
    /// returned [`PendingCalculation`] must be resolved to settle it.
    /// Returns `None`, without building a request, if a calculation is
    /// already in flight.
    #[must_use = "dropping the pending calculation settles it as abandoned"]
    pub fn begin(&self, reading: Reading) -> Option<PendingCalculation<'_, S>> {
        if !self.transition(&StateChange::Loading) {
            tracing::debug!("Calculation already in flight, ignoring trigger");
            return None;
        }

        let request = CalculationRequest::new(reading);
        tracing::info!(request_id = %request.id(), %request, "Calculation started");

        Some(PendingCalculation {
            orchestrator: self,
            request,
            settled: false,
        })
    }

    /// Runs one full calculation cycle for `reading`.
    ///
    /// Returns `None` if a calculation is already in flight; otherwise the
    /// resolved outcome, which has also been applied to the state.
    pub async fn calculate(&self, reading: Reading) -> Option<CalculationOutcome> {
        let pending = self.begin(reading)?;
        Some(pending.resolve().await)
    }

    async fn execute(&self, request: &CalculationRequest) -> Result<f64, CalculationError> {
        let response = self.service.send_calculation(request).await?;
        let body: CalculationResponse = response.parse()?;

        if !body.is_success() {
            tracing::warn!(
                request_id = %request.id(),
                status = %body.status_text(),
                detail = body.error_detail().unwrap_or_default(),
                "Calculation rejected by service"
            );
        }

        body.into_watering_time()
    }

    fn settle(&self, request: &CalculationRequest, outcome: CalculationOutcome) {
        match &outcome {
            CalculationOutcome::Success {
                watering_time_minutes,
            } => {
                tracing::info!(
                    request_id = %request.id(),
                    watering_time_minutes,
                    "Calculation settled"
                );
            }
            CalculationOutcome::Failure { reason } => {
                tracing::warn!(request_id = %request.id(), %reason, "Calculation failed");
            }
        }
        self.transition(&StateChange::settled(outcome));
    }

    /// Applies `change` and notifies subscribers if it was accepted.
    ///
    /// The state lock is released before callbacks run.
    fn transition(&self, change: &StateChange) -> bool {
        let applied = self.state.lock().apply(change);
        if applied {
            self.callbacks.dispatch(change);
        }
        applied
    }
}

impl<S: CalculationService> Subscribable for Orchestrator<S> {
    fn on_loading<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.on_loading(callback)
    }

    fn on_settled<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CalculationOutcome) + Send + Sync + 'static,
    {
        self.callbacks.on_settled(callback)
    }

    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

/// A calculation that has entered `Loading` and awaits resolution.
///
/// Resolving it sends the request and settles the state with exactly one
/// outcome. If it is dropped before resolving (including when the
/// [`resolve`](Self::resolve) future is dropped mid-flight), the state is
/// settled with a failure carrying [`ABANDONED_REASON`], so the panel never
/// stays stuck in `Loading`.
#[derive(Debug)]
pub struct PendingCalculation<'a, S: CalculationService> {
    orchestrator: &'a Orchestrator<S>,
    request: CalculationRequest,
    settled: bool,
}

impl<S: CalculationService> PendingCalculation<'_, S> {
    /// Returns the request that will be sent.
    #[must_use]
    pub fn request(&self) -> &CalculationRequest {
        &self.request
    }

    /// Sends the request, settles the state, and returns the outcome.
    ///
    /// Every failure (transport, malformed body, rejection) is converted
    /// into a [`CalculationOutcome::Failure`]; this never returns an error.
    pub async fn resolve(mut self) -> CalculationOutcome {
        let result = self.orchestrator.execute(&self.request).await;
        let outcome = CalculationOutcome::from(result);

        self.settled = true;
        self.orchestrator.settle(&self.request, outcome.clone());
        outcome
    }
}

impl<S: CalculationService> Drop for PendingCalculation<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            self.orchestrator
                .settle(&self.request, CalculationOutcome::failure(ABANDONED_REASON));
        }
    }
}
