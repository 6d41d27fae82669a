// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendering contract of the panel.
//!
//! [`PanelView`] is a plain description of what a panel shows for a given
//! [`UiState`] and [`Reading`]. Front-ends draw it however they like; its
//! [`Display`](fmt::Display) impl gives a plain-text rendering.
//!
//! | Phase | Trigger | Recommendation area |
//! |-------|---------|---------------------|
//! | Idle | enabled | placeholder text |
//! | Loading | busy, disabled | unchanged |
//! | Settled (success) | enabled | `<n> min` and a sentence |
//! | Settled (failure) | enabled | error message |

use std::fmt;

use crate::reading::Reading;
use crate::response::CalculationOutcome;
use crate::state::UiState;

/// Panel heading.
pub const TITLE: &str = "Smart Soil Irrigation Controller";

/// Text shown before the first calculation.
pub const PLACEHOLDER: &str =
    "Enter your soil conditions and click calculate to get a recommendation.";

/// Label of the idle trigger.
pub const TRIGGER_LABEL: &str = "Calculate Watering Time";

/// Label of the trigger while a calculation is in flight.
pub const TRIGGER_BUSY_LABEL: &str = "Calculating...";

const RECOMMENDATION_HEADLINE: &str = "Recommended Watering Time";

/// Selectable "How It Works" tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InfoTab {
    /// What the system does.
    #[default]
    Overview,
    /// How the recommendation is derived.
    Algorithm,
}

impl InfoTab {
    /// Returns the tab's label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Algorithm => "Algorithm",
        }
    }

    /// Returns the tab's body text.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Overview => {
                "Our smart irrigation system uses environmental data to determine optimal \
                 watering times, conserving water while keeping your plants healthy. The system \
                 considers soil moisture, temperature, and sunlight intensity to make \
                 intelligent watering decisions."
            }
            Self::Algorithm => {
                "The system uses fuzzy logic to process multiple environmental factors and \
                 determine the ideal watering duration based on expert-defined rules and \
                 relationships."
            }
        }
    }
}

/// One labelled input control.
#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    /// Control label.
    pub label: &'static str,
    /// Short explanation of the value.
    pub hint: &'static str,
    /// Current value with its unit, e.g. `"20°C"`.
    pub value: String,
}

/// The calculate trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerView {
    /// Text on the trigger.
    pub label: &'static str,
    /// Whether the trigger accepts input.
    pub enabled: bool,
    /// Whether a busy indicator is shown.
    pub busy: bool,
}

/// Content of the recommendation area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationView {
    /// Nothing calculated yet.
    Placeholder(&'static str),
    /// A watering time, rounded to whole minutes.
    Recommendation {
        /// Whole minutes to water.
        minutes: i64,
    },
    /// The reason the latest calculation failed.
    Error(String),
}

impl RecommendationView {
    /// Builds the recommendation area for the latest outcome.
    #[must_use]
    pub fn from_outcome(outcome: Option<&CalculationOutcome>) -> Self {
        match outcome {
            None => Self::Placeholder(PLACEHOLDER),
            Some(CalculationOutcome::Success {
                watering_time_minutes,
            }) => Self::Recommendation {
                minutes: whole_minutes(*watering_time_minutes),
            },
            Some(CalculationOutcome::Failure { reason }) => Self::Error(reason.clone()),
        }
    }

    /// Returns the large value line, e.g. `"15 min"`.
    #[must_use]
    pub fn value_text(&self) -> Option<String> {
        match self {
            Self::Recommendation { minutes } => Some(format!("{minutes} min")),
            _ => None,
        }
    }

    /// Returns the descriptive sentence under the value.
    #[must_use]
    pub fn sentence(&self) -> Option<String> {
        match self {
            Self::Recommendation { minutes } => Some(format!(
                "Water your plants for {minutes} minutes based on current conditions."
            )),
            _ => None,
        }
    }
}

/// Rounds half away from zero, saturating at the `i64` bounds.
#[allow(clippy::cast_possible_truncation)]
fn whole_minutes(minutes: f64) -> i64 {
    minutes.round() as i64
}

/// Everything a panel displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    /// Soil moisture, temperature and sunlight controls.
    pub inputs: [InputView; 3],
    /// The calculate trigger.
    pub trigger: TriggerView,
    /// The recommendation area.
    pub recommendation: RecommendationView,
    /// The selected information tab.
    pub info_tab: InfoTab,
}

impl PanelView {
    /// Renders `state` and `reading`.
    #[must_use]
    pub fn render(state: &UiState, reading: &Reading, info_tab: InfoTab) -> Self {
        let busy = state.is_loading();
        Self {
            inputs: [
                InputView {
                    label: "Soil Moisture",
                    hint: "Measure of soil water content",
                    value: reading.soil_moisture.to_string(),
                },
                InputView {
                    label: "Temperature",
                    hint: "Current ambient temperature",
                    value: reading.temperature.to_string(),
                },
                InputView {
                    label: "Sunlight Intensity",
                    hint: "Current sunlight level",
                    value: reading.sunlight.to_string(),
                },
            ],
            trigger: TriggerView {
                label: if busy { TRIGGER_BUSY_LABEL } else { TRIGGER_LABEL },
                enabled: !busy,
                busy,
            },
            recommendation: RecommendationView::from_outcome(state.last_outcome()),
            info_tab,
        }
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f)?;
        writeln!(f, "Soil Conditions")?;
        for input in &self.inputs {
            writeln!(f, "  {:<20}{:>8}", input.label, input.value)?;
        }
        let marker = if self.trigger.enabled { "" } else { " (disabled)" };
        writeln!(f, "  [{}]{marker}", self.trigger.label)?;
        writeln!(f)?;

        writeln!(f, "Recommendation")?;
        match &self.recommendation {
            RecommendationView::Placeholder(text) => writeln!(f, "  {text}")?,
            RecommendationView::Recommendation { .. } => {
                writeln!(f, "  {RECOMMENDATION_HEADLINE}")?;
                if let Some(value) = self.recommendation.value_text() {
                    writeln!(f, "  {value}")?;
                }
                if let Some(sentence) = self.recommendation.sentence() {
                    writeln!(f, "  {sentence}")?;
                }
            }
            RecommendationView::Error(reason) => writeln!(f, "  Error: {reason}")?,
        }
        writeln!(f)?;

        writeln!(f, "How It Works [{}]", self.info_tab.label())?;
        write!(f, "  {}", self.info_tab.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateChange;

    fn settled(outcome: CalculationOutcome) -> UiState {
        let mut state = UiState::new();
        state.apply(&StateChange::Loading);
        state.apply(&StateChange::settled(outcome));
        state
    }

    #[test]
    fn idle_shows_placeholder() {
        let view = PanelView::render(&UiState::new(), &Reading::default(), InfoTab::Overview);
        assert_eq!(view.recommendation, RecommendationView::Placeholder(PLACEHOLDER));
        assert!(view.trigger.enabled);
        assert!(!view.trigger.busy);
        assert_eq!(view.trigger.label, TRIGGER_LABEL);
    }

    #[test]
    fn loading_disables_trigger_and_keeps_content() {
        let mut state = settled(CalculationOutcome::success(12.0));
        state.apply(&StateChange::Loading);

        let view = PanelView::render(&state, &Reading::default(), InfoTab::Overview);
        assert!(!view.trigger.enabled);
        assert!(view.trigger.busy);
        assert_eq!(
            view.recommendation,
            RecommendationView::Recommendation { minutes: 12 }
        );
    }

    #[test]
    fn first_loading_keeps_placeholder() {
        let mut state = UiState::new();
        state.apply(&StateChange::Loading);
        let view = PanelView::render(&state, &Reading::default(), InfoTab::Overview);
        assert_eq!(view.recommendation, RecommendationView::Placeholder(PLACEHOLDER));
    }

    #[test]
    fn success_shows_minutes_and_sentence() {
        let state = settled(CalculationOutcome::success(15.0));
        let view = PanelView::render(&state, &Reading::default(), InfoTab::Overview);

        assert_eq!(view.recommendation.value_text().as_deref(), Some("15 min"));
        assert_eq!(
            view.recommendation.sentence().as_deref(),
            Some("Water your plants for 15 minutes based on current conditions.")
        );
        let text = view.to_string();
        assert!(text.contains("Recommended Watering Time"));
        assert!(text.contains("15 min"));
    }

    #[test]
    fn fractional_minutes_round_half_away_from_zero() {
        assert_eq!(whole_minutes(14.4), 14);
        assert_eq!(whole_minutes(14.5), 15);
        assert_eq!(whole_minutes(0.0), 0);
    }

    #[test]
    fn whole_minutes_saturates() {
        assert_eq!(whole_minutes(f64::INFINITY), i64::MAX);
        assert_eq!(whole_minutes(f64::NEG_INFINITY), i64::MIN);
        assert_eq!(whole_minutes(1e300), i64::MAX);
    }

    #[test]
    fn failure_replaces_content_with_error() {
        let state = settled(CalculationOutcome::failure("Failed to calculate watering time"));
        let view = PanelView::render(&state, &Reading::default(), InfoTab::Overview);

        assert_eq!(
            view.recommendation,
            RecommendationView::Error("Failed to calculate watering time".to_string())
        );
        assert!(view.recommendation.value_text().is_none());
        assert!(
            view.to_string()
                .contains("Error: Failed to calculate watering time")
        );
    }

    #[test]
    fn inputs_show_units() {
        let reading = Reading::clamped(35.0, 41.0, 90.0);
        let view = PanelView::render(&UiState::new(), &reading, InfoTab::Overview);
        let values: Vec<_> = view.inputs.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["35%", "40°C", "90%"]);
    }

    #[test]
    fn info_tab_text() {
        let view = PanelView::render(&UiState::new(), &Reading::default(), InfoTab::Algorithm);
        assert!(view.to_string().contains("fuzzy logic"));
        assert_eq!(InfoTab::default(), InfoTab::Overview);
    }
}
