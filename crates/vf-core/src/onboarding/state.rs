use std::collections::BTreeSet;

use serde::Serialize;

use crate::onboarding::{OnboardingStep, StepError};

/// Full state of the onboarding flow.
///
/// Created fresh each time the flow is entered; never persisted mid-flow.
/// A process killed mid-flow restarts at `Welcome`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingState {
    /// The step currently shown to the user.
    pub current_step: OnboardingStep,
    /// True only while the current step's async effect is in flight.
    pub is_provisioning: bool,
    /// Recovery contact collected during `RecoveryKey`. Retained across a
    /// failed attempt so the user never re-enters it.
    pub recovery_contact: Option<String>,
    /// Steps whose transition away has committed. Grows monotonically;
    /// used for progress-bar rendering only.
    pub completed_steps: BTreeSet<OnboardingStep>,
    /// Inline error for the current step, cleared on retry or step change.
    pub error: Option<StepError>,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self {
            current_step: OnboardingStep::Welcome,
            is_provisioning: false,
            recovery_contact: None,
            completed_steps: BTreeSet::new(),
            error: None,
        }
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}
