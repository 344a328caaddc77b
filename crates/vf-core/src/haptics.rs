//! Haptic hints for onboarding transitions.
//!
//! The hosting screen layer fires these through a `HapticPort`; the flow
//! controller only reports transitions.

use serde::Serialize;

use crate::onboarding::OnboardingStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticStrength {
    Light,
    Medium,
    Heavy,
}

/// Recommended haptic strength for a committed step transition.
///
/// Leaving `Welcome` taps light, reaching `Complete` taps heavy, every
/// other step completion taps medium.
pub fn haptic_for_transition(from: OnboardingStep, to: OnboardingStep) -> HapticStrength {
    match (from, to) {
        (OnboardingStep::Welcome, _) => HapticStrength::Light,
        (_, OnboardingStep::Complete) => HapticStrength::Heavy,
        _ => HapticStrength::Medium,
    }
}
