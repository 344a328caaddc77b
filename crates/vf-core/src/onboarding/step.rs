use serde::{Deserialize, Serialize};

/// One ordered stage of the onboarding sequence.
///
/// The sequence is fixed and linear; `Complete` is terminal. Derived `Ord`
/// follows declaration order, which is the flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    DeviceKey,
    CloudKey,
    RecoveryKey,
    Complete,
}

impl OnboardingStep {
    /// All steps in flow order.
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::Welcome,
        OnboardingStep::DeviceKey,
        OnboardingStep::CloudKey,
        OnboardingStep::RecoveryKey,
        OnboardingStep::Complete,
    ];

    /// Zero-based position of this step in the sequence.
    pub fn index(self) -> usize {
        match self {
            OnboardingStep::Welcome => 0,
            OnboardingStep::DeviceKey => 1,
            OnboardingStep::CloudKey => 2,
            OnboardingStep::RecoveryKey => 3,
            OnboardingStep::Complete => 4,
        }
    }

    /// The step that follows this one, or `None` for `Complete`.
    pub fn next(self) -> Option<OnboardingStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self == OnboardingStep::Complete
    }

    /// Display progress in `[0, 1]`: step index over the last index.
    pub fn progress_fraction(self) -> f32 {
        self.index() as f32 / (Self::ALL.len() - 1) as f32
    }
}
