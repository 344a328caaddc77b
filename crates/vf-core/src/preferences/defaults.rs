use super::model::*;

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            biometrics_enabled: false,
            notifications_enabled: true,
            haptic_feedback_enabled: true,
            theme: Theme::Auto,
            onboarding_complete: false,
        }
    }
}
