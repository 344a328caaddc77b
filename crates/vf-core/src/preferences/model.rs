use serde::{Deserialize, Serialize};

/// Fixed namespace key for the single persisted preference record.
pub const PREFERENCES_RECORD_KEY: &str = "vaultflow.preferences";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

/// The persisted record of user settings.
///
/// Mutated field-by-field through `PreferenceUpdate`, never wholesale.
/// All fields carry `#[serde(default)]` so a record written by an older
/// build still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default)]
    pub biometrics_enabled: bool,

    #[serde(default = "default_on")]
    pub notifications_enabled: bool,

    #[serde(default = "default_on")]
    pub haptic_feedback_enabled: bool,

    #[serde(default = "default_theme")]
    pub theme: Theme,

    /// Written by the onboarding flow on its terminal transition. Not
    /// exposed to the onboarding UI directly.
    #[serde(default)]
    pub onboarding_complete: bool,
}

fn default_on() -> bool {
    true
}

fn default_theme() -> Theme {
    Theme::Auto
}

/// Partial update merged into the current `PreferenceSet`.
///
/// Merge is shallow field replacement; `None` fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreferenceUpdate {
    pub biometrics_enabled: Option<bool>,
    pub notifications_enabled: Option<bool>,
    pub haptic_feedback_enabled: Option<bool>,
    pub theme: Option<Theme>,
    pub onboarding_complete: Option<bool>,
}

impl PreferenceUpdate {
    pub fn apply(&self, base: &PreferenceSet) -> PreferenceSet {
        PreferenceSet {
            biometrics_enabled: self.biometrics_enabled.unwrap_or(base.biometrics_enabled),
            notifications_enabled: self
                .notifications_enabled
                .unwrap_or(base.notifications_enabled),
            haptic_feedback_enabled: self
                .haptic_feedback_enabled
                .unwrap_or(base.haptic_feedback_enabled),
            theme: self.theme.unwrap_or(base.theme),
            onboarding_complete: self.onboarding_complete.unwrap_or(base.onboarding_complete),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
