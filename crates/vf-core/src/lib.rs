//! # vf-core
//!
//! Core domain models and business logic for VaultFlow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod haptics;
pub mod onboarding;
pub mod ports;
pub mod preferences;

// Re-export commonly used types at the crate root
pub use haptics::{haptic_for_transition, HapticStrength};
pub use onboarding::{AdvanceIntent, FlowError, OnboardingState, OnboardingStep, StepError};
pub use preferences::{PreferenceSet, PreferenceUpdate, Theme, PREFERENCES_RECORD_KEY};
