//! # vf-app
//!
//! Application layer for VaultFlow.
//!
//! Hosts the two stateful components the screens drive: the onboarding
//! flow controller and the observable preference store. Both depend only
//! on `vf-core` ports; infrastructure adapters are injected.

pub mod onboarding;
pub mod preferences;

pub use onboarding::OnboardingFlow;
pub use preferences::{PreferenceStore, Subscription};
