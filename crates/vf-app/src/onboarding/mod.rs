//! Onboarding flow controller.

pub mod flow;

pub use flow::OnboardingFlow;
