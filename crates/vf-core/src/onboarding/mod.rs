//! Onboarding domain module.
//!
//! Defines the step sequence, the flow state, and the error types for the
//! secure-onboarding flow. The flow controller that drives these types lives
//! in the application layer; everything here is pure data.

pub mod error;
pub mod intent;
pub mod state;
pub mod step;

pub use error::{FlowError, StepError};
pub use intent::AdvanceIntent;
pub use state::OnboardingState;
pub use step::OnboardingStep;
