use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::StorageError;

/// Per-step, user-visible errors.
///
/// Carried inside `OnboardingState::error` so the hosting screen can render
/// them inline next to a retry action.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StepError {
    /// User input failed a precondition. Surfaced synchronously; the step's
    /// effect is never invoked.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// The step's async effect failed, including authenticator failure or
    /// a cancelled biometric prompt. Retryable in place.
    #[error("provisioning failed: {reason}")]
    Provisioning { reason: String },
}

/// Errors returned across the flow's public API instead of being recorded
/// in the state.
#[derive(Debug, Error)]
pub enum FlowError {
    /// `advance` was called while a provisioning effect was already in
    /// flight. State is unchanged; the caller must wait, not queue.
    #[error("advance rejected: a provisioning effect is already in flight")]
    ConcurrentAdvance,

    /// Persisting the terminal completion flag failed. The flow stays on
    /// `RecoveryKey` so the write can be retried.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
