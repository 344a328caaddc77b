use thiserror::Error;

/// Durable key-value read/write failure.
///
/// On the load path the store degrades to defaults; on write paths the
/// error propagates so an unpersisted change is never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("record serialization failed: {0}")]
    Serialize(String),
}

/// Biometric authentication failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authentication failed: {0}")]
    Failed(String),

    /// The user dismissed the system prompt. Treated the same as a
    /// failure by the flow: retryable in place.
    #[error("authentication cancelled by user")]
    Cancelled,
}

/// A simulated provisioning effect failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provisioning failed: {reason}")]
pub struct ProvisionError {
    pub reason: String,
}

impl ProvisionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
