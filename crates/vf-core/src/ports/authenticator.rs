use async_trait::async_trait;

use crate::ports::errors::AuthError;

/// Platform biometric authentication.
///
/// Safe to call only after a capability check indicated hardware presence
/// and enrollment; the flow performs that check once at start.
#[async_trait]
pub trait AuthenticatorPort: Send + Sync {
    /// Show the system authentication prompt and wait for the result.
    async fn authenticate(&self, prompt_message: &str) -> Result<(), AuthError>;
}
