use async_trait::async_trait;

use crate::ports::errors::ProvisionError;

/// The asynchronous provisioning effects behind each onboarding step.
///
/// All of these are simulated operations in this client; real key material
/// and network backup are out of scope. Injecting them keeps the flow
/// controller testable without rendering UI.
#[async_trait]
pub trait ProvisionerPort: Send + Sync {
    /// Simulated device key generation. Invoked on `DeviceKey` when no
    /// biometric hardware is available.
    async fn generate_device_key(&self) -> Result<(), ProvisionError>;

    /// Simulated cloud backup, invoked on `CloudKey`.
    async fn backup_cloud_key(&self) -> Result<(), ProvisionError>;

    /// Simulated recovery contact verification, invoked on `RecoveryKey`
    /// after the contact passes validation.
    async fn verify_recovery_contact(&self, contact: &str) -> Result<(), ProvisionError>;
}
