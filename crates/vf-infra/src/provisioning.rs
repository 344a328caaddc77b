//! Simulated provisioning backend.
//!
//! The client demonstrates the onboarding experience without real key
//! material or a backup service; every effect here just waits a configured
//! latency and succeeds.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use vf_core::ports::{ProvisionError, ProvisionerPort};

pub struct SimulatedProvisioner {
    latency: Duration,
}

impl SimulatedProvisioner {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Zero-latency variant for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn simulate(&self, operation: &str) -> Result<(), ProvisionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!(operation, "simulated provisioning finished");
        Ok(())
    }
}

#[async_trait]
impl ProvisionerPort for SimulatedProvisioner {
    async fn generate_device_key(&self) -> Result<(), ProvisionError> {
        self.simulate("device key generation").await
    }

    async fn backup_cloud_key(&self) -> Result<(), ProvisionError> {
        self.simulate("cloud key backup").await
    }

    async fn verify_recovery_contact(&self, _contact: &str) -> Result<(), ProvisionError> {
        self.simulate("recovery contact verification").await
    }
}
