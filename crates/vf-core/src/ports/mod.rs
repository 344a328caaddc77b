//! Port interfaces for the application layer.
//!
//! Ports define the contract between the application logic and platform or
//! infrastructure implementations. The flow controller and preference store
//! depend only on these traits, never on a concrete platform API.

pub mod authenticator;
pub mod capability;
pub mod errors;
pub mod haptic;
pub mod provisioner;
pub mod record_store;

pub use authenticator::AuthenticatorPort;
pub use capability::BiometricCapabilityPort;
pub use errors::{AuthError, ProvisionError, StorageError};
pub use haptic::HapticPort;
pub use provisioner::ProvisionerPort;
pub use record_store::RecordStorePort;
