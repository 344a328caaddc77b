//! # vf-infra
//!
//! Infrastructure adapters for VaultFlow: durable record storage and the
//! simulated provisioning backend.

pub mod provisioning;
pub mod record_store;

pub use provisioning::SimulatedProvisioner;
pub use record_store::{FileRecordStore, MemoryRecordStore};
