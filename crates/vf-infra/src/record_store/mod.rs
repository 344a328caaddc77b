//! Record store adapters.

pub mod file_store;
pub mod memory;

pub use file_store::FileRecordStore;
pub use memory::MemoryRecordStore;
