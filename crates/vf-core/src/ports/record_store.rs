use async_trait::async_trait;

use crate::ports::errors::StorageError;

/// Durable key-value storage for serialized records.
///
/// Backed by platform preference storage on device and by the file system
/// in tests. One record per key; the preference store uses a single fixed
/// namespace key.
#[async_trait]
pub trait RecordStorePort: Send + Sync {
    /// Read a record, returning `None` when the key has never been written.
    async fn read_record(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write a record, replacing any previous value for the key.
    async fn write_record(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}
