use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use vf_core::ports::{RecordStorePort, StorageError};

/// In-memory record store for tests and previews. Not durable.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStorePort for MemoryRecordStore {
    async fn read_record(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn write_record(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_and_overwrite() {
        let store = MemoryRecordStore::new();

        assert_eq!(store.read_record("k").await.unwrap(), None);
        store.write_record("k", b"one").await.unwrap();
        store.write_record("k", b"two").await.unwrap();
        assert_eq!(
            store.read_record("k").await.unwrap().as_deref(),
            Some(&b"two"[..])
        );
    }
}
