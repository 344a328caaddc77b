use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use vf_core::ports::{RecordStorePort, StorageError};

/// File-backed record store: one JSON file per key under a root directory.
///
/// Writes go to a temp file first and are renamed into place, so the
/// on-disk record is always either the previous contents or the fully
/// written new contents.
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    async fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await.map_err(|err| {
            StorageError::Write(format!(
                "create record dir {} failed: {err}",
                self.root.display()
            ))
        })
    }
}

#[async_trait]
impl RecordStorePort for FileRecordStore {
    async fn read_record(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.record_path(key);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(format!(
                "read {} failed: {err}",
                path.display()
            ))),
        }
    }

    async fn write_record(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.ensure_root().await?;

        let path = self.record_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).await.map_err(|err| {
            StorageError::Write(format!("write {} failed: {err}", tmp_path.display()))
        })?;
        // TODO: rename-over-existing can misbehave on Windows; fine on
        // macOS/Linux.
        fs::rename(&tmp_path, &path).await.map_err(|err| {
            StorageError::Write(format!(
                "rename {} -> {} failed: {err}",
                tmp_path.display(),
                path.display()
            ))
        })
    }
}
