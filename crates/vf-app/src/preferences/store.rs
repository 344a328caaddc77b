use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex, Weak};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use vf_core::ports::{RecordStorePort, StorageError};
use vf_core::preferences::{PreferenceSet, PreferenceUpdate, PREFERENCES_RECORD_KEY};

type SubscriberFn = Box<dyn Fn(&PreferenceSet) + Send + Sync>;

/// Typed, observable store for user settings.
///
/// Owns the single `PreferenceSet` record exclusively; all mutation goes
/// through `update`/`reset`. Each update fully completes — persistence,
/// memory commit, subscriber notification — before the next begins, so
/// callers never observe an interleaved partial merge.
pub struct PreferenceStore {
    records: Arc<dyn RecordStorePort>,
    current: Mutex<PreferenceSet>,
    subscribers: Arc<StdMutex<Vec<(u64, SubscriberFn)>>>,
    next_subscriber_id: AtomicU64,
}

impl PreferenceStore {
    /// Read the persisted record and build the store around it.
    ///
    /// Missing and corrupt records are both treated as a first run: the
    /// defaults are returned and persisted. Read failures degrade the same
    /// way; this path never fails.
    pub async fn load(records: Arc<dyn RecordStorePort>) -> Self {
        let loaded = match records.read_record(PREFERENCES_RECORD_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<PreferenceSet>(&bytes) {
                Ok(prefs) => Some(prefs),
                Err(err) => {
                    warn!(error = %err, "preference record corrupt, using defaults");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "preference record unreadable, using defaults");
                None
            }
        };

        let first_run = loaded.is_none();
        let prefs = loaded.unwrap_or_default();
        let store = Self {
            records,
            current: Mutex::new(prefs.clone()),
            subscribers: Arc::new(StdMutex::new(Vec::new())),
            next_subscriber_id: AtomicU64::new(0),
        };

        if first_run {
            info!("no usable preference record, persisting defaults");
            if let Err(err) = store.persist(&prefs).await {
                warn!(error = %err, "failed to persist default preferences");
            }
        }

        store
    }

    /// In-memory snapshot of the latest committed value. No I/O.
    pub async fn get(&self) -> PreferenceSet {
        self.current.lock().await.clone()
    }

    /// Merge `partial` into the current value, persist the full merged
    /// record, notify subscribers, and return the new value.
    ///
    /// The durable write happens before the in-memory commit; on a write
    /// failure the previous value stays in place and the error propagates.
    pub async fn update(&self, partial: PreferenceUpdate) -> Result<PreferenceSet, StorageError> {
        let mut current = self.current.lock().await;
        let merged = partial.apply(&current);
        self.persist(&merged).await?;
        *current = merged.clone();
        debug!(?merged, "preferences updated");
        self.notify(&merged);
        Ok(merged)
    }

    /// Replace the in-memory and persisted value with the defaults.
    pub async fn reset(&self) -> Result<PreferenceSet, StorageError> {
        let mut current = self.current.lock().await;
        let defaults = PreferenceSet::default();
        self.persist(&defaults).await?;
        *current = defaults.clone();
        info!("preferences reset to defaults");
        self.notify(&defaults);
        Ok(defaults)
    }

    /// Register a callback invoked synchronously after every committed
    /// `update`/`reset`, before the call returns. Dropping the returned
    /// `Subscription` deregisters it.
    ///
    /// Callbacks run while the store is mid-update and must not call back
    /// into it.
    pub fn subscribe(
        &self,
        callback: impl Fn(&PreferenceSet) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .unwrap()
            .push((id, Box::new(callback)));
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    async fn persist(&self, prefs: &PreferenceSet) -> Result<(), StorageError> {
        let bytes =
            serde_json::to_vec(prefs).map_err(|err| StorageError::Serialize(err.to_string()))?;
        self.records
            .write_record(PREFERENCES_RECORD_KEY, &bytes)
            .await
    }

    fn notify(&self, prefs: &PreferenceSet) {
        for (_, callback) in self.subscribers.lock().unwrap().iter() {
            callback(prefs);
        }
    }
}

/// Disposer for a preference subscription.
pub struct Subscription {
    id: u64,
    subscribers: Weak<StdMutex<Vec<(u64, SubscriberFn)>>>,
}

impl Subscription {
    /// Explicit deregistration; equivalent to dropping the subscription.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.lock().unwrap().retain(|(id, _)| *id != self.id);
        }
    }
}
