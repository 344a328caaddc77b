//! Preference store over the file-backed record store.

use std::sync::Arc;

use tempfile::tempdir;
use vf_app::PreferenceStore;
use vf_core::preferences::{PreferenceSet, PreferenceUpdate, Theme};
use vf_infra::FileRecordStore;

#[tokio::test]
async fn test_settings_survive_process_restart() {
    let dir = tempdir().unwrap();

    {
        let records = Arc::new(FileRecordStore::new(dir.path()));
        let store = PreferenceStore::load(records).await;
        store
            .update(PreferenceUpdate {
                theme: Some(Theme::Dark),
                biometrics_enabled: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let records = Arc::new(FileRecordStore::new(dir.path()));
    let store = PreferenceStore::load(records).await;
    let prefs = store.get().await;

    assert_eq!(prefs.theme, Theme::Dark);
    assert!(prefs.biometrics_enabled);
    assert!(prefs.notifications_enabled);
}

#[tokio::test]
async fn test_corrupt_file_resets_to_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("vaultflow.preferences.json"), b"oops").unwrap();

    let records = Arc::new(FileRecordStore::new(dir.path()));
    let store = PreferenceStore::load(records).await;

    assert_eq!(store.get().await, PreferenceSet::default());

    // The defaults were persisted over the corrupt record, so the next
    // start is an ordinary load.
    let contents = std::fs::read(dir.path().join("vaultflow.preferences.json")).unwrap();
    let parsed: PreferenceSet = serde_json::from_slice(&contents).unwrap();
    assert_eq!(parsed, PreferenceSet::default());
}

#[tokio::test]
async fn test_reset_clears_persisted_customization() {
    let dir = tempdir().unwrap();
    let records = Arc::new(FileRecordStore::new(dir.path()));
    let store = PreferenceStore::load(records).await;

    store
        .update(PreferenceUpdate {
            notifications_enabled: Some(false),
            theme: Some(Theme::Light),
            ..Default::default()
        })
        .await
        .unwrap();
    store.reset().await.unwrap();

    let reloaded = PreferenceStore::load(Arc::new(FileRecordStore::new(dir.path()))).await;
    assert_eq!(reloaded.get().await, PreferenceSet::default());
}
