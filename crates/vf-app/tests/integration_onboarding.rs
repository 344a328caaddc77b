//! End-to-end onboarding flow over real adapters.
//!
//! Drives the flow the way a hosting screen would: file-backed preference
//! storage, simulated provisioning, and haptic taps fired on committed
//! transitions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::tempdir;
use vf_app::{OnboardingFlow, PreferenceStore};
use vf_core::haptics::{haptic_for_transition, HapticStrength};
use vf_core::onboarding::{AdvanceIntent, OnboardingStep, StepError};
use vf_core::ports::{AuthError, AuthenticatorPort, BiometricCapabilityPort, HapticPort};
use vf_infra::{FileRecordStore, SimulatedProvisioner};

struct NoBiometrics;

impl BiometricCapabilityPort for NoBiometrics {
    fn biometric_available(&self) -> bool {
        false
    }
}

struct CountingAuthenticator {
    calls: AtomicUsize,
}

#[async_trait]
impl AuthenticatorPort for CountingAuthenticator {
    async fn authenticate(&self, _prompt_message: &str) -> Result<(), AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingHaptics {
    taps: Mutex<Vec<HapticStrength>>,
}

impl HapticPort for RecordingHaptics {
    fn tap(&self, strength: HapticStrength) {
        self.taps.lock().unwrap().push(strength);
    }
}

#[tokio::test]
async fn test_full_flow_scenario_without_biometrics() {
    let dir = tempdir().unwrap();
    let records = Arc::new(FileRecordStore::new(dir.path()));
    let store = Arc::new(PreferenceStore::load(records.clone()).await);
    let authenticator = Arc::new(CountingAuthenticator {
        calls: AtomicUsize::new(0),
    });
    let haptics = RecordingHaptics::default();

    let completion_updates = Arc::new(AtomicUsize::new(0));
    let _sub = store.subscribe({
        let completion_updates = completion_updates.clone();
        move |prefs| {
            if prefs.onboarding_complete {
                completion_updates.fetch_add(1, Ordering::SeqCst);
            }
        }
    });

    let flow = OnboardingFlow::new(
        authenticator.clone(),
        Arc::new(NoBiometrics),
        Arc::new(SimulatedProvisioner::instant()),
        store.clone(),
    );

    let state = flow.start();
    assert_eq!(state.current_step, OnboardingStep::Welcome);

    // Drive the flow as the screen layer would, firing a haptic tap for
    // every committed transition.
    let intents = [
        AdvanceIntent::default(),
        AdvanceIntent::default(),
        AdvanceIntent::default(),
        AdvanceIntent::with_recovery_contact("a@b.com"),
    ];
    let mut previous = state.current_step;
    for intent in intents {
        let state = flow.advance(intent).await.unwrap();
        assert!(state.error.is_none());
        haptics.tap(haptic_for_transition(previous, state.current_step));
        previous = state.current_step;
    }

    assert_eq!(flow.current_step(), OnboardingStep::Complete);
    assert_eq!(flow.progress_fraction(), 1.0);
    assert_eq!(authenticator.calls.load(Ordering::SeqCst), 0);
    assert_eq!(completion_updates.load(Ordering::SeqCst), 1);
    assert_eq!(
        haptics.taps.lock().unwrap().as_slice(),
        &[
            HapticStrength::Light,
            HapticStrength::Medium,
            HapticStrength::Medium,
            HapticStrength::Heavy,
        ]
    );

    // A fresh store over the same files sees the completion flag: the
    // write survived the "restart".
    let reloaded = PreferenceStore::load(records).await;
    assert!(reloaded.get().await.onboarding_complete);
}

#[tokio::test]
async fn test_empty_contact_rejected_mid_scenario() {
    let dir = tempdir().unwrap();
    let records = Arc::new(FileRecordStore::new(dir.path()));
    let store = Arc::new(PreferenceStore::load(records).await);

    let flow = OnboardingFlow::new(
        Arc::new(CountingAuthenticator {
            calls: AtomicUsize::new(0),
        }),
        Arc::new(NoBiometrics),
        Arc::new(SimulatedProvisioner::instant()),
        store.clone(),
    );

    flow.start();
    for _ in 0..3 {
        flow.advance(AdvanceIntent::default()).await.unwrap();
    }

    let state = flow
        .advance(AdvanceIntent::with_recovery_contact(""))
        .await
        .unwrap();
    assert_eq!(state.current_step, OnboardingStep::RecoveryKey);
    assert!(matches!(state.error, Some(StepError::Validation { .. })));
    assert!(!store.get().await.onboarding_complete);

    let state = flow
        .advance(AdvanceIntent::with_recovery_contact("a@b.com"))
        .await
        .unwrap();
    assert_eq!(state.current_step, OnboardingStep::Complete);
    assert!(store.get().await.onboarding_complete);
}
