use std::sync::{Arc, Mutex};

use tracing::{info, info_span, warn, Instrument};
use vf_core::onboarding::{AdvanceIntent, FlowError, OnboardingState, OnboardingStep, StepError};
use vf_core::ports::{AuthenticatorPort, BiometricCapabilityPort, ProvisionerPort};
use vf_core::preferences::PreferenceUpdate;

use crate::preferences::PreferenceStore;

const DEVICE_KEY_PROMPT: &str = "Confirm your identity to secure this device";

/// Which effect the `DeviceKey` step runs.
///
/// Resolved once at flow start from the capability probe, so the per-step
/// logic stays branch-free: the biometric path never reaches the simulated
/// key generation and the fallback path never touches the authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceKeyEffect {
    Biometric,
    Simulated,
}

struct FlowInner {
    state: OnboardingState,
    device_key_effect: DeviceKeyEffect,
}

/// Linear state machine driving the secure-onboarding flow.
///
/// The hosting screen layer owns one instance, renders from the state this
/// returns, and dispatches user intents into [`advance`](Self::advance).
/// The flow never touches storage or UI itself; provisioning work goes
/// through injected ports and the one terminal write goes through the
/// preference store.
pub struct OnboardingFlow {
    authenticator: Arc<dyn AuthenticatorPort>,
    capability: Arc<dyn BiometricCapabilityPort>,
    provisioner: Arc<dyn ProvisionerPort>,
    preferences: Arc<PreferenceStore>,
    inner: Mutex<FlowInner>,
}

impl OnboardingFlow {
    pub fn new(
        authenticator: Arc<dyn AuthenticatorPort>,
        capability: Arc<dyn BiometricCapabilityPort>,
        provisioner: Arc<dyn ProvisionerPort>,
        preferences: Arc<PreferenceStore>,
    ) -> Self {
        Self {
            authenticator,
            capability,
            provisioner,
            preferences,
            inner: Mutex::new(FlowInner {
                state: OnboardingState::new(),
                device_key_effect: DeviceKeyEffect::Simulated,
            }),
        }
    }

    /// Reset to `Welcome` and resolve the `DeviceKey` effect selection.
    ///
    /// Reads the biometric capability flag exactly once; the decision holds
    /// for the rest of the flow. Idempotent.
    pub fn start(&self) -> OnboardingState {
        let biometric = self.capability.biometric_available();
        let mut inner = self.inner.lock().unwrap();
        inner.state = OnboardingState::new();
        inner.device_key_effect = if biometric {
            DeviceKeyEffect::Biometric
        } else {
            DeviceKeyEffect::Simulated
        };
        info!(biometric, "onboarding flow started");
        inner.state.clone()
    }

    /// Single mutating entry point: run the current step's effect and, on
    /// success, commit the transition to the next step.
    ///
    /// Rejected with [`FlowError::ConcurrentAdvance`] while an effect is in
    /// flight. Validation and provisioning failures are recorded in the
    /// returned state, never returned as `Err`.
    pub async fn advance(&self, intent: AdvanceIntent) -> Result<OnboardingState, FlowError> {
        let step = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state.is_provisioning {
                return Err(FlowError::ConcurrentAdvance);
            }
            match inner.state.current_step {
                OnboardingStep::Welcome => {
                    return Ok(commit_transition(&mut inner.state, OnboardingStep::Welcome));
                }
                OnboardingStep::Complete => {
                    // Terminal: advancing is a no-op.
                    return Ok(inner.state.clone());
                }
                OnboardingStep::RecoveryKey => {
                    let contact = intent
                        .recovery_contact
                        .as_deref()
                        .unwrap_or("")
                        .trim()
                        .to_string();
                    if contact.is_empty() {
                        inner.state.error = Some(StepError::Validation {
                            reason: "recovery contact must not be empty".into(),
                        });
                        return Ok(inner.state.clone());
                    }
                    inner.state.recovery_contact = Some(contact);
                    inner.state.error = None;
                    inner.state.is_provisioning = true;
                    OnboardingStep::RecoveryKey
                }
                step @ (OnboardingStep::DeviceKey | OnboardingStep::CloudKey) => {
                    inner.state.error = None;
                    inner.state.is_provisioning = true;
                    step
                }
            }
        };

        self.run_effect_and_settle(step)
            .instrument(info_span!("onboarding.advance", step = ?step))
            .await
    }

    /// Clear the inline error and re-run the current step's effect without
    /// advancing the step index. A successful retry commits the same
    /// transition a successful `advance` would.
    pub async fn retry(&self) -> Result<OnboardingState, FlowError> {
        let step = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state.is_provisioning {
                return Err(FlowError::ConcurrentAdvance);
            }
            inner.state.error = None;
            match inner.state.current_step {
                OnboardingStep::Welcome | OnboardingStep::Complete => {
                    // No effect to re-run.
                    return Ok(inner.state.clone());
                }
                OnboardingStep::RecoveryKey if inner.state.recovery_contact.is_none() => {
                    // Nothing submitted yet, nothing to retry.
                    return Ok(inner.state.clone());
                }
                step => {
                    inner.state.is_provisioning = true;
                    step
                }
            }
        };

        self.run_effect_and_settle(step)
            .instrument(info_span!("onboarding.retry", step = ?step))
            .await
    }

    pub fn current_step(&self) -> OnboardingStep {
        self.inner.lock().unwrap().state.current_step
    }

    /// Display progress in `[0, 1]`.
    pub fn progress_fraction(&self) -> f32 {
        self.current_step().progress_fraction()
    }

    /// Snapshot of the full flow state.
    pub fn state(&self) -> OnboardingState {
        self.inner.lock().unwrap().state.clone()
    }

    async fn run_effect_and_settle(&self, step: OnboardingStep) -> Result<OnboardingState, FlowError> {
        match self.run_step_effect(step).await {
            Ok(()) => {
                if step == OnboardingStep::RecoveryKey {
                    // Persist completion before committing the terminal
                    // transition, so a failed write leaves the flow on
                    // RecoveryKey with the write retryable.
                    let update = PreferenceUpdate {
                        onboarding_complete: Some(true),
                        ..Default::default()
                    };
                    if let Err(err) = self.preferences.update(update).await {
                        warn!(error = %err, "failed to persist onboarding completion");
                        self.inner.lock().unwrap().state.is_provisioning = false;
                        return Err(FlowError::Storage(err));
                    }
                }
                let mut inner = self.inner.lock().unwrap();
                inner.state.is_provisioning = false;
                Ok(commit_transition(&mut inner.state, step))
            }
            Err(step_error) => {
                warn!(step = ?step, error = %step_error, "onboarding step effect failed");
                let mut inner = self.inner.lock().unwrap();
                inner.state.is_provisioning = false;
                inner.state.error = Some(step_error);
                Ok(inner.state.clone())
            }
        }
    }

    async fn run_step_effect(&self, step: OnboardingStep) -> Result<(), StepError> {
        match step {
            OnboardingStep::DeviceKey => {
                let effect = self.inner.lock().unwrap().device_key_effect;
                match effect {
                    DeviceKeyEffect::Biometric => self
                        .authenticator
                        .authenticate(DEVICE_KEY_PROMPT)
                        .await
                        .map_err(|err| StepError::Provisioning {
                            reason: err.to_string(),
                        }),
                    DeviceKeyEffect::Simulated => self
                        .provisioner
                        .generate_device_key()
                        .await
                        .map_err(|err| StepError::Provisioning { reason: err.reason }),
                }
            }
            OnboardingStep::CloudKey => self
                .provisioner
                .backup_cloud_key()
                .await
                .map_err(|err| StepError::Provisioning { reason: err.reason }),
            OnboardingStep::RecoveryKey => {
                let contact = {
                    let inner = self.inner.lock().unwrap();
                    inner.state.recovery_contact.clone().unwrap_or_default()
                };
                self.provisioner
                    .verify_recovery_contact(&contact)
                    .await
                    .map_err(|err| StepError::Provisioning { reason: err.reason })
            }
            OnboardingStep::Welcome | OnboardingStep::Complete => Ok(()),
        }
    }
}

/// Mark `from` completed and move to its successor, clearing the error.
fn commit_transition(state: &mut OnboardingState, from: OnboardingStep) -> OnboardingState {
    state.completed_steps.insert(from);
    if let Some(next) = from.next() {
        state.current_step = next;
    }
    state.error = None;
    info!(from = ?from, to = ?state.current_step, "onboarding step completed");
    state.clone()
}
