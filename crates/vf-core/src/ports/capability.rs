/// Device capability probe.
pub trait BiometricCapabilityPort: Send + Sync {
    /// Whether biometric hardware is present and enrolled. Read once when
    /// the onboarding flow starts; the result selects the `DeviceKey`
    /// step's effect for the rest of the flow.
    fn biometric_available(&self) -> bool;
}
