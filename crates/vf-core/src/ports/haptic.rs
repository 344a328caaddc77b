use crate::haptics::HapticStrength;

/// Fire-and-forget haptic feedback.
///
/// Invoked by the hosting screen layer on step transitions, not by the
/// flow controller itself; `haptic_for_transition` names the intended
/// trigger points.
pub trait HapticPort: Send + Sync {
    fn tap(&self, strength: HapticStrength);
}
