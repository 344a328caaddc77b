use serde::Deserialize;

/// Step-specific payload passed into the flow's single `advance` entry point.
///
/// Only `RecoveryKey` consumes a payload today; every other step advances on
/// an empty intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdvanceIntent {
    pub recovery_contact: Option<String>,
}

impl AdvanceIntent {
    pub fn with_recovery_contact(contact: impl Into<String>) -> Self {
        Self {
            recovery_contact: Some(contact.into()),
        }
    }
}
