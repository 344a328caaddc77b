//! User preference model.
//!
//! The durable record of user-configurable settings plus the partial-update
//! type used for field-by-field merges.

pub mod defaults;
pub mod model;

pub use model::{PreferenceSet, PreferenceUpdate, Theme, PREFERENCES_RECORD_KEY};
