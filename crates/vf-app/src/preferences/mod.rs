//! Observable preference store.

pub mod store;

pub use store::{PreferenceStore, Subscription};
