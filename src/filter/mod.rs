//! Visibility filtering
//!
//! Hides titles the user already has or already asked for, according to
//! [`VisibilityPreferences`]. People are never hidden.
//!
//! # Overview
//!
//! - `filter_visible` - Pure filter over a flattened listing
//! - `PreferencesStore` - Watch-channel holder for the live preferences

mod preferences;
mod visibility;

pub use preferences::PreferencesStore;
pub use visibility::{filter_visible, is_visible, VisibilityPreferences};
