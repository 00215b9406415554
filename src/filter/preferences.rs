//! Live visibility preferences
//!
//! The settings subsystem owns the values; sliders only observe them. A
//! `watch` channel gives every aggregator the latest snapshot and a change
//! notification without locking.

use super::visibility::VisibilityPreferences;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared holder for the current [`VisibilityPreferences`]
#[derive(Clone, Debug)]
pub struct PreferencesStore {
    sender: Arc<watch::Sender<VisibilityPreferences>>,
    receiver: watch::Receiver<VisibilityPreferences>,
}

impl PreferencesStore {
    /// Create a store seeded with `initial`
    pub fn new(initial: VisibilityPreferences) -> Self {
        let (sender, receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Current snapshot
    pub fn current(&self) -> VisibilityPreferences {
        *self.receiver.borrow()
    }

    /// Subscribe to changes
    pub fn subscribe(&self) -> watch::Receiver<VisibilityPreferences> {
        self.receiver.clone()
    }

    /// Replace the preferences, waking subscribers only on an actual change
    pub fn set(&self, prefs: VisibilityPreferences) {
        self.sender.send_if_modified(|current| {
            if *current == prefs {
                false
            } else {
                *current = prefs;
                true
            }
        });
    }
}

impl Default for PreferencesStore {
    fn default() -> Self {
        Self::new(VisibilityPreferences::default())
    }
}
