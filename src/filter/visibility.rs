//! Visibility rule

use crate::media::MediaItem;
use serde::{Deserialize, Serialize};

/// User-controlled flags that suppress already available or requested titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibilityPreferences {
    /// Hide titles that are available or partially available
    #[serde(default)]
    pub hide_available: bool,
    /// Hide titles that are pending or processing
    #[serde(default)]
    pub hide_requested: bool,
}

impl VisibilityPreferences {
    /// Create preferences
    pub fn new(hide_available: bool, hide_requested: bool) -> Self {
        Self {
            hide_available,
            hide_requested,
        }
    }

    /// True when any preference asks for filtering
    pub fn is_active(&self) -> bool {
        self.hide_available || self.hide_requested
    }
}

/// Decide whether one item stays in the listing.
///
/// Once any preference is active, available titles are dropped even if only
/// `hide_requested` is set. Requested titles are dropped only with
/// `hide_requested`. Items without media info count as neither.
pub fn is_visible(item: &MediaItem, prefs: &VisibilityPreferences) -> bool {
    if !prefs.is_active() || item.is_person() {
        return true;
    }

    match item.status() {
        Some(status) => {
            !status.is_available() && (!prefs.hide_requested || !status.is_requested())
        }
        None => true,
    }
}

/// Filter a flattened listing, preserving order
pub fn filter_visible<'a, I>(items: I, prefs: &VisibilityPreferences) -> Vec<&'a MediaItem>
where
    I: IntoIterator<Item = &'a MediaItem>,
{
    items
        .into_iter()
        .filter(|item| is_visible(item, prefs))
        .collect()
}
