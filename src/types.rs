//! Shared helper types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// ============================================================================
// Type Aliases
// ============================================================================

/// Header and query maps
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Backoff Type
// ============================================================================

/// How the delay grows between retries of a page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    Constant,
    Linear,
    #[default]
    Exponential,
}

impl BackoffType {
    /// Delay before retry number `attempt` (0-based), capped at `max`
    pub fn delay(self, initial: Duration, attempt: u32, max: Duration) -> Duration {
        let delay = match self {
            BackoffType::Constant => initial,
            BackoffType::Linear => initial.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => initial.saturating_mul(2u32.saturating_pow(attempt)),
        };
        delay.min(max)
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Treat empty strings from config files as unset
pub trait OptionStringExt {
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);

        let json = serde_json::to_string(&BackoffType::Exponential).unwrap();
        assert_eq!(json, "\"exponential\"");
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_backoff_delay() {
        let initial = Duration::from_millis(100);
        let max = Duration::from_secs(1);

        assert_eq!(BackoffType::Constant.delay(initial, 3, max), initial);
        assert_eq!(
            BackoffType::Linear.delay(initial, 2, max),
            Duration::from_millis(300)
        );
        assert_eq!(
            BackoffType::Exponential.delay(initial, 3, max),
            Duration::from_millis(800)
        );
        assert_eq!(BackoffType::Exponential.delay(initial, 40, max), max);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("/discover/movies".to_string()).none_if_empty(),
            Some("/discover/movies".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!(String::new().none_if_empty(), None);
    }
}
