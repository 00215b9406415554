//! Request throttling
//!
//! Every slider on a screen pulls pages from the same media server, so one
//! limiter is shared by all requests of an [`HttpClient`](super::HttpClient).

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

/// Requests allowed per second, plus how many may go out back to back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    pub requests_per_second: u32,
    /// Defaults to `requests_per_second` when omitted
    #[serde(default)]
    pub burst_size: Option<u32>,
}

impl RateLimiterConfig {
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size: Some(burst_size),
        }
    }

    /// Limit to `requests_per_second` with an equal burst
    pub fn per_second(requests_per_second: u32) -> Self {
        Self {
            requests_per_second,
            burst_size: None,
        }
    }

    fn quota(&self) -> Quota {
        // Zero would make the limiter block forever
        let rate = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = self
            .burst_size
            .and_then(NonZeroU32::new)
            .unwrap_or(rate);
        Quota::per_second(rate).allow_burst(burst)
    }
}

/// Shared token bucket
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            limiter: Arc::new(Governor::direct(config.quota())),
        }
    }

    /// Take a permit, waiting for one if the bucket is empty.
    ///
    /// Returns `true` if the caller was throttled.
    pub async fn acquire(&self) -> bool {
        if self.limiter.check().is_ok() {
            return false;
        }

        debug!("Rate limit reached, waiting for a permit");
        self.limiter.until_ready().await;
        true
    }

    /// Take a permit only if one is available right now
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}
