//! HTTP client module
//!
//! Provides the HTTP client used to pull listing pages.
//!
//! # Features
//!
//! - **Base URL joining**: sliders are configured with relative listing paths
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Opt-in Retries**: Constant, linear, and exponential backoff

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
