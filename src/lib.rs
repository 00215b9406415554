//! # Media Slider
//!
//! Incremental aggregation of paged media listings for horizontally
//! scrolling "sliders".
//!
//! ## Features
//!
//! - **Sequential Paging**: Pages are requested one at a time; a page is only
//!   requested if the previous one reports it exists
//! - **Visibility Filtering**: Hide titles that are available (and optionally
//!   requested) while always keeping people
//! - **Auto-Fill**: Fetch ahead when filtering leaves too few visible items
//! - **Reactive Driver**: Preference and URL changes restart or extend the
//!   session; late results for an old URL are dropped
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use media_slider::{Aggregator, HttpClient, HttpPageSource, PreferencesStore, SliderConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> media_slider::Result<()> {
//!     let client = Arc::new(HttpClient::new()?);
//!     let source = Arc::new(HttpPageSource::new(client));
//!     let prefs = PreferencesStore::default();
//!
//!     let slider = SliderConfig::new("trending", "Trending", "http://localhost:5055/api/v1/discover/trending");
//!     let mut aggregator = Aggregator::new(slider, source, prefs.subscribe());
//!
//!     if let Some(view) = aggregator.settle().await {
//!         println!("{} cards", view.units.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                  Aggregator (settle / run)                    │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬─────────────────┼───────────────┬─────────────────┐
//! │   HTTP    │     Session     │    Filter     │     Render      │
//! ├───────────┼─────────────────┼───────────────┼─────────────────┤
//! │ Retry     │ Page fetcher    │ Visibility    │ Display units   │
//! │ Rate Limit│ Auto-fill       │ Preferences   │ Show-more card  │
//! │ Backoff   │ Stale discard   │               │ Text renderer   │
//! └───────────┴─────────────────┴───────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client with retry and rate limiting
pub mod http;

/// Listing payloads
pub mod media;

/// Visibility filtering and preferences
pub mod filter;

/// Page key derivation
pub mod pagination;

/// Aggregation sessions and page sources
pub mod session;

/// Presentation mapping
pub mod render;

/// Slider drivers
pub mod aggregator;

/// Slider and settings configuration
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod fixtures;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use aggregator::{Aggregator, SliderCommand, SliderHandle};
pub use config::{load_settings, load_settings_from_str, AutoFillPolicy, Settings, SliderConfig};
pub use filter::{PreferencesStore, VisibilityPreferences};
pub use http::{HttpClient, HttpClientConfig};
pub use media::{MediaItem, MediaStatus, ResultsPage};
pub use render::{DisplayUnit, SliderView};
pub use session::{AggregationSession, HttpPageSource, PageSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
