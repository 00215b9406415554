//! Aggregation sessions
//!
//! A session is the lifetime of one slider for one listing URL. It owns the
//! fetched pages and the page-count target, and decides which page to
//! request next.
//!
//! # Overview
//!
//! - `AggregationSession` - Page store, fetch scheduling and auto-fill
//! - `PageSource` - Where pages come from (`HttpPageSource` in production)
//! - `PageRequest` / `Delivery` - One fetch and how its result was applied

mod aggregation;
mod source;
mod types;

pub use aggregation::AggregationSession;
pub use source::{HttpPageSource, PageSource};
pub use types::{Delivery, PageRequest};
