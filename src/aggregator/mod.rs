//! Slider aggregator
//!
//! Drives an [`AggregationSession`](crate::session::AggregationSession)
//! against a [`PageSource`](crate::session::PageSource): issues page fetches,
//! commits their results, runs auto-fill after every commit and republishes
//! the slider view.
//!
//! # Overview
//!
//! - `Aggregator::settle` - Fetch until stable, then return the view
//! - `Aggregator::run` - Event loop reacting to fetches, preference and URL changes
//! - `SliderHandle` - Control and observe a spawned aggregator

mod driver;
mod handle;

pub use driver::{Aggregator, SliderCommand};
pub use handle::SliderHandle;
