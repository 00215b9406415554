//! Media listing model
//!
//! Wire types for the paged listing endpoint: one [`ResultsPage`] per
//! `?page=N` request, each carrying a mix of movies, series and people.
//!
//! # Overview
//!
//! - `MediaItem` - Tagged union over movie, tv and person results
//! - `MediaInfo` / `MediaStatus` - Request/availability state of a title
//! - `ResultsPage` - One page of a listing with its pagination metadata

mod types;

pub use types::{
    DownloadProgress, MediaInfo, MediaItem, MediaStatus, MediaType, MovieResult, PersonResult,
    ResultsPage, TvResult,
};
