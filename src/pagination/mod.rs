//! Pagination module
//!
//! Computes the request key of each listing page.
//!
//! # Overview
//!
//! A listing is read as `base?page=1`, `base?page=2`, ... Each page reports
//! how many pages exist, so the key of page N depends on page N-1: once the
//! previous page says there is nothing past it, no further key is produced.

mod strategies;
mod types;

pub use strategies::PageNumberPaginator;
pub use types::{NextPage, Paginator};

#[cfg(test)]
mod tests;
