//! Aggregation session
//!
//! Pages are fetched one at a time because the key of page N depends on the
//! `totalPages` reported by page N-1. The page-count target (`size`) only
//! grows within a session; the auto-fill step grows it while too few items
//! are visible and the server reports more results than the pages requested
//! so far could hold.

use super::types::{Delivery, PageRequest};
use crate::config::AutoFillPolicy;
use crate::error::{Error, Result};
use crate::filter::{filter_visible, VisibilityPreferences};
use crate::media::{MediaItem, ResultsPage};
use crate::pagination::{NextPage, Paginator};
use tracing::{debug, warn};

/// State of one slider for one listing URL
#[derive(Debug)]
pub struct AggregationSession {
    url: String,
    generation: u64,
    policy: AutoFillPolicy,
    /// Fetched pages; index i holds page i + 1
    pages: Vec<ResultsPage>,
    /// Number of pages wanted
    size: usize,
    /// Page currently being fetched
    in_flight: Option<u32>,
    /// The paginator reported no page after the last fetched one
    exhausted: bool,
    error: Option<Error>,
}

impl AggregationSession {
    /// Start a session for `url`
    pub fn new(url: impl Into<String>, generation: u64, policy: AutoFillPolicy) -> Self {
        Self {
            url: url.into(),
            generation,
            policy,
            pages: Vec::new(),
            size: policy.initial_size,
            in_flight: None,
            exhausted: false,
            error: None,
        }
    }

    /// Listing URL (query key) of this session
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn policy(&self) -> &AutoFillPolicy {
        &self.policy
    }

    /// Current page-count target
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fetched pages in page order
    pub fn pages(&self) -> &[ResultsPage] {
        &self.pages
    }

    pub fn first_page(&self) -> Option<&ResultsPage> {
        self.pages.first()
    }

    /// `totalResults` of page 1, or 0 before it arrives
    pub fn total_results(&self) -> u64 {
        self.first_page().map_or(0, |page| page.total_results)
    }

    /// Fetch failure that stopped the session, if any
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// No page fetched yet and nothing failed
    pub fn is_loading(&self) -> bool {
        self.pages.is_empty() && self.error.is_none()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// All results across fetched pages, in page then server order
    pub fn items(&self) -> impl Iterator<Item = &MediaItem> {
        self.pages.iter().flat_map(|page| page.results.iter())
    }

    /// Items left after visibility filtering
    pub fn visible(&self, prefs: &VisibilityPreferences) -> Vec<&MediaItem> {
        filter_visible(self.items(), prefs)
    }

    /// Next page to request, if the session wants one.
    ///
    /// Returns `None` while a fetch is outstanding, once `size` pages are
    /// present, after the listing ran out of pages, or after a failure.
    pub fn next_request(&mut self, paginator: &dyn Paginator) -> Option<PageRequest> {
        if self.error.is_some() || self.exhausted || self.in_flight.is_some() {
            return None;
        }
        if self.pages.len() >= self.size {
            return None;
        }

        match paginator.next_page(&self.url, self.pages.len(), self.pages.last()) {
            NextPage::Fetch { page, url } => {
                self.in_flight = Some(page);
                Some(PageRequest {
                    generation: self.generation,
                    page,
                    url,
                })
            }
            NextPage::Done => {
                debug!(
                    "Listing {} has no page {}, stopping",
                    self.url,
                    self.pages.len() + 1
                );
                self.exhausted = true;
                None
            }
        }
    }

    /// Apply the result of a fetch issued by [`next_request`](Self::next_request)
    pub fn deliver(&mut self, request: &PageRequest, result: Result<ResultsPage>) -> Delivery {
        if request.generation != self.generation || self.in_flight != Some(request.page) {
            debug!(
                "Discarding page {} of generation {} (current generation {})",
                request.page, request.generation, self.generation
            );
            return Delivery::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                self.pages.push(page);
                Delivery::Committed
            }
            Err(e) => {
                warn!("Failed to fetch {}: {}", request.url, e);
                self.error = Some(e);
                Delivery::Failed
            }
        }
    }

    /// Whether the auto-fill conditions currently hold
    fn wants_auto_fill(&self, prefs: &VisibilityPreferences) -> bool {
        let budget = (self.size as u64).saturating_mul(self.policy.per_page_budget);

        self.size < self.policy.max_pages
            && self.total_results() > budget
            && self.visible(prefs).len() < self.policy.min_visible
    }

    /// One auto-fill evaluation; grows `size` by one when every condition holds
    pub fn auto_fill_step(&mut self, prefs: &VisibilityPreferences) -> bool {
        if !self.wants_auto_fill(prefs) {
            return false;
        }

        self.size += 1;
        debug!(
            "Auto-fill for {}: {} total results, size -> {}",
            self.url,
            self.total_results(),
            self.size
        );
        true
    }

    /// Run auto-fill until it stops growing `size`; returns the number of steps taken.
    ///
    /// Safe to call any number of times: with unchanged data and preferences
    /// a second call takes no steps.
    pub fn reconcile(&mut self, prefs: &VisibilityPreferences) -> usize {
        let mut steps = 0;
        while self.auto_fill_step(prefs) {
            steps += 1;
        }
        steps
    }

    /// Nothing left to do until data, preferences or URL change
    pub fn is_settled(&self, prefs: &VisibilityPreferences) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        if self.error.is_some() {
            return true;
        }
        if self.pages.len() < self.size && !self.exhausted {
            return false;
        }

        !self.wants_auto_fill(prefs)
    }
}
