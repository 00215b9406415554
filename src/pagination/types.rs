//! Pagination types and traits

use crate::media::ResultsPage;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this page
    Fetch {
        /// 1-based page number
        page: u32,
        /// Request key (relative or absolute URL)
        url: String,
    },
    /// The listing has no such page
    Done,
}

impl NextPage {
    /// Create a fetch result
    pub fn fetch(page: u32, url: impl Into<String>) -> Self {
        Self::Fetch {
            page,
            url: url.into(),
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Request key, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Fetch { url, .. } => Some(url),
            Self::Done => None,
        }
    }
}

/// Strategy producing the key of each page of a listing
pub trait Paginator: Send + Sync {
    /// Key for the page at `page_index` (0-based), given the page before it.
    ///
    /// `previous` is `None` only for the first page.
    fn next_page(&self, base_url: &str, page_index: usize, previous: Option<&ResultsPage>)
        -> NextPage;
}
