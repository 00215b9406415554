//! Pagination strategy implementations

use super::types::{NextPage, Paginator};
use crate::media::ResultsPage;

// ============================================================================
// Page Number Pagination
// ============================================================================

/// Page number pagination
///
/// Appends the page number as a query parameter:
/// - `/api/v1/discover/movies?page=2`
/// - `/api/v1/search?query=alien&page=2`
#[derive(Debug, Clone)]
pub struct PageNumberPaginator {
    /// Query parameter name for page number
    pub page_param: String,
}

impl Default for PageNumberPaginator {
    fn default() -> Self {
        Self {
            page_param: "page".to_string(),
        }
    }
}

impl PageNumberPaginator {
    /// Create a new page number paginator
    pub fn new(page_param: impl Into<String>) -> Self {
        Self {
            page_param: page_param.into(),
        }
    }

    /// Request key for a 1-based page number
    pub fn page_url(&self, base_url: &str, page: u32) -> String {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{base_url}{separator}{}={page}", self.page_param)
    }
}

impl Paginator for PageNumberPaginator {
    fn next_page(
        &self,
        base_url: &str,
        page_index: usize,
        previous: Option<&ResultsPage>,
    ) -> NextPage {
        let page = page_index as u32 + 1;

        if let Some(previous) = previous {
            if !previous.has_page(page) {
                return NextPage::Done;
            }
        }

        NextPage::fetch(page, self.page_url(base_url, page))
    }
}
