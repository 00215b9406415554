//! Page sources

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::media::ResultsPage;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Something that can produce listing pages
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `url`; `page` is the number it was requested as
    async fn fetch_page(&self, url: &str, page: u32) -> Result<ResultsPage>;
}

/// Listing pages fetched over HTTP
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Arc<HttpClient>,
}

impl HttpPageSource {
    /// Create a source over a shared client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str, page: u32) -> Result<ResultsPage> {
        let body = self.client.get_text(url).await?;

        let parsed: ResultsPage = serde_json::from_str(&body)
            .map_err(|e| Error::malformed_page(url, page, e.to_string()))?;

        debug!(
            "Fetched {} page {}: {} results ({} total, {} pages)",
            url,
            page,
            parsed.results.len(),
            parsed.total_results,
            parsed.total_pages
        );
        Ok(parsed)
    }
}
