//! HTTP client for listing endpoints
//!
//! Sliders are configured with paths relative to the media server, e.g.
//! `/api/v1/discover/movies?page=2`. The client resolves them against the
//! server base URL, attaches the default headers and optionally throttles
//! and retries. Retries are off by default: one failed page fails the
//! session.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use crate::types::{BackoffType, StringMap};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Connection settings for one media server
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Server root that listing paths are resolved against
    pub base_url: Option<String>,
    pub timeout: Duration,
    /// Extra attempts after a retryable failure
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub backoff_type: BackoffType,
    pub rate_limit: Option<RateLimiterConfig>,
    /// Sent with every request
    pub default_headers: StringMap,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            max_retries: 0,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(10),
            backoff_type: BackoffType::Exponential,
            rate_limit: None,
            default_headers: StringMap::new(),
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl HttpClientConfig {
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for [`HttpClientConfig`]
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Enable retries of 429, 5xx, timeouts and connection errors.
    ///
    /// With a value above 0 a page fetch only fails after its last attempt,
    /// instead of on the first failed request.
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    #[must_use]
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    #[must_use]
    pub fn rate_limit(mut self, limit: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(name.into(), value.into());
        self
    }

    /// Authenticate with an `X-Api-Key` header
    #[must_use]
    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.header("X-Api-Key", key)
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Client for one media server
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    /// Parsed base URL, always ending in `/`
    base: Option<Url>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Client without base URL; only absolute URLs can be fetched
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let base = match &config.base_url {
            Some(base) if base.ends_with('/') => Some(Url::parse(base)?),
            Some(base) => Some(Url::parse(&format!("{base}/"))?),
            None => None,
        };

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            base,
            rate_limiter,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Resolve a listing path against the base URL.
    ///
    /// Absolute URLs pass through. Any path on the base URL is kept, so a
    /// server mounted under `/seerr/` still gets `/seerr/api/...`.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        if let Ok(absolute) = Url::parse(path) {
            return Ok(absolute);
        }

        match &self.base {
            Some(base) => Ok(base.join(path.trim_start_matches('/'))?),
            None => Err(Error::config(format!(
                "Relative path '{path}' needs a base URL"
            ))),
        }
    }

    /// GET `path` and return the body as text
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let response = self.get(path).await?;
        Ok(response.text().await?)
    }

    /// GET `path`, retrying retryable failures up to `max_retries` times
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.resolve(path)?;
        let max_retries = self.config.max_retries;
        let mut attempt = 0;

        loop {
            if let Some(limiter) = &self.rate_limiter {
                limiter.acquire().await;
            }

            let error = match self.send_once(&url).await {
                Ok(response) => {
                    debug!("GET {} -> {}", url, response.status());
                    return Ok(response);
                }
                Err(e) => e,
            };

            if !error.is_retryable() || attempt >= max_retries {
                return Err(error);
            }

            let delay = match &error {
                Error::RateLimited {
                    retry_after_seconds,
                } => Duration::from_secs(*retry_after_seconds).min(self.config.max_backoff),
                _ => self.calculate_backoff(attempt),
            };
            attempt += 1;
            warn!(
                "GET {} failed ({}), retry {}/{} in {:?}",
                url, error, attempt, max_retries, delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn send_once(&self, url: &Url) -> Result<Response> {
        let mut request = self.client.get(url.clone());
        for (name, value) in &self.config.default_headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        check_status(response).await
    }

    /// Delay before retry number `attempt` (0-based)
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        self.config
            .backoff_type
            .delay(self.config.initial_backoff, attempt, self.config.max_backoff)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_seconds = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(60);
        return Err(Error::RateLimited {
            retry_after_seconds,
        });
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::http_status(status.as_u16(), body))
}
