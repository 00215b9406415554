//! Error types for media-slider
//!
//! One error enum for the whole crate. Fetch-side variants end an
//! aggregation session (see [`Error::is_fetch_failure`]); the rest come from
//! settings files and the slider task plumbing.

use thiserror::Error;

/// The main error type for media-slider
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Settings
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required setting: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid setting '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid settings YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Page fetching
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited by server, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Malformed page {page} from '{url}': {message}")]
    MalformedPage {
        url: String,
        page: u32,
        message: String,
    },

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Slider tasks
    // ============================================================================
    #[error("Slider session closed")]
    SessionClosed,

    #[error("Slider task failed: {0}")]
    TaskFailed(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn malformed_page(url: impl Into<String>, page: u32, message: impl Into<String>) -> Self {
        Self::MalformedPage {
            url: url.into(),
            page,
            message: message.into(),
        }
    }

    /// Transient failures worth another attempt when retries are enabled
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Error::Context { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// Errors from fetching or decoding a listing page.
    ///
    /// All of them are surfaced the same way: the session is flagged as
    /// failed and already loaded pages stay visible.
    pub fn is_fetch_failure(&self) -> bool {
        match self {
            Error::Http(_)
            | Error::HttpStatus { .. }
            | Error::RateLimited { .. }
            | Error::Timeout { .. }
            | Error::InvalidUrl(_)
            | Error::MalformedPage { .. }
            | Error::JsonParse(_) => true,
            Error::Context { source, .. } => source.is_fetch_failure(),
            _ => false,
        }
    }
}

/// Result type alias for media-slider
pub type Result<T> = std::result::Result<T, Error>;

/// Attach context to an error while keeping it as the source
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
