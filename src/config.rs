//! Configuration types
//!
//! Slider definitions, auto-fill tunables and the YAML settings file the CLI
//! reads them from.

use crate::error::{Error, Result, ResultExt};
use crate::filter::VisibilityPreferences;
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{OptionStringExt, StringMap};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

// ============================================================================
// Slider
// ============================================================================

/// One horizontally scrolling list backed by a paged listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Key identifying the slider to the container
    pub slider_key: String,

    /// Header title
    pub title: String,

    /// Listing endpoint, without the page parameter
    pub url: String,

    /// "See more" target; enables the header link and the show-more card
    #[serde(default)]
    pub link_url: Option<String>,

    /// Render nothing when the first page has no results
    #[serde(default)]
    pub hide_when_empty: bool,
}

impl SliderConfig {
    /// Create a slider without link and with `hide_when_empty` off
    pub fn new(
        slider_key: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            slider_key: slider_key.into(),
            title: title.into(),
            url: url.into(),
            link_url: None,
            hide_when_empty: false,
        }
    }

    /// Set the "see more" link
    #[must_use]
    pub fn with_link(mut self, link_url: impl Into<String>) -> Self {
        self.link_url = link_url.into().none_if_empty();
        self
    }

    /// Hide the slider when the listing is empty
    #[must_use]
    pub fn hide_when_empty(mut self, hide: bool) -> Self {
        self.hide_when_empty = hide;
        self
    }

    /// Link target, treating an empty string as unset
    pub fn link(&self) -> Option<&str> {
        self.link_url.as_deref().filter(|link| !link.is_empty())
    }
}

// ============================================================================
// Auto-Fill Policy
// ============================================================================

/// Tunables for fetch-ahead and display truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoFillPolicy {
    /// Pages requested when a session starts
    pub initial_size: usize,
    /// Hard ceiling on pages per session
    pub max_pages: usize,
    /// Keep fetching while fewer items than this are visible
    pub min_visible: usize,
    /// Assumed displayable items per page when comparing against the total
    pub per_page_budget: u64,
    /// Cards shown before the show-more card
    pub display_limit: usize,
    /// Posters carried by the show-more card
    pub preview_count: usize,
}

impl Default for AutoFillPolicy {
    fn default() -> Self {
        Self {
            initial_size: 2,
            max_pages: 5,
            min_visible: 24,
            per_page_budget: 20,
            display_limit: 20,
            preview_count: 4,
        }
    }
}

impl AutoFillPolicy {
    /// Check the policy is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.initial_size == 0 {
            return Err(Error::invalid_value(
                "auto_fill.initial_size",
                "must be at least 1",
            ));
        }
        if self.max_pages < self.initial_size {
            return Err(Error::invalid_value(
                "auto_fill.max_pages",
                format!("must be >= initial_size ({})", self.initial_size),
            ));
        }
        if self.per_page_budget == 0 {
            return Err(Error::invalid_value(
                "auto_fill.per_page_budget",
                "must be at least 1",
            ));
        }
        if (self.max_pages as u64)
            .checked_mul(self.per_page_budget)
            .is_none()
        {
            return Err(Error::invalid_value(
                "auto_fill.per_page_budget",
                format!("too large for max_pages ({})", self.max_pages),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Settings File
// ============================================================================

/// Connection settings for the media server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL the slider paths are relative to
    pub base_url: String,

    /// Value sent as `X-Api-Key`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries per page request.
    ///
    /// The default of 0 means one failed page fails the slider. Any higher
    /// value retries transient failures inside a single page fetch, so the
    /// session only sees the last error.
    #[serde(default)]
    pub max_retries: u32,

    /// Optional client-side rate limit
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: StringMap,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Contents of a settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Media server connection
    pub server: ServerSettings,

    /// Visibility preferences applied to every slider
    #[serde(default)]
    pub preferences: VisibilityPreferences,

    /// Fetch-ahead tunables
    #[serde(default)]
    pub auto_fill: AutoFillPolicy,

    /// Sliders in display order
    #[serde(default)]
    pub sliders: Vec<SliderConfig>,
}

impl Settings {
    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.server.base_url.is_empty() {
            return Err(Error::missing_field("server.base_url"));
        }
        url::Url::parse(&self.server.base_url)?;

        self.auto_fill.validate()?;

        if self.server.max_retries > 0 {
            warn!(
                "server.max_retries = {}: failed pages are retried before the slider fails",
                self.server.max_retries
            );
        }

        if self.sliders.is_empty() {
            return Err(Error::config("at least one slider is required"));
        }

        let mut keys = HashSet::new();
        for slider in &self.sliders {
            if slider.url.is_empty() {
                return Err(Error::invalid_value(
                    format!("sliders.{}.url", slider.slider_key),
                    "must not be empty",
                ));
            }
            if !keys.insert(slider.slider_key.as_str()) {
                return Err(Error::invalid_value(
                    "sliders.slider_key",
                    format!("duplicate key '{}'", slider.slider_key),
                ));
            }
        }

        Ok(())
    }

    /// Find a slider by key
    pub fn slider(&self, key: &str) -> Option<&SliderConfig> {
        self.sliders.iter().find(|slider| slider.slider_key == key)
    }

    /// HTTP client configuration for the server
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.server.base_url)
            .timeout(Duration::from_secs(self.server.timeout_secs))
            .max_retries(self.server.max_retries);

        if let Some(key) = self.server.api_key.clone().none_if_empty() {
            builder = builder.api_key(key);
        }
        if let Some(limit) = &self.server.rate_limit {
            builder = builder.rate_limit(limit.clone());
        }
        for (key, value) in &self.server.headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }
}

/// Load and validate settings from a YAML file
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    load_settings_from_str(&contents)
}

/// Load and validate settings from a YAML string
pub fn load_settings_from_str(yaml: &str) -> Result<Settings> {
    let settings: Settings = serde_yaml::from_str(yaml)?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SETTINGS: &str = r#"
server:
  base_url: http://localhost:5055
  api_key: secret
  rate_limit:
    requests_per_second: 5
    burst_size: 2
preferences:
  hide_available: true
sliders:
  - slider_key: trending
    title: Trending
    url: /api/v1/discover/trending
    link_url: /discover/trending
  - slider_key: upcoming
    title: Upcoming Movies
    url: /api/v1/discover/movies/upcoming
    hide_when_empty: true
"#;

    #[test]
    fn test_parse_settings() {
        let settings = load_settings_from_str(SETTINGS).unwrap();

        assert_eq!(settings.server.timeout_secs, 30);
        assert_eq!(settings.server.max_retries, 0);
        assert_eq!(settings.preferences, VisibilityPreferences::new(true, false));
        assert_eq!(settings.auto_fill, AutoFillPolicy::default());
        assert_eq!(settings.sliders.len(), 2);

        let trending = settings.slider("trending").unwrap();
        assert_eq!(trending.link(), Some("/discover/trending"));
        assert!(!trending.hide_when_empty);

        let upcoming = settings.slider("upcoming").unwrap();
        assert_eq!(upcoming.link(), None);
        assert!(upcoming.hide_when_empty);
    }

    #[test]
    fn test_http_config_from_settings() {
        let settings = load_settings_from_str(SETTINGS).unwrap();
        let http = settings.http_config();

        assert_eq!(http.base_url.as_deref(), Some("http://localhost:5055"));
        assert_eq!(http.timeout, Duration::from_secs(30));
        assert_eq!(
            http.default_headers.get("X-Api-Key"),
            Some(&"secret".to_string())
        );
        assert_eq!(http.rate_limit, Some(RateLimiterConfig::new(5, 2)));
    }

    #[test]
    fn test_partial_auto_fill_overrides() {
        let yaml = r"
server:
  base_url: http://localhost:5055
auto_fill:
  max_pages: 8
sliders:
  - slider_key: a
    title: A
    url: /a
";
        let settings = load_settings_from_str(yaml).unwrap();
        assert_eq!(settings.auto_fill.max_pages, 8);
        assert_eq!(settings.auto_fill.initial_size, 2);
    }

    #[test]
    fn test_rejects_duplicate_slider_keys() {
        let yaml = r"
server:
  base_url: http://localhost:5055
sliders:
  - slider_key: a
    title: A
    url: /a
  - slider_key: a
    title: B
    url: /b
";
        let err = load_settings_from_str(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate key 'a'"));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let yaml = r"
server:
  base_url: localhost
sliders:
  - slider_key: a
    title: A
    url: /a
";
        assert!(matches!(
            load_settings_from_str(yaml),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_inconsistent_policy() {
        let policy = AutoFillPolicy {
            initial_size: 3,
            max_pages: 2,
            ..Default::default()
        };
        assert!(policy.validate().is_err());

        let policy = AutoFillPolicy {
            initial_size: 0,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_rejects_unusable_page_budget() {
        let yaml = r"
server:
  base_url: http://localhost:5055
auto_fill:
  per_page_budget: 18446744073709551615
sliders:
  - slider_key: a
    title: A
    url: /a
";
        match load_settings_from_str(yaml) {
            Err(Error::InvalidConfigValue { field, .. }) => {
                assert_eq!(field, "auto_fill.per_page_budget");
            }
            other => panic!("Expected InvalidConfigValue, got {other:?}"),
        }

        let policy = AutoFillPolicy {
            per_page_budget: 0,
            ..Default::default()
        };
        assert!(policy.validate().is_err());

        let policy = AutoFillPolicy {
            max_pages: 2,
            per_page_budget: u64::MAX / 2,
            ..Default::default()
        };
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_retries_are_opt_in() {
        let settings = load_settings_from_str(SETTINGS).unwrap();
        assert_eq!(settings.http_config().max_retries, 0);

        let yaml = r"
server:
  base_url: http://localhost:5055
  max_retries: 3
sliders:
  - slider_key: a
    title: A
    url: /a
";
        let settings = load_settings_from_str(yaml).unwrap();
        assert_eq!(settings.http_config().max_retries, 3);
    }

    #[test]
    fn test_slider_builder_ignores_empty_link() {
        let slider = SliderConfig::new("k", "Title", "/list").with_link("");
        assert_eq!(slider.link(), None);

        let slider = SliderConfig::new("k", "Title", "/list").with_link("/more");
        assert_eq!(slider.link(), Some("/more"));
    }

    #[test]
    fn test_load_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SETTINGS.as_bytes()).unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.sliders[0].slider_key, "trending");

        let missing = load_settings("/definitely/not/here.yaml");
        assert!(matches!(missing, Err(Error::FileNotFound { .. })));
    }
}
