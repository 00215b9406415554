//! CLI runner - executes commands

use crate::aggregator::Aggregator;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_settings, AutoFillPolicy, Settings, SliderConfig};
use crate::error::{Error, Result};
use crate::filter::{PreferencesStore, VisibilityPreferences};
use crate::http::{HttpClient, HttpClientConfig};
use crate::render::{SliderView, TextContainer, TextRenderer};
use crate::session::{HttpPageSource, PageSource};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Render { settings, slider } => {
                self.render(settings, slider.as_deref()).await
            }
            Commands::Fetch {
                base_url,
                path,
                title,
                api_key,
                hide_available,
                hide_requested,
                link_url,
                hide_when_empty,
            } => {
                let mut http = HttpClientConfig::builder().base_url(base_url);
                if let Some(key) = api_key {
                    http = http.api_key(key);
                }

                let mut slider =
                    SliderConfig::new("fetch", title, path).hide_when_empty(*hide_when_empty);
                if let Some(link) = link_url {
                    slider = slider.with_link(link);
                }

                let prefs = VisibilityPreferences::new(*hide_available, *hide_requested);
                self.settle_all(
                    http.build(),
                    prefs,
                    AutoFillPolicy::default(),
                    vec![slider],
                )
                .await
            }
            Commands::Validate { settings } => self.validate(settings),
        }
    }

    /// Render every slider (or the selected one) from a settings file
    async fn render(&self, path: &Path, only: Option<&str>) -> Result<()> {
        let settings = load_settings(path)?;

        let sliders = match only {
            Some(key) => vec![settings
                .slider(key)
                .cloned()
                .ok_or_else(|| Error::config(format!("Unknown slider '{key}'")))?],
            None => settings.sliders.clone(),
        };

        self.settle_all(
            settings.http_config(),
            settings.preferences,
            settings.auto_fill,
            sliders,
        )
        .await
    }

    /// Settle sliders one after another against a shared client
    async fn settle_all(
        &self,
        http: HttpClientConfig,
        prefs: VisibilityPreferences,
        policy: AutoFillPolicy,
        sliders: Vec<SliderConfig>,
    ) -> Result<()> {
        let client = Arc::new(HttpClient::with_config(http)?);
        let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(client));
        let store = PreferencesStore::new(prefs);

        for slider in sliders {
            let key = slider.slider_key.clone();
            let start = Instant::now();

            let mut aggregator =
                Aggregator::new(slider.clone(), Arc::clone(&source), store.subscribe())
                    .with_policy(policy);
            let view = aggregator.settle().await;

            info!(
                "Slider {} settled in {:?} ({} pages)",
                key,
                start.elapsed(),
                aggregator.session().pages().len()
            );
            self.output_view(&slider, view.as_ref());
        }

        Ok(())
    }

    /// Validate a settings file
    fn validate(&self, path: &Path) -> Result<()> {
        let settings: Settings = load_settings(path)?;

        match self.cli.format {
            OutputFormat::Json => {
                let msg = json!({
                    "valid": true,
                    "base_url": settings.server.base_url,
                    "sliders": settings
                        .sliders
                        .iter()
                        .map(|slider| slider.slider_key.as_str())
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string(&msg)?);
            }
            OutputFormat::Pretty => {
                println!(
                    "Settings valid: {} sliders against {}",
                    settings.sliders.len(),
                    settings.server.base_url
                );
            }
        }

        Ok(())
    }

    /// Print one slider view
    fn output_view(&self, slider: &SliderConfig, view: Option<&SliderView>) {
        match self.cli.format {
            OutputFormat::Json => match view_json(slider, view) {
                Ok(msg) => println!("{msg}"),
                Err(e) => warn!("Failed to serialize view for {}: {}", slider.slider_key, e),
            },
            OutputFormat::Pretty => {
                let Some(view) = view else {
                    return;
                };
                match &view.header.link_url {
                    Some(link) => println!("{} -> {}", view.header.title, link),
                    None => println!("{}", view.header.title),
                }
                let mut container = TextContainer::new();
                view.present(&TextRenderer, &mut container);
                print!("{}", container.output());
                if view.failed {
                    println!("  (failed to load more results)");
                }
            }
        }
    }
}

/// One JSON line per slider; hidden sliders report only their key
fn view_json(slider: &SliderConfig, view: Option<&SliderView>) -> serde_json::Result<Value> {
    match view {
        Some(view) => serde_json::to_value(view),
        None => Ok(json!({ "slider_key": slider.slider_key, "hidden": true })),
    }
}
