//! Aggregator driver

use super::handle::SliderHandle;
use crate::config::{AutoFillPolicy, SliderConfig};
use crate::error::Result;
use crate::filter::VisibilityPreferences;
use crate::media::ResultsPage;
use crate::pagination::{PageNumberPaginator, Paginator};
use crate::render::{build_view, SliderView};
use crate::session::{AggregationSession, Delivery, PageRequest, PageSource};
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

type PendingFetch = BoxFuture<'static, (PageRequest, Result<ResultsPage>)>;

/// Control messages for a running aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderCommand {
    /// Switch to another listing; starts a new session if the URL differs
    SetUrl(String),
    /// Stop the event loop
    Shutdown,
}

/// Paged result aggregator for one slider
pub struct Aggregator {
    config: SliderConfig,
    policy: AutoFillPolicy,
    source: Arc<dyn PageSource>,
    paginator: Arc<dyn Paginator>,
    preferences: watch::Receiver<VisibilityPreferences>,
    session: AggregationSession,
    generation: u64,
}

impl Aggregator {
    /// Create an aggregator with the default policy and `?page=N` pagination
    pub fn new(
        config: SliderConfig,
        source: Arc<dyn PageSource>,
        preferences: watch::Receiver<VisibilityPreferences>,
    ) -> Self {
        let policy = AutoFillPolicy::default();
        let session = AggregationSession::new(config.url.clone(), 1, policy);
        Self {
            config,
            policy,
            source,
            paginator: Arc::new(PageNumberPaginator::default()),
            preferences,
            session,
            generation: 1,
        }
    }

    /// Replace the auto-fill policy; restarts the session
    #[must_use]
    pub fn with_policy(mut self, policy: AutoFillPolicy) -> Self {
        self.policy = policy;
        self.restart();
        self
    }

    /// Replace the paginator; restarts the session
    #[must_use]
    pub fn with_paginator(mut self, paginator: Arc<dyn Paginator>) -> Self {
        self.paginator = paginator;
        self.restart();
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current session
    pub fn session(&self) -> &AggregationSession {
        &self.session
    }

    /// Latest preferences snapshot
    pub fn preferences(&self) -> VisibilityPreferences {
        *self.preferences.borrow()
    }

    /// Point the slider at another listing.
    ///
    /// Returns `true` if a new session started. Results still in flight for
    /// the old URL are dropped when they arrive.
    pub fn set_url(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if url == self.config.url {
            return false;
        }
        info!(
            "Slider {} switching from {} to {}",
            self.config.slider_key, self.config.url, url
        );
        self.config.url = url;
        self.restart();
        true
    }

    fn restart(&mut self) {
        self.generation += 1;
        self.session = AggregationSession::new(self.config.url.clone(), self.generation, self.policy);
    }

    /// View for the current session and preferences
    pub fn view(&self) -> Option<SliderView> {
        build_view(&self.config, &self.session, &self.preferences.borrow())
    }

    /// Fetch pages until the session is stable, then return the view.
    ///
    /// Fetch failures do not abort: they end the session and show up as
    /// `failed` on the view.
    pub async fn settle(&mut self) -> Option<SliderView> {
        loop {
            let prefs = self.preferences();
            self.session.reconcile(&prefs);

            let Some(request) = self.session.next_request(self.paginator.as_ref()) else {
                break;
            };
            let result = self.source.fetch_page(&request.url, request.page).await;
            self.session.deliver(&request, result);
        }

        debug!(
            "Slider {} settled with {} pages (size {})",
            self.config.slider_key,
            self.session.pages().len(),
            self.session.size()
        );
        self.view()
    }

    /// Queue the next page fetch if the session wants one
    fn dispatch(&mut self, in_flight: &FuturesUnordered<PendingFetch>) {
        let prefs = self.preferences();
        self.session.reconcile(&prefs);

        if let Some(request) = self.session.next_request(self.paginator.as_ref()) {
            debug!("Slider {} fetching {}", self.config.slider_key, request.url);
            let source = Arc::clone(&self.source);
            in_flight.push(
                async move {
                    let result = source.fetch_page(&request.url, request.page).await;
                    (request, result)
                }
                .boxed(),
            );
        }
    }

    /// Event loop: react to completed fetches, preference changes and
    /// commands, publishing the view after every change.
    ///
    /// Runs until [`SliderCommand::Shutdown`] or until every command sender
    /// is dropped.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<SliderCommand>,
        views: watch::Sender<Option<SliderView>>,
    ) {
        let mut in_flight: FuturesUnordered<PendingFetch> = FuturesUnordered::new();
        let mut preferences_open = true;

        loop {
            self.dispatch(&in_flight);

            let view = self.view();
            views.send_if_modified(|current| {
                if *current == view {
                    false
                } else {
                    *current = view;
                    true
                }
            });

            tokio::select! {
                Some((request, result)) = in_flight.next(), if !in_flight.is_empty() => {
                    if self.session.deliver(&request, result) == Delivery::Discarded {
                        debug!("Slider {} dropped stale page {}", self.config.slider_key, request.url);
                    }
                }
                changed = self.preferences.changed(), if preferences_open => {
                    if changed.is_err() {
                        debug!("Preferences provider closed, keeping last snapshot");
                        preferences_open = false;
                    }
                }
                command = commands.recv() => match command {
                    Some(SliderCommand::SetUrl(url)) => {
                        self.set_url(url);
                    }
                    Some(SliderCommand::Shutdown) | None => break,
                },
            }
        }

        info!("Slider {} stopped", self.config.slider_key);
    }

    /// Run the event loop on a tokio task
    pub fn spawn(self) -> SliderHandle {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (view_tx, view_rx) = watch::channel(self.view());
        let task = tokio::spawn(self.run(command_rx, view_tx));
        SliderHandle::new(command_tx, view_rx, task)
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("config", &self.config)
            .field("policy", &self.policy)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
