//! Shared builders for unit tests

use crate::error::{Error, Result};
use crate::media::{
    MediaInfo, MediaItem, MediaStatus, MovieResult, PersonResult, ResultsPage, TvResult,
};
use crate::session::PageSource;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub(crate) fn movie(id: u64, status: Option<MediaStatus>) -> MediaItem {
    MediaItem::Movie(MovieResult {
        id,
        title: format!("Movie {id}"),
        poster_path: Some(format!("/movie-{id}.jpg")),
        release_date: Some("2020-01-01".to_string()),
        vote_average: 7.5,
        media_info: status.map(MediaInfo::with_status),
        ..Default::default()
    })
}

pub(crate) fn tv(id: u64, status: Option<MediaStatus>) -> MediaItem {
    MediaItem::Tv(TvResult {
        id,
        name: format!("Show {id}"),
        poster_path: Some(format!("/tv-{id}.jpg")),
        first_air_date: Some("2019-05-05".to_string()),
        media_info: status.map(MediaInfo::with_status),
        ..Default::default()
    })
}

pub(crate) fn person(id: u64) -> MediaItem {
    MediaItem::Person(PersonResult {
        id,
        name: format!("Person {id}"),
        profile_path: Some(format!("/person-{id}.jpg")),
    })
}

/// Page of `count` movies with ids starting after the previous pages
pub(crate) fn movie_page(
    page: u32,
    total_results: u64,
    total_pages: u32,
    count: u64,
    status: Option<MediaStatus>,
) -> ResultsPage {
    let first = u64::from(page - 1) * 1000;
    let results = (0..count).map(|i| movie(first + i, status)).collect();
    ResultsPage::new(page, total_results, total_pages, results)
}

/// In-memory page source keyed by request URL
#[derive(Default)]
pub(crate) struct ScriptedSource {
    pages: HashMap<String, ResultsPage>,
    failures: HashSet<String>,
    gates: HashMap<String, Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serve every page of a listing of `count_per_page` movies per page
    pub(crate) fn listing(
        mut self,
        base: &str,
        total_results: u64,
        total_pages: u32,
        count_per_page: u64,
        status: Option<MediaStatus>,
    ) -> Self {
        for page in 1..=total_pages {
            self.pages.insert(
                format!("{base}?page={page}"),
                movie_page(page, total_results, total_pages, count_per_page, status),
            );
        }
        self
    }

    pub(crate) fn page(mut self, url: &str, page: ResultsPage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub(crate) fn fail(mut self, url: &str) -> Self {
        self.failures.insert(url.to_string());
        self
    }

    /// Hold responses for `url` until `gate` is notified
    pub(crate) fn gate(mut self, url: &str, gate: Arc<Notify>) -> Self {
        self.gates.insert(url.to_string(), gate);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    async fn fetch_page(&self, url: &str, _page: u32) -> Result<ResultsPage> {
        self.calls.lock().unwrap().push(url.to_string());

        if let Some(gate) = self.gates.get(url) {
            gate.notified().await;
        }
        if self.failures.contains(url) {
            return Err(Error::http_status(500, "scripted failure"));
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::http_status(404, url.to_string()))
    }
}
