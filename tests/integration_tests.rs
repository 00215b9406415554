//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: YAML settings → HTTP page requests → slider views

use media_slider::http::HttpClient;
use media_slider::{
    load_settings_from_str, Aggregator, DisplayUnit, HttpPageSource, PreferencesStore, Settings,
};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = "/api/v1/discover/movies";

/// `count` movies starting at `first`; every other one is available
fn results(first: u64, count: u64) -> Vec<Value> {
    (first..first + count)
        .map(|id| {
            let status = if id % 2 == 0 { 5 } else { 1 };
            json!({
                "mediaType": "movie",
                "id": id,
                "title": format!("Movie {id}"),
                "posterPath": format!("/poster-{id}.jpg"),
                "voteAverage": 6.4,
                "releaseDate": "2021-03-04",
                "mediaInfo": { "status": status }
            })
        })
        .collect()
}

async fn mount_page(server: &MockServer, page: u32, body: Value, expected: u64) {
    Mock::given(method("GET"))
        .and(path(LISTING))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected)
        .mount(server)
        .await;
}

fn settings(server: &MockServer, hide_available: bool) -> Settings {
    let yaml = format!(
        r"
server:
  base_url: {}
  api_key: test-key
preferences:
  hide_available: {hide_available}
sliders:
  - slider_key: popular
    title: Popular Movies
    url: {LISTING}
    link_url: /discover/movies
",
        server.uri()
    );
    load_settings_from_str(&yaml).unwrap()
}

async fn settle(settings: &Settings) -> (Option<media_slider::SliderView>, usize) {
    let client = Arc::new(HttpClient::with_config(settings.http_config()).unwrap());
    let source = Arc::new(HttpPageSource::new(client));
    let store = PreferencesStore::new(settings.preferences);

    let mut aggregator = Aggregator::new(settings.sliders[0].clone(), source, store.subscribe())
        .with_policy(settings.auto_fill);
    let view = aggregator.settle().await;
    (view, aggregator.session().pages().len())
}

// ============================================================================
// End-to-end
// ============================================================================

#[tokio::test]
async fn test_hidden_titles_trigger_fetch_ahead() {
    let mock_server = MockServer::start().await;

    for page in 1..=3u32 {
        let first = u64::from(page - 1) * 20;
        let body = json!({
            "page": page,
            "totalResults": 60,
            "totalPages": 3,
            "results": results(first, 20)
        });
        mount_page(&mock_server, page, body, 1).await;
    }

    let settings = settings(&mock_server, true);
    let (view, pages) = settle(&settings).await;
    let view = view.unwrap();

    // 10 of 20 visible per page: page 1 leaves 10 < 24 and 60 > 40, so size 3
    assert_eq!(pages, 3);
    assert_eq!(view.header.title, "Popular Movies");
    assert_eq!(view.units.len(), 21);
    assert!(!view.failed);

    match &view.units[20] {
        DisplayUnit::ShowMore(card) => {
            assert_eq!(card.url, "/discover/movies");
            assert_eq!(card.posters.len(), 4);
            assert_eq!(card.posters[0].as_deref(), Some("/poster-41.jpg"));
        }
        other => panic!("Expected show-more card, got {other:?}"),
    }
}

#[tokio::test]
async fn test_last_page_stops_requests() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        1,
        json!({ "page": 1, "totalResults": 8, "totalPages": 1, "results": results(0, 8) }),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        2,
        json!({ "page": 2, "totalResults": 8, "totalPages": 1, "results": [] }),
        0,
    )
    .await;

    let settings = settings(&mock_server, false);
    let (view, pages) = settle(&settings).await;
    let view = view.unwrap();

    assert_eq!(pages, 1);
    assert_eq!(view.units.len(), 8);
    assert!(!view.is_empty);
}

#[tokio::test]
async fn test_failed_page_keeps_earlier_results() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        1,
        json!({ "page": 1, "totalResults": 100, "totalPages": 5, "results": results(0, 20) }),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path(LISTING))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = settings(&mock_server, false);
    let (view, pages) = settle(&settings).await;
    let view = view.unwrap();

    assert_eq!(pages, 1);
    assert!(view.failed);
    assert_eq!(view.units.len(), 20);
}

#[tokio::test]
async fn test_api_key_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTING))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "totalResults": 1,
            "totalPages": 1,
            "results": [{ "mediaType": "person", "id": 31, "name": "Tom Hanks" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = settings(&mock_server, true);
    let (view, _) = settle(&settings).await;
    let view = view.unwrap();

    assert_eq!(view.units.len(), 1);
    assert!(matches!(&view.units[0], DisplayUnit::Person(card) if card.name == "Tom Hanks"));
}
