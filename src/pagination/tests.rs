//! Tests for pagination module

use super::*;
use crate::media::ResultsPage;
use pretty_assertions::assert_eq;

#[test]
fn test_next_page_helpers() {
    let next = NextPage::fetch(2, "/api/v1/trending?page=2");
    assert!(!next.is_done());
    assert_eq!(next.url(), Some("/api/v1/trending?page=2"));

    assert!(NextPage::Done.is_done());
    assert_eq!(NextPage::Done.url(), None);
}

#[test]
fn test_first_page_has_no_previous() {
    let paginator = PageNumberPaginator::default();
    let next = paginator.next_page("/api/v1/discover/movies", 0, None);
    assert_eq!(next, NextPage::fetch(1, "/api/v1/discover/movies?page=1"));
}

#[test]
fn test_page_url_appends_to_existing_query() {
    let paginator = PageNumberPaginator::default();
    assert_eq!(
        paginator.page_url("/api/v1/search?query=alien", 3),
        "/api/v1/search?query=alien&page=3"
    );
}

#[test]
fn test_custom_page_param() {
    let paginator = PageNumberPaginator::new("p");
    assert_eq!(paginator.page_url("/list", 4), "/list?p=4");
}

#[test]
fn test_stops_past_total_pages() {
    let paginator = PageNumberPaginator::default();
    let only_page = ResultsPage::new(1, 5, 1, Vec::new());

    let next = paginator.next_page("/list", 1, Some(&only_page));
    assert!(next.is_done());
}

#[test]
fn test_continues_within_total_pages() {
    let paginator = PageNumberPaginator::default();
    let second = ResultsPage::new(2, 100, 5, Vec::new());

    let next = paginator.next_page("/list", 2, Some(&second));
    assert_eq!(next, NextPage::fetch(3, "/list?page=3"));
}
