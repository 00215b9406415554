//! Display unit types

use crate::media::{MediaStatus, MediaType};
use serde::Serialize;

/// Card for a movie or series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleCard {
    pub id: u64,
    pub media_type: MediaType,
    pub title: String,
    pub image: Option<String>,
    pub summary: String,
    pub user_score: f64,
    /// Release date for movies, first air date for series
    pub year: Option<String>,
    pub status: Option<MediaStatus>,
    /// A download is running
    pub in_progress: bool,
}

/// Card for a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonCard {
    pub person_id: u64,
    pub name: String,
    pub profile_path: Option<String>,
}

/// Trailing "see more" card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowMoreCard {
    pub url: String,
    /// Posters of the first items past the display limit; `None` for people
    pub posters: Vec<Option<String>>,
}

/// One unit of a slider
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayUnit {
    Title(TitleCard),
    Person(PersonCard),
    ShowMore(ShowMoreCard),
}

/// Title row above the container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderHeader {
    pub title: String,
    /// Present when the title links to a full listing
    pub link_url: Option<String>,
}

/// Everything a slider renders for one state of its session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderView {
    pub slider_key: String,
    pub header: SliderHeader,
    /// No page fetched yet and no error
    pub is_loading: bool,
    /// Loaded (or failed) with nothing to show
    pub is_empty: bool,
    /// A page fetch failed; `units` holds whatever loaded before it
    pub failed: bool,
    pub units: Vec<DisplayUnit>,
}
