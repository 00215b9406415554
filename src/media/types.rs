//! Listing wire types
//!
//! Field names follow the server's camelCase JSON. Every item carries a
//! `mediaType` discriminator which selects the variant. Display-only fields
//! accept `null` as well as a missing key, so one sparse item never fails
//! its page.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Media Status
// ============================================================================

/// Availability state of a title on the media server
///
/// Encoded on the wire as an integer. Codes this crate does not know about
/// are preserved in [`MediaStatus::Other`] so they never fail a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MediaStatus {
    #[default]
    Unknown,
    Pending,
    Processing,
    PartiallyAvailable,
    Available,
    Other(u8),
}

impl MediaStatus {
    /// Already (at least partly) watchable
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available | Self::PartiallyAvailable)
    }

    /// Requested but not yet available
    pub fn is_requested(self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

impl From<u8> for MediaStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Unknown,
            2 => Self::Pending,
            3 => Self::Processing,
            4 => Self::PartiallyAvailable,
            5 => Self::Available,
            other => Self::Other(other),
        }
    }
}

impl From<MediaStatus> for u8 {
    fn from(status: MediaStatus) -> Self {
        match status {
            MediaStatus::Unknown => 1,
            MediaStatus::Pending => 2,
            MediaStatus::Processing => 3,
            MediaStatus::PartiallyAvailable => 4,
            MediaStatus::Available => 5,
            MediaStatus::Other(code) => code,
        }
    }
}

// ============================================================================
// Media Info
// ============================================================================

/// One entry of an active download
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadProgress {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub size_left: Option<u64>,
    #[serde(default)]
    pub estimated_completion_time: Option<String>,
}

/// Server-side request/availability state attached to a movie or series
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    #[serde(default)]
    pub status: MediaStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub download_status: Vec<DownloadProgress>,
}

impl MediaInfo {
    /// Create media info with a status and no downloads
    pub fn with_status(status: MediaStatus) -> Self {
        Self {
            status,
            download_status: Vec::new(),
        }
    }

    /// True while at least one download is running
    pub fn in_progress(&self) -> bool {
        !self.download_status.is_empty()
    }
}

// ============================================================================
// Results
// ============================================================================

/// A movie in a listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResult {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub media_info: Option<MediaInfo>,
}

/// A series in a listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvResult {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub media_info: Option<MediaInfo>,
}

/// A person (cast or crew) in a listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResult {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Discriminator of a [`MediaItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Person,
    Unknown,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One entry of a mixed listing
///
/// Any `mediaType` other than movie, tv or person decodes to
/// [`MediaItem::Unknown`]. Such items have no media info, so filters keep
/// them, but they never render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mediaType", rename_all = "lowercase")]
pub enum MediaItem {
    Movie(MovieResult),
    Tv(TvResult),
    Person(PersonResult),
    #[serde(other)]
    Unknown,
}

impl MediaItem {
    /// Variant tag
    pub fn media_type(&self) -> MediaType {
        match self {
            Self::Movie(_) => MediaType::Movie,
            Self::Tv(_) => MediaType::Tv,
            Self::Person(_) => MediaType::Person,
            Self::Unknown => MediaType::Unknown,
        }
    }

    /// Identifier within its media type; 0 for unknown items
    pub fn id(&self) -> u64 {
        match self {
            Self::Movie(movie) => movie.id,
            Self::Tv(tv) => tv.id,
            Self::Person(person) => person.id,
            Self::Unknown => 0,
        }
    }

    /// Display title (movie title, series or person name)
    pub fn title(&self) -> &str {
        match self {
            Self::Movie(movie) => &movie.title,
            Self::Tv(tv) => &tv.name,
            Self::Person(person) => &person.name,
            Self::Unknown => "",
        }
    }

    /// Poster for titles, profile picture for people
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Movie(movie) => movie.poster_path.as_deref(),
            Self::Tv(tv) => tv.poster_path.as_deref(),
            Self::Person(person) => person.profile_path.as_deref(),
            Self::Unknown => None,
        }
    }

    /// Poster path; people never have one
    pub fn poster_path(&self) -> Option<&str> {
        match self {
            Self::Person(_) => None,
            _ => self.image(),
        }
    }

    /// Request/availability info; always `None` for people and unknown items
    pub fn media_info(&self) -> Option<&MediaInfo> {
        match self {
            Self::Movie(movie) => movie.media_info.as_ref(),
            Self::Tv(tv) => tv.media_info.as_ref(),
            Self::Person(_) | Self::Unknown => None,
        }
    }

    /// Status from `media_info`, if any
    pub fn status(&self) -> Option<MediaStatus> {
        self.media_info().map(|info| info.status)
    }

    pub fn is_person(&self) -> bool {
        matches!(self, Self::Person(_))
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of a listing response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPage {
    /// 1-based page number
    pub page: u32,
    /// Total results across all pages
    pub total_results: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Results in server order
    pub results: Vec<MediaItem>,
}

impl ResultsPage {
    /// Create a page
    pub fn new(page: u32, total_results: u64, total_pages: u32, results: Vec<MediaItem>) -> Self {
        Self {
            page,
            total_results,
            total_pages,
            results,
        }
    }

    /// Whether the server reports a page after this one
    pub fn has_page(&self, page: u32) -> bool {
        page <= self.total_pages
    }
}
