//! Session to view mapping

use super::types::{DisplayUnit, PersonCard, ShowMoreCard, SliderHeader, SliderView, TitleCard};
use crate::config::SliderConfig;
use crate::filter::VisibilityPreferences;
use crate::media::{MediaInfo, MediaItem};
use crate::session::AggregationSession;

/// Something that can be shown as one slider unit
pub trait Renderable {
    /// `None` when the item has no card
    fn to_display_unit(&self) -> Option<DisplayUnit>;
}

impl Renderable for MediaItem {
    fn to_display_unit(&self) -> Option<DisplayUnit> {
        let unit = match self {
            MediaItem::Movie(movie) => DisplayUnit::Title(TitleCard {
                id: movie.id,
                media_type: self.media_type(),
                title: movie.title.clone(),
                image: movie.poster_path.clone(),
                summary: movie.overview.clone(),
                user_score: movie.vote_average,
                year: movie.release_date.clone(),
                status: movie.media_info.as_ref().map(|info| info.status),
                in_progress: movie.media_info.as_ref().is_some_and(MediaInfo::in_progress),
            }),
            MediaItem::Tv(tv) => DisplayUnit::Title(TitleCard {
                id: tv.id,
                media_type: self.media_type(),
                title: tv.name.clone(),
                image: tv.poster_path.clone(),
                summary: tv.overview.clone(),
                user_score: tv.vote_average,
                year: tv.first_air_date.clone(),
                status: tv.media_info.as_ref().map(|info| info.status),
                in_progress: tv.media_info.as_ref().is_some_and(MediaInfo::in_progress),
            }),
            MediaItem::Person(person) => DisplayUnit::Person(PersonCard {
                person_id: person.id,
                name: person.name.clone(),
                profile_path: person.profile_path.clone(),
            }),
            MediaItem::Unknown => return None,
        };
        Some(unit)
    }
}

/// Build what a slider shows for the current session state.
///
/// Returns `None` when the slider hides itself: `hide_when_empty` is set and
/// the first page is missing or has no results.
pub fn build_view(
    config: &SliderConfig,
    session: &AggregationSession,
    prefs: &VisibilityPreferences,
) -> Option<SliderView> {
    if config.hide_when_empty && session.first_page().map_or(true, |page| page.results.is_empty())
    {
        return None;
    }

    let policy = session.policy();
    let visible = session.visible(prefs);

    // Unknown items still take a slot
    let mut units: Vec<DisplayUnit> = visible
        .iter()
        .take(policy.display_limit)
        .filter_map(|item| item.to_display_unit())
        .collect();

    if let Some(link) = config.link() {
        if visible.len() > policy.display_limit {
            let posters = visible
                .iter()
                .skip(policy.display_limit)
                .take(policy.preview_count)
                .map(|item| item.poster_path().map(str::to_string))
                .collect();

            units.push(DisplayUnit::ShowMore(ShowMoreCard {
                url: link.to_string(),
                posters,
            }));
        }
    }

    let is_loading = session.is_loading();
    Some(SliderView {
        slider_key: config.slider_key.clone(),
        header: SliderHeader {
            title: config.title.clone(),
            link_url: config.link().map(str::to_string),
        },
        is_loading,
        is_empty: !is_loading && units.is_empty(),
        failed: session.has_error(),
        units,
    })
}
