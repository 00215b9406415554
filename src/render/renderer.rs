//! Output collaborators

use super::types::{DisplayUnit, PersonCard, ShowMoreCard, SliderView, TitleCard};
use std::fmt::Write as _;

/// Renders display units into some visual representation
pub trait CardRenderer {
    /// One rendered unit
    type Output;

    fn title_card(&self, card: &TitleCard) -> Self::Output;

    fn person_card(&self, card: &PersonCard) -> Self::Output;

    fn show_more_card(&self, card: &ShowMoreCard) -> Self::Output;

    /// Render any unit, dispatching on its variant
    fn render(&self, unit: &DisplayUnit) -> Self::Output {
        match unit {
            DisplayUnit::Title(card) => self.title_card(card),
            DisplayUnit::Person(card) => self.person_card(card),
            DisplayUnit::ShowMore(card) => self.show_more_card(card),
        }
    }
}

/// Lays out a sequence of rendered units
pub trait ScrollableContainer<T> {
    fn present(&mut self, slider_key: &str, is_loading: bool, is_empty: bool, items: Vec<T>);
}

impl SliderView {
    /// Render every unit and hand the result to `container`
    pub fn present<R, C>(&self, renderer: &R, container: &mut C)
    where
        R: CardRenderer,
        C: ScrollableContainer<R::Output>,
    {
        let items = self.units.iter().map(|unit| renderer.render(unit)).collect();
        container.present(&self.slider_key, self.is_loading, self.is_empty, items);
    }
}

/// One-line-per-card renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl CardRenderer for TextRenderer {
    type Output = String;

    fn title_card(&self, card: &TitleCard) -> String {
        let mut line = format!("[{}] {}", card.media_type, card.title);
        if let Some(year) = card.year.as_deref().and_then(|date| date.get(..4)) {
            let _ = write!(line, " ({year})");
        }
        let _ = write!(line, " {:.1}", card.user_score);
        if let Some(status) = card.status {
            let _ = write!(line, " status={}", u8::from(status));
        }
        if card.in_progress {
            line.push_str(" downloading");
        }
        line
    }

    fn person_card(&self, card: &PersonCard) -> String {
        format!("[person] {}", card.name)
    }

    fn show_more_card(&self, card: &ShowMoreCard) -> String {
        let previews = card.posters.iter().filter(|poster| poster.is_some()).count();
        format!("[more] {} ({previews} previews)", card.url)
    }
}

/// Collects presented sliders as text blocks
#[derive(Debug, Clone, Default)]
pub struct TextContainer {
    output: String,
}

impl TextContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything presented so far
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl ScrollableContainer<String> for TextContainer {
    fn present(&mut self, slider_key: &str, is_loading: bool, is_empty: bool, items: Vec<String>) {
        let _ = writeln!(self.output, "<{slider_key}>");
        if is_loading {
            self.output.push_str("  loading...\n");
        } else if is_empty {
            self.output.push_str("  (empty)\n");
        }
        for item in items {
            let _ = writeln!(self.output, "  {item}");
        }
    }
}
