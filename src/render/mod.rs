//! Presentation mapping
//!
//! Turns a session's visible items into display units for a slider and
//! hands them to the card renderer and scrollable container collaborators.
//!
//! # Overview
//!
//! - `build_view` - Truncate, map by variant, append the show-more card
//! - `Renderable` - Item to display unit, dispatched on the item's tag
//! - `CardRenderer` / `ScrollableContainer` - Output collaborators
//! - `TextRenderer` / `TextContainer` - Plain-text implementations

mod mapping;
mod renderer;
mod types;

pub use mapping::{build_view, Renderable};
pub use renderer::{CardRenderer, ScrollableContainer, TextContainer, TextRenderer};
pub use types::{DisplayUnit, PersonCard, ShowMoreCard, SliderHeader, SliderView, TitleCard};
