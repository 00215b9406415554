//! CLI module
//!
//! Command-line interface for rendering sliders against a media server.
//!
//! # Commands
//!
//! - `render` - Settle every slider in a settings file and print the views
//! - `fetch` - Settle a single ad-hoc slider
//! - `validate` - Check a settings file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
