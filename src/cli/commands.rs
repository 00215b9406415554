//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Media slider CLI
#[derive(Parser, Debug)]
#[command(name = "media-slider")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the sliders of a settings file
    Render {
        /// Settings file (YAML)
        #[arg(short, long)]
        settings: PathBuf,

        /// Only render the slider with this key
        #[arg(long)]
        slider: Option<String>,
    },

    /// Render one slider without a settings file
    Fetch {
        /// Media server base URL
        #[arg(long)]
        base_url: String,

        /// Listing path, e.g. /api/v1/discover/movies
        #[arg(long)]
        path: String,

        /// Slider title
        #[arg(long, default_value = "Results")]
        title: String,

        /// API key sent as X-Api-Key
        #[arg(long)]
        api_key: Option<String>,

        /// Hide titles that are already available
        #[arg(long)]
        hide_available: bool,

        /// Hide requested titles. On its own this also hides available ones
        #[arg(long)]
        hide_requested: bool,

        /// "See more" target
        #[arg(long)]
        link_url: Option<String>,

        /// Print nothing when the listing is empty
        #[arg(long)]
        hide_when_empty: bool,
    },

    /// Validate a settings file
    Validate {
        /// Settings file (YAML)
        #[arg(short, long)]
        settings: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one view per line)
    Json,
    /// Human-readable output
    Pretty,
}
