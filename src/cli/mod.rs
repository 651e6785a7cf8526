// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the serpkit command-line interface.
//!
//! Handy for checking what a widget would render without a browser: the page
//! window for a given position, the markup a highlighted field turns into, and
//! what the settings store reads from or writes to a given URL.

pub mod display;

use clap::{Args, Parser, Subcommand};
use serpkit::pager::DEFAULT_WINDOW_SIZE;

#[derive(Parser)]
#[command(
    name = "serpkit",
    about = "Pager windows, highlighting and URL settings for search widgets",
    version
)]
pub struct Cli {
    /// Log store and highlighter decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the pager for a position in the results
    Pager {
        /// Total number of pages
        #[arg(short, long)]
        total: u32,

        /// Current page (1-based)
        #[arg(short, long)]
        current: u32,

        /// Number of page links to show
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window: usize,
    },

    /// Highlight match spans in a text value
    Highlight {
        /// Text or HTML snippet
        value: String,

        /// Match span as `offset:length` (character offsets, repeatable)
        #[arg(short, long = "span")]
        spans: Vec<String>,

        /// Add target="_blank" to links in the result
        #[arg(long)]
        new_tab: bool,
    },

    /// Highlight the typed input inside an autocomplete suggestion
    Suggest {
        /// Suggestion text
        value: String,

        /// What the user typed
        input: String,
    },

    /// Read or update search settings stored in a URL
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the settings a widget would read from URL
    Read(StoreArgs),

    /// Apply `key=value` settings and print the resulting URL
    Write {
        #[command(flatten)]
        store: StoreArgs,

        /// Setting as `key=value`; the value is parsed as JSON when it can be
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        sets: Vec<String>,

        /// Start from defaults instead of the settings already in the URL
        #[arg(long)]
        reset: bool,
    },

    /// Read then write back, printing the normalized URL
    Sync(StoreArgs),
}

#[derive(Args)]
pub struct StoreArgs {
    /// Absolute URL holding the settings
    pub url: String,

    /// Query parameter namespace
    #[arg(short, long, default_value = serpkit::store::DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Use `s:`/`j:` tagged values
    #[arg(long)]
    pub tagged: bool,

    /// Page size used when the URL has none
    #[arg(short, long)]
    pub limit: Option<u64>,
}
