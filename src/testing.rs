// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::highlight::{HighlightableText, MatchSpan, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use crate::store::{MemoryUrlState, QueryParamSettingsStore, StoreConfig};

/// Base URL used by store fixtures.
pub const TEST_ORIGIN: &str = "https://example.com/search";

pub fn make_span(offset: usize, length: usize) -> MatchSpan {
    MatchSpan::new(offset, length)
}

/// A field with spans given as `(offset, length)` pairs.
pub fn make_field(value: &str, spans: &[(usize, usize)]) -> HighlightableText {
    HighlightableText::new(
        value,
        spans.iter().map(|&(o, l)| make_span(o, l)).collect(),
    )
}

/// `text` inside the highlight markers.
pub fn wrap(text: &str) -> String {
    format!("{}{}{}", HIGHLIGHT_OPEN, text, HIGHLIGHT_CLOSE)
}

/// Remove every highlight marker, leaving the original text.
pub fn strip_highlights(markup: &str) -> String {
    markup.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "")
}

/// An in-memory URL at [`TEST_ORIGIN`] with `query` appended (no `?`).
pub fn memory_url(query: &str) -> MemoryUrlState {
    let href = if query.is_empty() {
        TEST_ORIGIN.to_string()
    } else {
        format!("{}?{}", TEST_ORIGIN, query)
    };
    MemoryUrlState::parse(&href).expect("test URL parses")
}

/// Default-config store over [`memory_url`].
pub fn memory_store(query: &str) -> QueryParamSettingsStore<MemoryUrlState> {
    QueryParamSettingsStore::new(memory_url(query))
}

pub fn memory_store_with(query: &str, config: StoreConfig) -> QueryParamSettingsStore<MemoryUrlState> {
    QueryParamSettingsStore::with_config(memory_url(query), config)
}

/// Snippet markup with a link and an attribute containing the search term.
pub const LINK_SNIPPET: &str =
    r#"See <a href="/docs/rust" title="rust guide">the rust guide</a> for rust."#;
