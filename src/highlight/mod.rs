// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting for result text and suggestions.
//!
//! - `scanner`: wraps API-provided match spans without breaking markup
//! - `suggestion`: highlights the typed query in autocomplete suggestions
//! - `links`: rewrites snippet anchors to open in a new tab

pub mod links;
pub mod scanner;
pub mod suggestion;

pub use links::open_links_in_new_tab;
pub use scanner::{highlight, highlight_field, HighlightableText, MatchSpan};
pub use suggestion::highlight_suggestion;

/// Opening marker inserted before a wrapped span.
pub const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
/// Closing marker inserted after a wrapped span.
pub const HIGHLIGHT_CLOSE: &str = "</span>";
