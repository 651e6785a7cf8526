// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query highlighting inside autocomplete suggestions.
//!
//! Suggestions come back without match spans, so the typed query is located
//! by a case-insensitive literal search instead.

use crate::error::HighlightError;
use regex::RegexBuilder;

pub const SUGGESTION_OPEN: &str = r#"<span class="suggestion-highlight">"#;
pub const SUGGESTION_CLOSE: &str = "</span>";

/// Wrap every case-insensitive occurrence of `input` in `value`.
///
/// `input` is matched literally; regex metacharacters typed by the user have
/// no special meaning. An empty or blank query leaves `value` unchanged.
///
/// # Example
///
/// ```
/// use serpkit::highlight_suggestion;
///
/// let out = highlight_suggestion("Rust and rust", "RUST").unwrap();
/// assert_eq!(
///     out,
///     r#"<span class="suggestion-highlight">Rust</span> and <span class="suggestion-highlight">rust</span>"#
/// );
/// assert_eq!(highlight_suggestion("a+b", "+").unwrap(), r#"a<span class="suggestion-highlight">+</span>b"#);
/// ```
pub fn highlight_suggestion(value: &str, input: &str) -> Result<String, HighlightError> {
    if input.trim().is_empty() {
        return Ok(value.to_string());
    }

    let matcher = RegexBuilder::new(&regex::escape(input))
        .case_insensitive(true)
        .build()?;

    Ok(matcher
        .replace_all(value, |caps: &regex::Captures<'_>| {
            format!("{}{}{}", SUGGESTION_OPEN, &caps[0], SUGGESTION_CLOSE)
        })
        .into_owned())
}
