// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup-safe match highlighting.
//!
//! Search snippets come back as HTML with match spans given as character
//! offsets into that HTML. A naive splice would happily drop a `<span>` into
//! the middle of `<a href="...">`. This scanner walks the text once, tracks
//! whether it is inside a tag or a quoted attribute value, and only wraps
//! spans that start in plain text.
//!
//! # Span policy
//!
//! - spans are sorted by offset first
//! - a span starting inside a tag or attribute value is dropped
//! - a span starting inside an already wrapped span is dropped (earlier wins)
//! - zero-length spans are dropped
//! - a span running past the end is cut at the end
//!
//! Malformed markup only changes which spans get dropped. The scan never
//! fails and every input character is copied exactly once.

use super::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use crate::error::HighlightError;
use crate::verify::contracts::{check_highlight_preserves_text, check_spans_sorted};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

/// A run of characters to emphasize: `[offset, offset + length)`.
///
/// Offsets count Unicode scalar values (`char`s), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub offset: usize,
    pub length: usize,
}

impl MatchSpan {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// One past the last character; saturates instead of overflowing.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

impl FromStr for MatchSpan {
    type Err = HighlightError;

    /// Parse `offset:length`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HighlightError::InvalidSpan(s.to_string());
        let (offset, length) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            offset: offset.trim().parse().map_err(|_| invalid())?,
            length: length.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// A text value together with the spans that matched the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightableText {
    pub value: String,
    #[serde(default)]
    pub matched_substrings: Vec<MatchSpan>,
}

impl HighlightableText {
    pub fn new(value: impl Into<String>, matched_substrings: Vec<MatchSpan>) -> Self {
        Self {
            value: value.into(),
            matched_substrings,
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, Vec::new())
    }
}

/// Where the scanner is relative to markup.
#[derive(Debug, Default, Clone, Copy)]
struct MarkupState {
    in_tag: bool,
    in_attribute: bool,
}

impl MarkupState {
    fn advance(&mut self, c: char) {
        match c {
            '<' => self.in_tag = true,
            '>' => {
                self.in_tag = false;
                self.in_attribute = false;
            }
            '"' if self.in_tag => self.in_attribute = !self.in_attribute,
            _ => {}
        }
    }

    fn in_text(self) -> bool {
        !self.in_tag && !self.in_attribute
    }
}

/// Wrap every match span of `text` in `<span class="highlight">`.
///
/// Returns the value unchanged when there are no spans.
pub fn highlight(text: &HighlightableText) -> String {
    if text.matched_substrings.is_empty() {
        return text.value.clone();
    }

    let mut spans = text.matched_substrings.clone();
    spans.sort_by_key(|span| span.offset);
    check_spans_sorted(&spans);

    let chars: Vec<char> = text.value.chars().collect();
    let mut pending = spans.into_iter().peekable();
    let mut output = String::with_capacity(
        text.value.len() + pending.len() * (HIGHLIGHT_OPEN.len() + HIGHLIGHT_CLOSE.len()),
    );
    let mut state = MarkupState::default();
    let mut wrapped = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        state.advance(c);

        // Overtaken by a wrapped span, or nothing to wrap
        while let Some(span) = pending.next_if(|span| span.offset < i || span.length == 0) {
            trace!(offset = span.offset, length = span.length, "dropping overlapped span");
        }

        if let Some(span) = pending.next_if(|span| span.offset == i) {
            if state.in_text() {
                let end = span.end().min(chars.len());
                output.push_str(HIGHLIGHT_OPEN);
                output.extend(&chars[i..end]);
                output.push_str(HIGHLIGHT_CLOSE);
                wrapped += 1;
                i = end;
                continue;
            }
            trace!(offset = span.offset, "dropping span inside markup");
        }

        output.push(c);
        i += 1;
    }

    check_highlight_preserves_text(&text.value, &output, wrapped);
    output
}

/// Highlighted field when the API returned one, the plain fallback otherwise.
///
/// Teasers show a highlighted title when available and the raw name when not.
pub fn highlight_field(field: Option<&HighlightableText>, fallback: &str) -> String {
    field.map_or_else(|| fallback.to_string(), highlight)
}
