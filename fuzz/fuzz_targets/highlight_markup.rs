// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for markup-safe highlighting.
//!
//! Snippets are arbitrary HTML from the index with arbitrary spans from the
//! API. Whatever arrives, the highlighter must not panic and must only ever
//! add markers around text it was given.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serpkit::highlight::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use serpkit::{highlight, open_links_in_new_tab, HighlightableText, MatchSpan};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    value: String,
    spans: Vec<(u16, usize)>,
}

fuzz_target!(|input: HighlightInput| {
    // Marker text inside the input would make stripping ambiguous
    if input.value.contains(HIGHLIGHT_OPEN) || input.value.contains(HIGHLIGHT_CLOSE) {
        return;
    }

    let spans = input
        .spans
        .iter()
        .map(|&(offset, length)| MatchSpan::new(offset as usize, length))
        .collect();
    let out = highlight(&HighlightableText::new(input.value.clone(), spans));

    // Property 1: stripping the markers gives back the input
    let stripped = out.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "");
    assert_eq!(stripped, input.value, "highlight changed the text");

    // Property 2: markers come in pairs
    assert_eq!(
        out.matches(HIGHLIGHT_OPEN).count(),
        out.matches(HIGHLIGHT_CLOSE).count()
    );

    // Link rewriting must accept anything the highlighter produces
    let _ = open_links_in_new_tab(&out);
});
