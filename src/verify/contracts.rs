// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the pager, highlighter and settings store.
//!
//! Debug-mode assertions only (`debug_assert!`). Zero cost in release builds,
//! loud failures while tests run.
//!
//! | Contract                         | Property                                   |
//! |----------------------------------|--------------------------------------------|
//! | `check_window_well_formed`       | window length, current page inside         |
//! | `check_spans_sorted`             | spans ascending by offset before the scan  |
//! | `check_highlight_preserves_text` | output = input + exactly the markers added |
//! | `check_params_namespaced`        | store writes only namespaced keys          |

use crate::highlight::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use crate::highlight::MatchSpan;
use crate::pager::DEFAULT_WINDOW_SIZE;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // A pager with a zero default window would render no links at all.
    assert!(DEFAULT_WINDOW_SIZE >= 1);
};

// ============================================================================
// PAGER CONTRACTS
// ============================================================================

/// Check that a selected window has the expected length and holds the current page.
///
/// # Panics (debug builds only)
/// Panics if `window.len() != expected_len` or `current_position` is outside the window.
#[inline]
pub fn check_window_well_formed<T>(window: &[T], current_position: usize, expected_len: usize) {
    debug_assert_eq!(
        window.len(),
        expected_len,
        "Contract violation: window length {} != expected {}",
        window.len(),
        expected_len
    );
    debug_assert!(
        current_position < window.len(),
        "Contract violation: current page position {} outside window of {}",
        current_position,
        window.len()
    );
}

// ============================================================================
// HIGHLIGHT CONTRACTS
// ============================================================================

/// Check that spans are ascending by offset.
#[inline]
pub fn check_spans_sorted(spans: &[MatchSpan]) {
    for (i, pair) in spans.windows(2).enumerate() {
        debug_assert!(
            pair[0].offset <= pair[1].offset,
            "Contract violation: spans[{}].offset {} > spans[{}].offset {}",
            i,
            pair[0].offset,
            i + 1,
            pair[1].offset
        );
    }
}

/// Check that highlighting only inserted markers.
///
/// Every input character is copied exactly once, so the output is the input
/// plus one open/close marker pair per wrapped span.
///
/// # Panics (debug builds only)
/// Panics if the byte lengths disagree.
#[inline]
pub fn check_highlight_preserves_text(input: &str, output: &str, wrapped: usize) {
    let expected = input.len() + wrapped * (HIGHLIGHT_OPEN.len() + HIGHLIGHT_CLOSE.len());
    debug_assert_eq!(
        output.len(),
        expected,
        "Contract violation: highlight output is {} bytes, expected {} ({} spans wrapped)",
        output.len(),
        expected,
        wrapped
    );
}

// ============================================================================
// STORE CONTRACTS
// ============================================================================

/// Check that every parameter the store is about to write carries its prefix.
#[inline]
pub fn check_params_namespaced(params: &[(String, String)], prefix: &str) {
    for (key, _) in params {
        debug_assert!(
            key.starts_with(prefix),
            "Contract violation: store wrote un-namespaced key '{}' (prefix '{}')",
            key,
            prefix
        );
    }
}
