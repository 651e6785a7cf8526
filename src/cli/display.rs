// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the serpkit CLI.
//!
//! Colors only when stdout is a TTY and `NO_COLOR` is unset, so piped output
//! stays plain.

use serpkit::highlight::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use serpkit::highlight::suggestion::SUGGESTION_OPEN;
use serpkit::{Pager, SearchSettings};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const CYAN: &str = "\x1b[36m";
pub const YELLOW: &str = "\x1b[33m";
pub const GRAY: &str = "\x1b[90m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PAGER
// ═══════════════════════════════════════════════════════════════════════════

/// `‹ 2 [3] 4 5 … ›`
pub fn pager_line(pager: &Pager) -> String {
    let mut parts = Vec::with_capacity(pager.pages.len() + 4);
    if pager.previous.is_some() {
        parts.push(styled(&[GRAY], "‹"));
    }
    for &page in &pager.pages {
        if pager.is_current(page) {
            parts.push(styled(&[BOLD, CYAN], &format!("[{}]", page)));
        } else {
            parts.push(page.to_string());
        }
    }
    if pager.ellipsis {
        parts.push(styled(&[DIM], "…"));
    }
    if pager.next.is_some() {
        parts.push(styled(&[GRAY], "›"));
    }
    parts.join(" ")
}

// ═══════════════════════════════════════════════════════════════════════════
// HIGHLIGHT
// ═══════════════════════════════════════════════════════════════════════════

/// Render highlight markers as terminal emphasis.
pub fn emphasize(markup: &str) -> String {
    if !use_colors() {
        return markup.to_string();
    }
    paint_markers(markup, &format!("{}{}", BOLD, YELLOW), RESET)
}

/// Swap each highlight opener for `on` and the `</span>` that closes it for
/// `off`. Spans the snippet already carried are left alone.
fn paint_markers(markup: &str, on: &str, off: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some((start, opener)) = next_marker(rest) {
        out.push_str(&rest[..start]);
        out.push_str(on);
        rest = &rest[start + opener.len()..];

        // Nested spans inside the marker keep their own closers.
        let mut depth = 0usize;
        let mut cursor = 0;
        let close = loop {
            let tail = &rest[cursor..];
            let next_open = tail.find("<span");
            let Some(next_close) = tail.find(HIGHLIGHT_CLOSE) else {
                break None;
            };
            match next_open {
                Some(open) if open < next_close => {
                    depth += 1;
                    cursor += open + "<span".len();
                }
                _ if depth > 0 => {
                    depth -= 1;
                    cursor += next_close + HIGHLIGHT_CLOSE.len();
                }
                _ => break Some(cursor + next_close),
            }
        };

        match close {
            Some(end) => {
                out.push_str(&rest[..end]);
                out.push_str(off);
                rest = &rest[end + HIGHLIGHT_CLOSE.len()..];
            }
            None => {
                out.push_str(rest);
                out.push_str(off);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Earliest highlight or suggestion opener in `markup`.
fn next_marker(markup: &str) -> Option<(usize, &'static str)> {
    [HIGHLIGHT_OPEN, SUGGESTION_OPEN]
        .into_iter()
        .filter_map(|marker| markup.find(marker).map(|at| (at, marker)))
        .min_by_key(|&(at, _)| at)
}

// ═══════════════════════════════════════════════════════════════════════════
// SETTINGS
// ═══════════════════════════════════════════════════════════════════════════

/// One `key = value` line per setting, keys aligned.
pub fn settings_table(settings: &SearchSettings) -> String {
    let width = settings.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    settings
        .iter()
        .map(|(key, value)| {
            format!(
                "{} = {}",
                styled(&[CYAN], &format!("{:width$}", key, width = width)),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
