// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Anchor rewriting for snippet markup.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static ANCHOR_START_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a\b([^>]*)>").expect("anchor pattern compiles"));

/// Make every link in `markup` open in a new tab.
///
/// `<a ...>` start tags without a `target=` attribute get `target="_blank"`,
/// and those without `rel=` get `rel="noopener noreferrer"`. Attributes that
/// are already present are left alone.
pub fn open_links_in_new_tab(markup: &str) -> String {
    ANCHOR_START_TAG
        .replace_all(markup, |caps: &Captures<'_>| {
            let attributes = &caps[1];
            let mut tag = caps[0][..caps[0].len() - 1].to_string();
            if !attributes.contains("target=") {
                tag.push_str(r#" target="_blank""#);
            }
            if !attributes.contains("rel=") {
                tag.push_str(r#" rel="noopener noreferrer""#);
            }
            tag.push('>');
            tag
        })
        .into_owned()
}
