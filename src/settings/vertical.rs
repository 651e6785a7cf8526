// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result categories ("verticals") and how their teasers are laid out.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Key of the aggregate (universal) view.
pub const ALL_VERTICALS: &str = "all";

/// A named category of results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Vertical {
    /// Universal search: every vertical at once.
    #[default]
    All,
    Blog,
    LocationSearch,
    Other(String),
}

/// Teaser layout for a result of a given vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeaserLayout {
    /// Linked title plus highlighted snippet.
    Default,
    /// Plain title plus snippet paragraph.
    Blog,
}

impl Vertical {
    pub fn parse(key: &str) -> Self {
        match key {
            ALL_VERTICALS => Self::All,
            "blog" => Self::Blog,
            "locationsearch" => Self::LocationSearch,
            other => Self::Other(other.to_string()),
        }
    }

    /// The key used in API requests and the URL.
    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_VERTICALS,
            Self::Blog => "blog",
            Self::LocationSearch => "locationsearch",
            Self::Other(key) => key,
        }
    }

    pub fn is_universal(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Section heading shown above the vertical's results.
    pub fn title(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::LocationSearch => "Location".to_string(),
            other => title_case(&other.key().replace('_', " ")),
        }
    }

    pub fn teaser_layout(&self) -> TeaserLayout {
        match self {
            Self::Blog => TeaserLayout::Blog,
            _ => TeaserLayout::Default,
        }
    }
}

/// Upper-case the first character of every ASCII word.
fn title_case(s: &str) -> String {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut prev_is_word = false;
    s.chars()
        .map(|c| {
            let starts_word = is_word(c) && !prev_is_word;
            prev_is_word = is_word(c);
            if starts_word {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

impl FromStr for Vertical {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Vertical {
    fn from(key: String) -> Self {
        Self::parse(&key)
    }
}

impl From<Vertical> for String {
    fn from(vertical: Vertical) -> Self {
        vertical.key().to_string()
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
