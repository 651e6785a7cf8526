// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search settings: the state a widget persists in the URL.
//!
//! Settings are an open map of JSON values because the widgets pass most of
//! them straight through to the search API (facet filters, sort directives).
//! The handful of keys the widgets reason about get typed accessors.

pub mod vertical;

pub use vertical::{TeaserLayout, Vertical, ALL_VERTICALS};

use crate::error::SettingsError;
use crate::pager::offset_for_page;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const INPUT: &str = "input";
pub const OFFSET: &str = "offset";
pub const LIMIT: &str = "limit";
pub const FILTERS: &str = "filters";
pub const FACET_FILTERS: &str = "facetFilters";
pub const SORT_BYS: &str = "sortBys";
pub const ACTIVE_VERTICAL: &str = "activeVertical";

/// Results per page used by vertical widgets.
pub const VERTICAL_PAGE_SIZE: u64 = 16;

/// Search settings keyed by setting name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchSettings {
    entries: Map<String, Value>,
}

impl SearchSettings {
    /// Defaults with no limit (server decides the page size).
    pub fn new() -> Self {
        Self::defaults(None)
    }

    /// Defaults with a fixed page size.
    pub fn with_limit(limit: u64) -> Self {
        Self::defaults(Some(limit))
    }

    /// `input: ""`, `offset: 0`, `limit`, empty filters, relevance sort, all verticals.
    pub fn defaults(limit: Option<u64>) -> Self {
        let mut entries = Map::new();
        entries.insert(INPUT.into(), json!(""));
        entries.insert(OFFSET.into(), json!(0));
        entries.insert(LIMIT.into(), json!(limit));
        entries.insert(FILTERS.into(), json!({}));
        entries.insert(FACET_FILTERS.into(), json!({}));
        entries.insert(SORT_BYS.into(), json!([{ "type": "RELEVANCE" }]));
        entries.insert(ACTIVE_VERTICAL.into(), json!(ALL_VERTICALS));
        Self { entries }
    }

    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ------------------------------------------------------------------
    // Typed accessors
    // ------------------------------------------------------------------

    /// Free-text query; empty when unset or not a string.
    pub fn input(&self) -> &str {
        self.get(INPUT).and_then(Value::as_str).unwrap_or("")
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.set(INPUT, input.into());
    }

    /// Zero-based index of the first result; 0 when unset or not a non-negative integer.
    pub fn offset(&self) -> u64 {
        self.get(OFFSET).and_then(Value::as_u64).unwrap_or(0)
    }

    /// Page size, `None` when the server picks.
    pub fn limit(&self) -> Option<u64> {
        self.get(LIMIT).and_then(Value::as_u64)
    }

    pub fn active_vertical(&self) -> Vertical {
        self.get(ACTIVE_VERTICAL)
            .and_then(Value::as_str)
            .map_or(Vertical::All, Vertical::parse)
    }

    pub fn set_active_vertical(&mut self, vertical: &Vertical) {
        self.set(ACTIVE_VERTICAL, vertical.key());
    }

    /// 1-based page implied by `offset / limit`.
    pub fn current_page(&self) -> Option<u64> {
        self.limit()
            .filter(|limit| *limit > 0)
            .map(|limit| self.offset() / limit + 1)
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    /// A new search: back to defaults, keeping the query and page size.
    pub fn start_search(&mut self) {
        let input = self.input().to_string();
        let limit = self.get(LIMIT).cloned();
        self.reset();
        self.set_input(input);
        if let Some(limit) = limit {
            self.set(LIMIT, limit);
        }
    }

    /// Back to defaults, keeping the page size.
    pub fn reset(&mut self) {
        let limit = self.limit();
        *self = Self::defaults(limit);
    }

    /// Move to `page` (1-based) by rewriting the offset.
    pub fn go_to_page(&mut self, page: u32) -> Result<(), SettingsError> {
        if page == 0 {
            return Err(SettingsError::PageZero);
        }
        let limit = self.limit().filter(|l| *l > 0).ok_or(SettingsError::NoLimit)?;
        self.set(OFFSET, offset_for_page(page, limit));
        Ok(())
    }

    /// Check the pagination invariants.
    ///
    /// The store writes whatever it is given; callers run this first when they
    /// need well-formed paging.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let offset = match self.get(OFFSET) {
            None => 0,
            Some(value) => value
                .as_u64()
                .ok_or_else(|| SettingsError::InvalidOffset(value.clone()))?,
        };

        let limit = match self.get(LIMIT) {
            None | Some(Value::Null) => None,
            Some(value) => match value.as_u64() {
                Some(limit) if limit > 0 => Some(limit),
                _ => return Err(SettingsError::InvalidLimit(value.clone())),
            },
        };

        if let Some(limit) = limit {
            if offset % limit != 0 {
                return Err(SettingsError::MisalignedOffset { offset, limit });
            }
        }
        Ok(())
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Map<String, Value>> for SearchSettings {
    fn from(entries: Map<String, Value>) -> Self {
        Self::from_map(entries)
    }
}

impl<'a> IntoIterator for &'a SearchSettings {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
