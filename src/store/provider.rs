// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Access to the URL the settings live in.
//!
//! The store never touches a global. In the browser the provider wraps
//! `window.location` and `window.history` (see the `wasm` module); in tests
//! and on the command line it is an in-memory URL.

use crate::error::StoreError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use url::Url;

/// Decoded `(key, value)` pairs in query-string order.
pub type QueryPairs = Vec<(String, String)>;

/// Read and replace the query string of the current URL.
pub trait UrlStateProvider {
    /// Current query parameters, decoded, in order.
    fn query_pairs(&self) -> Result<QueryPairs, StoreError>;

    /// Replace the whole query string without adding a history entry.
    fn replace_query(&self, pairs: &[(String, String)]) -> Result<(), StoreError>;
}

impl<P: UrlStateProvider + ?Sized> UrlStateProvider for &P {
    fn query_pairs(&self) -> Result<QueryPairs, StoreError> {
        (**self).query_pairs()
    }

    fn replace_query(&self, pairs: &[(String, String)]) -> Result<(), StoreError> {
        (**self).replace_query(pairs)
    }
}

impl<P: UrlStateProvider + ?Sized> UrlStateProvider for Rc<P> {
    fn query_pairs(&self) -> Result<QueryPairs, StoreError> {
        (**self).query_pairs()
    }

    fn replace_query(&self, pairs: &[(String, String)]) -> Result<(), StoreError> {
        (**self).replace_query(pairs)
    }
}

/// Query pairs of `url`, decoded.
pub(crate) fn pairs_of(url: &Url) -> QueryPairs {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Rewrite the query of `url` to exactly `pairs`; no pairs drops the `?`.
pub(crate) fn set_pairs(url: &mut Url, pairs: &[(String, String)]) {
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

/// An in-memory URL with single-entry history.
///
/// Several stores can share one instance through `&MemoryUrlState` or
/// `Rc<MemoryUrlState>`; the last write wins, as in a browser tab.
#[derive(Debug)]
pub struct MemoryUrlState {
    url: RefCell<Url>,
    replacements: Cell<usize>,
}

impl MemoryUrlState {
    pub fn new(url: Url) -> Self {
        Self {
            url: RefCell::new(url),
            replacements: Cell::new(0),
        }
    }

    pub fn parse(href: &str) -> Result<Self, StoreError> {
        Ok(Self::new(Url::parse(href)?))
    }

    pub fn href(&self) -> String {
        self.url.borrow().to_string()
    }

    /// Query string without the leading `?`.
    pub fn query(&self) -> Option<String> {
        self.url.borrow().query().map(str::to_string)
    }

    /// How many times the query has been replaced.
    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }
}

impl UrlStateProvider for MemoryUrlState {
    fn query_pairs(&self) -> Result<QueryPairs, StoreError> {
        Ok(pairs_of(&self.url.borrow()))
    }

    fn replace_query(&self, pairs: &[(String, String)]) -> Result<(), StoreError> {
        set_pairs(&mut self.url.borrow_mut(), pairs);
        self.replacements.set(self.replacements.get() + 1);
        Ok(())
    }
}
