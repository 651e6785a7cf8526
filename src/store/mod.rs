// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! URL-backed settings store.
//!
//! The address bar is the store: every widget on the page reads its settings
//! from namespaced query parameters and writes them back before searching, so
//! a reload or a shared link restores the same search.
//!
//! ```text
//! https://site/search?page=a&yext_input=rust&yext_offset=16&yext_retrieveFacets=true
//!                     ^^^^^^ untouched  ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ owned
//! ```
//!
//! A write replaces the whole owned set, so keys dropped from the settings
//! disappear from the URL and repeated writes never pile up stale state.

pub mod codec;
pub mod config;
pub mod provider;

pub use codec::{is_unset, ValueCodec};
pub use config::{StoreConfig, DEFAULT_NAMESPACE, FORCED_PARAMS};
pub use provider::{MemoryUrlState, QueryPairs, UrlStateProvider};

use crate::error::StoreError;
use crate::settings::SearchSettings;
use crate::verify::contracts::check_params_namespaced;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Settings store over a [`UrlStateProvider`].
///
/// Performs no validation: it stores whatever it is given. See
/// [`SearchSettings::validate`].
#[derive(Debug, Clone)]
pub struct QueryParamSettingsStore<P> {
    provider: P,
    config: StoreConfig,
}

impl<P: UrlStateProvider> QueryParamSettingsStore<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, StoreConfig::default())
    }

    pub fn with_config(provider: P, config: StoreConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Settings from the URL, merged over the defaults.
    ///
    /// Only parameters starting with `<namespace>_` are considered; when a key
    /// repeats, its first occurrence wins. Values that decode to `null` or
    /// `""` leave the default in place.
    pub fn read(&self) -> Result<SearchSettings, StoreError> {
        let prefix = self.config.prefix();
        let mut settings = SearchSettings::defaults(self.config.default_limit);
        let mut seen = HashSet::new();

        for (key, raw) in self.provider.query_pairs()? {
            let Some(name) = key.strip_prefix(&prefix) else {
                continue;
            };
            if !seen.insert(name.to_string()) {
                continue;
            }
            // An unset value keeps the default, as if the key were absent.
            let value = self.config.codec.decode(&raw);
            if is_unset(&value) {
                trace!(key = %key, "ignoring unset value");
                continue;
            }
            settings.set(name, value);
        }

        debug!(namespace = %self.config.namespace, read = seen.len(), "read search settings");
        Ok(settings)
    }

    /// Replace the owned parameters with `settings`.
    ///
    /// Null and empty-string settings are left out. [`FORCED_PARAMS`] are
    /// always written. Unrelated parameters keep their order; owned ones
    /// follow them. The current history entry is replaced, never pushed.
    pub fn write(&self, settings: &SearchSettings) -> Result<(), StoreError> {
        let prefix = self.config.prefix();
        let mut owned: QueryPairs = Vec::with_capacity(settings.len() + FORCED_PARAMS.len());

        for (name, value) in settings {
            if let Some(encoded) = self.config.codec.encode(name, value)? {
                owned.push((format!("{}{}", prefix, name), encoded));
            }
        }

        // Forced parameters always go last, so a re-read and re-write
        // produces the same query string.
        for (name, value) in FORCED_PARAMS {
            let key = format!("{}{}", prefix, name);
            owned.retain(|(existing, _)| *existing != key);
            owned.push((key, (*value).to_string()));
        }
        check_params_namespaced(&owned, &prefix);

        let mut pairs: QueryPairs = self
            .provider
            .query_pairs()?
            .into_iter()
            .filter(|(key, _)| !key.starts_with(&prefix))
            .collect();
        let written = owned.len();
        pairs.extend(owned);

        self.provider.replace_query(&pairs)?;
        debug!(namespace = %self.config.namespace, written, "wrote search settings");
        Ok(())
    }

    /// Read, then write back the same settings.
    ///
    /// Run when a widget connects: fills in defaults and the forced
    /// parameters without changing what the URL means. Idempotent.
    pub fn sync_in_store(&self) -> Result<SearchSettings, StoreError> {
        let settings = self.read()?;
        self.write(&settings)?;
        Ok(settings)
    }
}
