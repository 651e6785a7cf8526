// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Settings store configuration.

use super::codec::ValueCodec;
use crate::settings::VERTICAL_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Namespace token used by the search widgets.
pub const DEFAULT_NAMESPACE: &str = "yext";

/// Parameters set on every write, whatever the settings say.
///
/// The API omits facets unless asked, and every widget wants them.
pub const FORCED_PARAMS: &[(&str, &str)] = &[("retrieveFacets", "true")];

/// How a store maps settings onto the query string.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Keys are written as `<namespace>_<setting>`.
    pub namespace: String,
    pub codec: ValueCodec,
    /// Limit used when the URL has none; `None` lets the server decide.
    ///
    /// A `null` limit is never written to the URL, so with a `Some` default
    /// it reads back as this default rather than as `null`. Only a config
    /// whose default is `None` can round-trip "server decides".
    pub default_limit: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            codec: ValueCodec::Plain,
            default_limit: None,
        }
    }
}

impl StoreConfig {
    /// Configuration for a single-vertical widget (fixed page size).
    pub fn vertical() -> Self {
        Self {
            default_limit: Some(VERTICAL_PAGE_SIZE),
            ..Self::default()
        }
    }

    /// Prefix every owned key starts with.
    pub fn prefix(&self) -> String {
        format!("{}_", self.namespace)
    }
}
