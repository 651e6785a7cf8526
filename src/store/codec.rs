// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Encoding of setting values as query-string values.
//!
//! # Plain
//!
//! Strings are written raw, everything else as JSON. Reading tries a JSON
//! parse and keeps the raw string when that fails. Simple, and what existing
//! URLs use, but ambiguous: the string `"42"` comes back as the number `42`.
//!
//! # Tagged
//!
//! Every value carries a marker: `s:` for raw strings, `j:` for JSON. Values
//! without a marker (forced parameters, URLs written by the plain codec) fall
//! back to plain decoding, so both codecs can read each other's URLs.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

const STRING_TAG: &str = "s:";
const JSON_TAG: &str = "j:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueCodec {
    #[default]
    Plain,
    Tagged,
}

impl ValueCodec {
    /// Encode `value` for the query string.
    ///
    /// Returns `None` for `null` and the empty string: those settings are
    /// left out of the URL and come back as their defaults.
    pub fn encode(self, key: &str, value: &Value) -> Result<Option<String>, StoreError> {
        if is_unset(value) {
            return Ok(None);
        }
        let encoded = match value {
            Value::String(s) => match self {
                Self::Plain => s.clone(),
                Self::Tagged => format!("{}{}", STRING_TAG, s),
            },
            other => {
                let json = serde_json::to_string(other).map_err(|source| StoreError::Encode {
                    key: key.to_string(),
                    source,
                })?;
                match self {
                    Self::Plain => json,
                    Self::Tagged => format!("{}{}", JSON_TAG, json),
                }
            }
        };
        Ok(Some(encoded))
    }

    /// Decode a query-string value. Never fails; undecodable values stay strings.
    pub fn decode(self, raw: &str) -> Value {
        match self {
            Self::Plain => decode_plain(raw),
            Self::Tagged => {
                if let Some(s) = raw.strip_prefix(STRING_TAG) {
                    Value::String(s.to_string())
                } else if let Some(json) = raw.strip_prefix(JSON_TAG) {
                    serde_json::from_str(json).unwrap_or_else(|err| {
                        debug!(%err, raw, "tagged JSON value did not parse, keeping raw string");
                        Value::String(raw.to_string())
                    })
                } else {
                    decode_plain(raw)
                }
            }
        }
    }
}

/// `null` and `""`: values that never appear in the URL.
pub fn is_unset(value: &Value) -> bool {
    value.is_null() || value.as_str() == Some("")
}

fn decode_plain(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
