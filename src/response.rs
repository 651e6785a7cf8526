// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Telling universal responses from vertical ones.
//!
//! A universal response groups results per vertical under `modules`; a vertical
//! response lists `results` directly with a `resultsCount`. Nothing else about
//! the payload is modeled here.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    /// Results of every vertical, grouped under `modules`.
    Universal,
    /// Results of one vertical.
    Vertical,
}

impl ResponseShape {
    /// Shape of either the full `{meta, response}` envelope or its `response` body.
    pub fn detect(payload: &Value) -> Self {
        if body(payload).get("modules").is_some() {
            Self::Universal
        } else {
            Self::Vertical
        }
    }
}

/// `resultsCount` of a vertical response, if present.
pub fn result_count(payload: &Value) -> Option<u64> {
    body(payload).get("resultsCount").and_then(Value::as_u64)
}

fn body(payload: &Value) -> &Value {
    payload.get("response").unwrap_or(payload)
}
