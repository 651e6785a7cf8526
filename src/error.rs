// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types, one enum per concern.
//!
//! The highlighter itself never fails; `HighlightError` only covers the
//! suggestion highlighter, which compiles the typed query into a pattern.

use serde_json::Value;
use thiserror::Error;

/// Pager window errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    /// The current page is not among the page numbers handed to the selector.
    #[error("current page {page} is not in the page list")]
    PageNotFound { page: String },
    /// A pager needs at least one page.
    #[error("pager has no pages")]
    NoPages,
    /// Current page outside `[1, total_pages]`.
    #[error("current page {current} is outside 1..={total}")]
    PageOutOfRange { current: u32, total: u32 },
    /// A window of zero pages shows nothing.
    #[error("pager window size must be at least 1")]
    EmptyWindow,
    /// Result-based pagers need a positive limit to derive page numbers.
    #[error("page size must be positive to compute pages")]
    ZeroLimit,
}

/// Suggestion highlighting errors.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("query could not be compiled into a matcher: {0}")]
    Pattern(#[from] regex::Error),
    /// Match spans are written `offset:length`.
    #[error("invalid match span '{0}', expected OFFSET:LENGTH")]
    InvalidSpan(String),
}

/// Caller-side validation errors for [`crate::SearchSettings`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("offset must be a non-negative integer, got {0}")]
    InvalidOffset(Value),
    #[error("limit must be a positive integer or null, got {0}")]
    InvalidLimit(Value),
    #[error("offset {offset} is not a multiple of limit {limit}")]
    MisalignedOffset { offset: u64, limit: u64 },
    #[error("page numbers start at 1")]
    PageZero,
    #[error("cannot change page without a limit")]
    NoLimit,
}

/// Settings store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to encode setting '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The URL state provider failed (e.g. a browser API threw).
    #[error("url state unavailable: {0}")]
    Provider(String),
}
