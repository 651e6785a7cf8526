// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pager as the widget sees it: page links plus the decisions around them.

use super::window::{page_numbers, select_window};
use crate::error::PagerError;
use serde::Serialize;

/// Window size used by the pager widget when none is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// A validated `(total_pages, current_page, window_size)` triple.
///
/// # Invariants (enforced at construction)
///
/// - `total_pages >= 1`
/// - `1 <= current_page <= total_pages`
/// - `window_size >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    total_pages: u32,
    current_page: u32,
    window_size: usize,
}

impl PageWindow {
    pub fn new(current_page: u32, total_pages: u32, window_size: usize) -> Result<Self, PagerError> {
        if total_pages == 0 {
            return Err(PagerError::NoPages);
        }
        if current_page == 0 || current_page > total_pages {
            return Err(PagerError::PageOutOfRange {
                current: current_page,
                total: total_pages,
            });
        }
        if window_size == 0 {
            return Err(PagerError::EmptyWindow);
        }
        Ok(Self {
            total_pages,
            current_page,
            window_size,
        })
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Page numbers to render as links.
    pub fn pages(&self) -> Vec<u32> {
        let all = page_numbers(self.total_pages);
        // current_page is in range by construction
        select_window(&all, &self.current_page, self.window_size)
            .map(<[u32]>::to_vec)
            .unwrap_or_default()
    }

    /// Whether the trailing "..." marker is shown.
    ///
    /// Only the right side is considered; there is no leading ellipsis.
    pub fn shows_ellipsis(&self) -> bool {
        let current = f64::from(self.current_page);
        let total = f64::from(self.total_pages);
        current - 1.0 < total - (self.window_size as f64 / 2.0 + 0.5)
    }
}

/// Everything the pager widget needs to render one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub current_page: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    /// Target of the "previous" link, if shown.
    pub previous: Option<u32>,
    /// Target of the "next" link, if shown.
    pub next: Option<u32>,
    pub ellipsis: bool,
}

impl Pager {
    pub fn new(current_page: u32, total_pages: u32, window_size: usize) -> Result<Self, PagerError> {
        Ok(Self::from_window(&PageWindow::new(
            current_page,
            total_pages,
            window_size,
        )?))
    }

    pub fn from_window(window: &PageWindow) -> Self {
        let current = window.current_page();
        let total = window.total_pages();
        Self {
            current_page: current,
            total_pages: total,
            pages: window.pages(),
            previous: (current != 1).then(|| current - 1),
            next: (current != total).then(|| current + 1),
            ellipsis: window.shows_ellipsis(),
        }
    }

    /// Pager for a result list at `offset` with `limit` results per page.
    ///
    /// Returns `Ok(None)` when there is nothing to page through.
    pub fn for_results(
        offset: u64,
        limit: u64,
        total_count: u64,
        window_size: usize,
    ) -> Result<Option<Self>, PagerError> {
        if limit == 0 {
            return Err(PagerError::ZeroLimit);
        }
        if total_count == 0 {
            return Ok(None);
        }
        let total = to_page(total_count.div_ceil(limit));
        let current = to_page(offset / limit + 1);
        Self::new(current, total, window_size).map(Some)
    }

    /// Whether `page` is rendered as the current (non-link) entry.
    pub fn is_current(&self, page: u32) -> bool {
        page == self.current_page
    }
}

fn to_page(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Result offset for the first item of `page` (1-based).
pub fn offset_for_page(page: u32, limit: u64) -> u64 {
    u64::from(page.saturating_sub(1)).saturating_mul(limit)
}

/// The "Showing first-last of total results" summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultRange {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

impl ResultRange {
    /// `None` when there are no results. A missing limit shows through to the end.
    pub fn new(offset: u64, limit: Option<u64>, total_count: u64) -> Option<Self> {
        if total_count == 0 {
            return None;
        }
        let last = match limit {
            Some(limit) => offset.saturating_add(limit).min(total_count),
            None => total_count,
        };
        Some(Self {
            first: offset.saturating_add(1),
            last,
            total: total_count,
        })
    }
}

impl std::fmt::Display for ResultRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {}-{} of {} results",
            self.first, self.last, self.total
        )
    }
}
