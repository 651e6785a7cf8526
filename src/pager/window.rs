// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Window selection: which page links the pager shows.
//!
//! The window slides inward near either end instead of shrinking, so page 1
//! and the last page still get a full row of links. Away from the ends the
//! current page sits in the middle (just right of it for even windows).
//!
//! ```text
//! total = 20, window = 5
//!
//! current = 1    [1] 2  3  4  5
//! current = 5     3  4 [5] 6  7
//! current = 20   16 17 18 19 [20]
//! ```

use crate::error::PagerError;
use crate::verify::contracts::check_window_well_formed;
use std::fmt::Debug;

/// Page numbers `1..=total`.
pub fn page_numbers(total: u32) -> Vec<u32> {
    (1..=total).collect()
}

/// Select the contiguous run of `all_pages` to display around `current_page`.
///
/// Returns `min(window_size, all_pages.len())` entries. A window of zero
/// selects nothing.
///
/// # Algorithm
///
/// 1. `start = max(0, index - floor(w/2))`, `end = min(N-1, start + w - 1)`
/// 2. If `end` was clamped, re-anchor from the end:
///    `end = min(N-1, index + ceil(w/2) - 1)`, `start = max(0, end - w + 1)`
///
/// # Errors
///
/// [`PagerError::PageNotFound`] when `current_page` is not in `all_pages`.
pub fn select_window<'a, T>(
    all_pages: &'a [T],
    current_page: &T,
    window_size: usize,
) -> Result<&'a [T], PagerError>
where
    T: PartialEq + Debug,
{
    let index = all_pages
        .iter()
        .position(|page| page == current_page)
        .ok_or_else(|| PagerError::PageNotFound {
            page: format!("{:?}", current_page),
        })?;

    if window_size == 0 {
        return Ok(&all_pages[index..index]);
    }

    let len = all_pages.len();
    if window_size >= len {
        return Ok(all_pages);
    }

    let last = len - 1;
    let mut start = index.saturating_sub(window_size / 2);
    let mut end = last.min(start + window_size - 1);

    if end - start < window_size - 1 {
        end = last.min(index + window_size.div_ceil(2) - 1);
        start = (end + 1).saturating_sub(window_size);
    }

    let window = &all_pages[start..=end];
    check_window_well_formed(window, index - start, window_size.min(len));
    Ok(window)
}

/// [`select_window`] over `1..=total_pages`.
pub fn select_page_window(
    total_pages: u32,
    current_page: u32,
    window_size: usize,
) -> Result<Vec<u32>, PagerError> {
    let pages = page_numbers(total_pages);
    select_window(&pages, &current_page, window_size).map(<[u32]>::to_vec)
}
