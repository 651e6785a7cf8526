// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pagination: the window of page links and the decisions around it.
//!
//! `window` is the pure selection algorithm. `model` turns a validated
//! `(current, total, window)` triple into what the pager widget renders:
//! page links, previous/next targets, and the trailing ellipsis. It also
//! converts between result offsets and page numbers.

pub mod model;
pub mod window;

pub use model::{offset_for_page, PageWindow, Pager, ResultRange, DEFAULT_WINDOW_SIZE};
pub use window::{page_numbers, select_page_window, select_window};
