// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pager window selection.
//!
//! Any `(total, current, window)` either errors cleanly or yields a full,
//! contiguous window holding the current page.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serpkit::{select_page_window, Pager};

#[derive(Debug, Arbitrary)]
struct WindowInput {
    total: u16,
    current: u16,
    window: u8,
}

fuzz_target!(|input: WindowInput| {
    let total = u32::from(input.total);
    let current = u32::from(input.current);
    let window = usize::from(input.window);

    match select_page_window(total, current, window) {
        Ok(pages) => {
            assert!(current >= 1 && current <= total);
            assert_eq!(pages.len(), window.min(total as usize));
            assert!(window == 0 || pages.contains(&current));
            assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
        }
        Err(_) => assert!(current == 0 || current > total),
    }

    if let Ok(pager) = Pager::new(current, total, window) {
        assert!(!pager.pages.is_empty());
        assert_eq!(pager.previous.is_some(), current > 1);
    }
});
