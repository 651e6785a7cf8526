// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building blocks for search-results widgets.
//!
//! Three independent pieces that a search page needs around a hosted search
//! API, each usable natively or from the browser through WebAssembly:
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────┐   ┌──────────────────────────┐
//! │    pager     │   │    highlight    │   │    settings + store      │
//! │ select_window│   │ highlight       │   │ SearchSettings           │
//! │ Pager        │   │ highlight_      │   │ QueryParamSettingsStore  │
//! │ ResultRange  │   │   suggestion    │   │   read / write / sync    │
//! └──────────────┘   └─────────────────┘   └──────────────────────────┘
//!        │                   │                        │
//!        ▼                   ▼                        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │              verify::contracts (debug-build invariants)           │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use serpkit::{highlight, select_page_window, HighlightableText, MatchSpan};
//!
//! assert_eq!(select_page_window(20, 5, 5).unwrap(), vec![3, 4, 5, 6, 7]);
//!
//! let text = HighlightableText::new("Rust & WebAssembly", vec![MatchSpan::new(0, 4)]);
//! assert_eq!(highlight(&text), r#"<span class="highlight">Rust</span> & WebAssembly"#);
//! ```
//!
//! ```
//! use serpkit::{MemoryUrlState, QueryParamSettingsStore};
//!
//! let url = MemoryUrlState::parse("https://example.com/search?yext_input=rust").unwrap();
//! let store = QueryParamSettingsStore::new(url);
//! let mut settings = store.sync_in_store().unwrap();
//! settings.set_input("wasm");
//! store.write(&settings).unwrap();
//! assert!(store.provider().href().contains("yext_input=wasm"));
//! ```

pub mod error;
pub mod highlight;
pub mod pager;
pub mod response;
pub mod settings;
pub mod store;
pub mod verify;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{HighlightError, PagerError, SettingsError, StoreError};
pub use highlight::{
    highlight, highlight_field, highlight_suggestion, open_links_in_new_tab, HighlightableText,
    MatchSpan,
};
pub use pager::{
    offset_for_page, select_page_window, select_window, PageWindow, Pager, ResultRange,
    DEFAULT_WINDOW_SIZE,
};
pub use response::ResponseShape;
pub use settings::{SearchSettings, TeaserLayout, Vertical};
pub use store::{
    MemoryUrlState, QueryParamSettingsStore, StoreConfig, UrlStateProvider, ValueCodec,
};
