// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search widgets.
//!
//! Exposes the pager, the highlighters and a settings store bound to the
//! page's own `window.location` / `window.history`:
//!
//! ```js
//! const store = new SettingsStore({ namespace: "yext" });
//! const settings = store.syncInStore();
//! settings.input = "rust";
//! store.write(settings);
//! const pager = pagerModel(3, 12, 4);
//! ```

use crate::error::StoreError;
use crate::highlight::{highlight, highlight_suggestion, HighlightableText};
use crate::pager::{select_page_window, Pager};
use crate::settings::SearchSettings;
use crate::store::provider::{pairs_of, set_pairs};
use crate::store::{QueryPairs, QueryParamSettingsStore, StoreConfig, UrlStateProvider};
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Plain JS objects (not `Map`s) for JSON-shaped values.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string().into())
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Provider(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn property(target: &JsValue, key: &str) -> Result<JsValue, StoreError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(js_error)
}

// ============================================================================
// BROWSER URL STATE
// ============================================================================

/// `window.location` for reads, `history.replaceState` for writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrlState;

impl BrowserUrlState {
    fn window() -> JsValue {
        js_sys::global().into()
    }

    fn current_url() -> Result<Url, StoreError> {
        let location = property(&Self::window(), "location")?;
        let href = property(&location, "href")?
            .as_string()
            .ok_or_else(|| StoreError::Provider("location.href is not a string".into()))?;
        Ok(Url::parse(&href)?)
    }
}

impl UrlStateProvider for BrowserUrlState {
    fn query_pairs(&self) -> Result<QueryPairs, StoreError> {
        Ok(pairs_of(&Self::current_url()?))
    }

    fn replace_query(&self, pairs: &[(String, String)]) -> Result<(), StoreError> {
        let mut url = Self::current_url()?;
        set_pairs(&mut url, pairs);

        let history = property(&Self::window(), "history")?;
        let replace_state: Function = property(&history, "replaceState")?
            .dyn_into()
            .map_err(|_| StoreError::Provider("history.replaceState is not a function".into()))?;
        replace_state
            .call3(
                &history,
                &JsValue::NULL,
                &JsValue::from_str(""),
                &JsValue::from_str(url.as_str()),
            )
            .map_err(js_error)?;
        Ok(())
    }
}

// ============================================================================
// EXPORTS
// ============================================================================

/// Page numbers to show around `current_page`.
#[wasm_bindgen(js_name = selectPageWindow)]
pub fn select_page_window_js(
    total_pages: u32,
    current_page: u32,
    window_size: usize,
) -> Result<Vec<u32>, JsValue> {
    select_page_window(total_pages, current_page, window_size).map_err(|e| e.to_string().into())
}

/// Full pager state: `{currentPage, totalPages, pages, previous, next, ellipsis}`.
#[wasm_bindgen(js_name = pagerModel)]
pub fn pager_model(current_page: u32, total_pages: u32, window_size: usize) -> Result<JsValue, JsValue> {
    let pager = Pager::new(current_page, total_pages, window_size).map_err(|e| e.to_string())?;
    to_js(&pager)
}

/// Highlight a `{value, matchedSubstrings}` field from the search API.
#[wasm_bindgen(js_name = highlightText)]
pub fn highlight_text(field: JsValue) -> Result<String, JsValue> {
    let field: HighlightableText = from_value(field).map_err(|e| e.to_string())?;
    Ok(highlight(&field))
}

#[wasm_bindgen(js_name = highlightSuggestion)]
pub fn highlight_suggestion_js(value: &str, input: &str) -> Result<String, JsValue> {
    highlight_suggestion(value, input).map_err(|e| e.to_string().into())
}

/// Settings store over the page URL.
#[wasm_bindgen]
pub struct SettingsStore {
    inner: QueryParamSettingsStore<BrowserUrlState>,
}

#[wasm_bindgen]
impl SettingsStore {
    /// `config` is optional; see `StoreConfig` for the accepted keys.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SettingsStore, JsValue> {
        let config: StoreConfig = if config.is_undefined() || config.is_null() {
            StoreConfig::default()
        } else {
            from_value(config).map_err(|e| e.to_string())?
        };
        Ok(SettingsStore {
            inner: QueryParamSettingsStore::with_config(BrowserUrlState, config),
        })
    }

    pub fn read(&self) -> Result<JsValue, JsValue> {
        let settings = self.inner.read().map_err(|e| e.to_string())?;
        to_js(&settings)
    }

    pub fn write(&self, settings: JsValue) -> Result<(), JsValue> {
        let settings: SearchSettings = from_value(settings).map_err(|e| e.to_string())?;
        self.inner.write(&settings).map_err(|e| e.to_string().into())
    }

    #[wasm_bindgen(js_name = syncInStore)]
    pub fn sync_in_store(&self) -> Result<JsValue, JsValue> {
        let settings = self.inner.sync_in_store().map_err(|e| e.to_string())?;
        to_js(&settings)
    }
}
