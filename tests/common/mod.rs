//! Shared test utilities and fixtures.

#![allow(dead_code)]

use serpkit::store::QueryPairs;
use serpkit::UrlStateProvider;

// Re-export canonical test utilities from serpkit::testing
pub use serpkit::testing::{
    make_field, make_span, memory_store, memory_store_with, memory_url, strip_highlights, wrap,
    LINK_SNIPPET, TEST_ORIGIN,
};

// ============================================================================
// URL HELPERS
// ============================================================================

/// Query pairs whose key starts with `prefix`.
pub fn namespaced_pairs<P: UrlStateProvider>(provider: &P, prefix: &str) -> QueryPairs {
    provider
        .query_pairs()
        .expect("memory provider never fails")
        .into_iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .collect()
}

/// Value of the first pair named `key`.
pub fn param<P: UrlStateProvider>(provider: &P, key: &str) -> Option<String> {
    provider
        .query_pairs()
        .expect("memory provider never fails")
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

// ============================================================================
// API FIXTURES
// ============================================================================

/// A universal search response with two verticals.
pub const UNIVERSAL_RESPONSE: &str = r#"{
  "meta": { "uuid": "u-1" },
  "response": {
    "modules": [
      { "verticalConfigId": "blog", "resultsCount": 3, "results": [] },
      { "verticalConfigId": "locationsearch", "resultsCount": 1, "results": [] }
    ]
  }
}"#;

/// A vertical search response page.
pub const VERTICAL_RESPONSE: &str = r#"{
  "meta": { "uuid": "v-1" },
  "response": {
    "resultsCount": 37,
    "results": [
      {
        "data": { "name": "Rust & WebAssembly" },
        "highlightedFields": {
          "name": { "value": "Rust & WebAssembly", "matchedSubstrings": [{ "offset": 0, "length": 4 }] }
        }
      }
    ],
    "facets": []
  }
}"#;
