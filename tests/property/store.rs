//! Settings store properties.

use crate::common::{memory_store, memory_store_with, namespaced_pairs};
use proptest::prelude::*;
use serde_json::{json, Value};
use serpkit::settings::{OFFSET, SORT_BYS};
use serpkit::{SearchSettings, StoreConfig, ValueCodec};
use std::collections::BTreeMap;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Values that survive a URL round trip: never `null`, never `""`, no floats.
fn setting_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        any::<bool>().prop_map(|b| json!(b)),
        "[a-zA-Z0-9 &=?%+#{}\\[\\]\":,]{1,16}".prop_map(Value::String),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(|v| json!(v)),
        ("[a-z]{1,6}", any::<u16>()).prop_map(|(k, v)| json!({ k: v })),
    ]
}

/// Extra settings keyed by lower-case names (never the forced `retrieveFacets`).
fn extra_settings() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map("[a-z]{1,8}", setting_value(), 0..6)
}

fn settings_from(extra: BTreeMap<String, Value>, input: String, offset: u64) -> SearchSettings {
    let mut settings = SearchSettings::with_limit(16);
    settings.set_input(input);
    settings.set(OFFSET, offset);
    settings.set(SORT_BYS, json!([{ "type": "RELEVANCE" }]));
    for (key, value) in extra {
        settings.set(key, value);
    }
    settings
}

/// Raw query strings: namespaced and foreign keys with JSON-ish values.
fn raw_query() -> impl Strategy<Value = String> {
    let key = prop::sample::select(vec![
        "yext_input",
        "yext_offset",
        "yext_limit",
        "yext_filters",
        "yext_retrieveFacets",
        "yext_x",
        "yext_",
        "lang",
        "page",
    ]);
    let value = "[a-z0-9 {}\\[\\]\":,.nul-]{0,12}";
    prop::collection::vec((key, value), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v.replace(' ', "+").replace('"', "%22")))
            .collect::<Vec<_>>()
            .join("&")
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// `read` after `write` returns what was written, plus the forced parameter.
    #[test]
    fn prop_tagged_write_then_read_round_trips(
        extra in extra_settings(),
        input in "[a-zA-Z0-9 {}\"]{1,20}",
        offset in 0u64..10_000,
    ) {
        let config = StoreConfig { codec: ValueCodec::Tagged, ..StoreConfig::default() };
        let store = memory_store_with("lang=en", config);
        let settings = settings_from(extra, input, offset);
        store.write(&settings).unwrap();

        let mut expected = settings;
        expected.set("retrieveFacets", true);
        prop_assert_eq!(store.read().unwrap(), expected);
    }

    /// With the plain codec the same holds for strings that are not JSON.
    #[test]
    fn prop_plain_write_then_read_round_trips(
        words in prop::collection::vec("[a-z]{1,6}", 2..5),
        offset in 0u64..10_000,
    ) {
        let store = memory_store("");
        let settings = settings_from(BTreeMap::new(), words.join(" "), offset);
        store.write(&settings).unwrap();

        let mut expected = settings;
        expected.set("retrieveFacets", true);
        prop_assert_eq!(store.read().unwrap(), expected);
    }

    /// A second write leaves no trace of keys only the first one had.
    #[test]
    fn prop_write_replaces_previous_settings(first in extra_settings(), second in extra_settings()) {
        let store = memory_store("lang=en");
        store.write(&settings_from(first, "a".into(), 0)).unwrap();
        let second = settings_from(second, "b".into(), 0);
        store.write(&second).unwrap();

        for (key, _) in namespaced_pairs(store.provider(), "yext_") {
            let name = key.trim_start_matches("yext_");
            prop_assert!(
                name == "retrieveFacets" || second.get(name).is_some(),
                "stale key {} survived", key
            );
        }
    }

    /// Syncing twice leaves the URL exactly as syncing once.
    #[test]
    fn prop_sync_is_idempotent(query in raw_query(), tagged in any::<bool>()) {
        let codec = if tagged { ValueCodec::Tagged } else { ValueCodec::Plain };
        let store = memory_store_with(&query, StoreConfig { codec, ..StoreConfig::default() });

        store.sync_in_store().unwrap();
        let once = store.provider().href();
        store.sync_in_store().unwrap();
        prop_assert_eq!(store.provider().href(), once);
    }
}
