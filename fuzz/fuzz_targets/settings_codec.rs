// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the settings store and its value codecs.
//!
//! Query strings are user-controlled: anyone can hand out a link. Reading
//! must never fail on them, and syncing must settle after one pass.

#![no_main]

use libfuzzer_sys::fuzz_target;
use serpkit::{MemoryUrlState, QueryParamSettingsStore, StoreConfig, ValueCodec};

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };

    // Property 1: decoding never fails, for either codec
    for codec in [ValueCodec::Plain, ValueCodec::Tagged] {
        let _ = codec.decode(query);
    }

    let Ok(url) = MemoryUrlState::parse(&format!("https://example.com/?{}", query)) else {
        return;
    };

    for codec in [ValueCodec::Plain, ValueCodec::Tagged] {
        let store = QueryParamSettingsStore::with_config(
            &url,
            StoreConfig {
                codec,
                ..StoreConfig::default()
            },
        );

        // Property 2: sync succeeds and is idempotent
        store.sync_in_store().expect("sync over a valid URL");
        let once = url.href();
        store.sync_in_store().expect("second sync");
        assert_eq!(url.href(), once, "sync is not idempotent");
    }
});
