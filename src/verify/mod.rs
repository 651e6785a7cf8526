// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer.
//!
//! Type-level wrappers live next to the data they guard (`PageWindow` in
//! `pager::model`). This module holds the runtime contracts that panic in
//! debug builds when an algorithm breaks its own invariants.

pub mod contracts;
