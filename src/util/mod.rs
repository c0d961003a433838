// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers that didn't belong to any one stage.

pub mod find;

pub use find::find_all;
