// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! 1. **Type-level wrappers** (`Ciphertext`) that reject bad input once, at
//!    the boundary.
//! 2. **Runtime contracts** that panic in debug builds when the index or the
//!    search breaks an invariant. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
