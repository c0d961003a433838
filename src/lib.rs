// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decode unspaced Morse ciphertexts by tiling them with dictionary words.
//!
//! A ciphertext like `...---...` has lost its letter and word gaps. Every
//! way of cutting it into consecutive pieces, each of which is the encoding
//! of some dictionary word, is a candidate plaintext. This crate finds them
//! all, optionally under three mirrored transformations (reversed text,
//! reversed code, or both), and stops cleanly when a node, time or result
//! limit is hit.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │ dictionary   │───▶│ MatchIndexBuilder│───▶│  MatchIndex  │
//! │ transform    │    │  (encode once)   │    │ (per puzzle) │
//! └──────────────┘    └──────────────────┘    └──────────────┘
//!                                                     │
//!                                                     ▼
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │ DecodeReport │◀───│ ResultCollector  │◀───│  Enumerator  │
//! │  (outcome)   │    │  (limit, probe)  │    │ (DFS+budget) │
//! └──────────────┘    └──────────────────┘    └──────────────┘
//! ```
//!
//! [`decode::decode`] runs the whole pipeline for every
//! (puzzle, transformation) pair, in parallel when the `parallel` feature is
//! on.
//!
//! # Invariants
//!
//! | Invariant           | Where it is enforced                       |
//! |---------------------|--------------------------------------------|
//! | Matches in bounds   | `MatchIndex::from_matches`, `contracts`    |
//! | Canonical order     | `index::compare_candidates`                |
//! | Tilings cover fully | `Enumerator`, `check_tiling_covers`        |
//! | Valid ciphertext    | `verify::Ciphertext`                       |
//!
//! # Usage
//!
//! ```
//! use dotdash::{morse, MatchIndexBuilder, SearchBudget, ResultCollector};
//!
//! let builder = MatchIndexBuilder::new(["sos", "eat"], morse::encode);
//! let index = builder.build("...---...");
//! let found = ResultCollector::new().collect(index.tilings(SearchBudget::unlimited()));
//!
//! assert!(found.solutions.iter().any(|s| s.sentence == "sos"));
//! ```

// Module declarations
pub mod config;
pub mod decode;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod morse;
pub mod search;
pub mod testing;
pub mod transform;
pub mod types;
pub mod util;
pub mod verify;

// Re-exports for public API
pub use decode::{decode, DecodeOptions, DecodeReport};
pub use dictionary::Dictionary;
pub use error::DecodeError;
pub use index::{
    build_index, build_index_checked, IndexStats, MatchIndex, MatchIndexBuilder,
};
pub use search::{
    enumerate, Collected, Enumerator, Outcome, ResultCollector, SearchBudget, StopReason,
};
pub use transform::{Transformation, Variant};
pub use types::{Match, Puzzle, Solution, Tiling, DEFAULT_SEPARATOR};
pub use util::find_all;
pub use verify::Ciphertext;
