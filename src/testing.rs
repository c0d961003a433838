// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::collections::HashMap;

use crate::index::{compare_candidates, MatchIndex, MatchIndexBuilder};
use crate::search::SearchBudget;
use crate::types::{Match, DEFAULT_SEPARATOR};

/// Build an index from a fixed word → code table instead of real Morse.
///
/// Lets tests pick codes that make a property easy to see, e.g. `a → "."`,
/// `b → "-"`.
pub fn index_with_codes(codes: &[(&str, &str)], ciphertext: &str) -> MatchIndex {
    let table: HashMap<&str, &str> = codes.iter().copied().collect();
    MatchIndexBuilder::new(codes.iter().map(|(word, _)| *word), |word| {
        table.get(word).map(|code| code.to_string()).unwrap_or_default()
    })
    .build(ciphertext)
}

/// Build an index directly from `(word, start, len)` triples.
pub fn index_from_matches(ciphertext_len: usize, matches: &[(&str, usize, usize)]) -> MatchIndex {
    MatchIndex::from_matches(
        ciphertext_len,
        matches
            .iter()
            .map(|&(word, start, len)| Match::new(word, start, len)),
    )
}

/// Every tiling of `index` as a space-joined sentence, in enumeration order.
pub fn sentences(index: &MatchIndex) -> Vec<String> {
    index
        .tilings(SearchBudget::unlimited())
        .map(|t| t.sentence(DEFAULT_SEPARATOR))
        .collect()
}

/// Reference tiler: plain recursion over the index with no pruning and no
/// budget. Slow, but obviously correct, so the enumerator can be checked
/// against it.
pub fn brute_force_sentences(index: &MatchIndex) -> Vec<String> {
    fn walk(index: &MatchIndex, position: usize, path: &mut Vec<String>, out: &mut Vec<String>) {
        let len = index.ciphertext_len();
        if position == len {
            if !path.is_empty() {
                out.push(path.join(DEFAULT_SEPARATOR));
            }
            return;
        }
        let mut candidates: Vec<&Match> = index.iter().filter(|m| m.start == position).collect();
        candidates.sort_by(|a, b| compare_candidates(a, b));
        for m in candidates {
            path.push(m.word.to_string());
            walk(index, m.end(), path, out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    walk(index, 0, &mut Vec::new(), &mut out);
    out
}
