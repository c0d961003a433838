// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match index: every dictionary hit inside one ciphertext, bucketed by
//! start position.
//!
//! One index exists per (transformation, ciphertext) pair. It is an
//! array-indexed table, not a map: position `p` lives at `buckets[p]`, and
//! positions nothing matches at hold an empty bucket rather than a placeholder
//! entry.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BUCKET_POSITION**: every match in `buckets[p]` has `start == p`
//! 2. **IN_BOUNDS**: every match has `len > 0` and `end() <= ciphertext_len`
//! 3. **CANONICAL_ORDER**: each bucket is sorted by (length, word) with no
//!    duplicates, which fixes the order tilings are enumerated in

mod builder;

pub use builder::*;

use crate::search::{Enumerator, SearchBudget};
use crate::types::Match;
use crate::verify::contracts::check_index_well_formed;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Canonical candidate order at one position: shorter matches first, then
/// lexical word order.
pub fn compare_candidates(a: &Match, b: &Match) -> Ordering {
    a.len.cmp(&b.len).then_with(|| a.word.cmp(&b.word))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchIndex {
    buckets: Vec<Vec<Match>>,
}

impl MatchIndex {
    /// Bucket and sort a set of matches.
    ///
    /// Matches that start or end outside `0..=ciphertext_len`, or that cover
    /// nothing, are dropped.
    pub fn from_matches<I>(ciphertext_len: usize, matches: I) -> Self
    where
        I: IntoIterator<Item = Match>,
    {
        let mut buckets: Vec<Vec<Match>> = vec![Vec::new(); ciphertext_len];
        for m in matches {
            if m.len == 0 || m.end() > ciphertext_len {
                continue;
            }
            buckets[m.start].push(m);
        }
        for bucket in &mut buckets {
            bucket.sort_by(compare_candidates);
            bucket.dedup();
        }

        let index = Self { buckets };
        check_index_well_formed(&index);
        index
    }

    /// Number of code symbols in the ciphertext this index was built for.
    pub fn ciphertext_len(&self) -> usize {
        self.buckets.len()
    }

    /// Matches starting at `position`, in canonical order. Empty when nothing
    /// starts there or `position` is out of range.
    pub fn at(&self, position: usize) -> &[Match] {
        self.buckets.get(position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All matches, position-major.
    pub fn iter(&self) -> impl Iterator<Item = &Match> + '_ {
        self.buckets.iter().flatten()
    }

    pub fn total_matches(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// True when no word matched anywhere.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Enumerate complete tilings under `budget`.
    pub fn tilings(&self, budget: SearchBudget) -> Enumerator<'_> {
        Enumerator::new(self, budget)
    }

    /// `viable[p]` is true when some run of matches leads from `p` to the end
    /// of the ciphertext. `viable[len]` is always true.
    pub fn viable_positions(&self) -> Vec<bool> {
        let len = self.ciphertext_len();
        let mut viable = vec![false; len + 1];
        viable[len] = true;
        for p in (0..len).rev() {
            viable[p] = self.buckets[p].iter().any(|m| viable[m.end()]);
        }
        viable
    }

    /// Number of complete tilings, counted without enumerating them.
    ///
    /// Saturates at `u128::MAX`. An empty ciphertext has no tilings.
    pub fn count_tilings(&self) -> u128 {
        let len = self.ciphertext_len();
        if len == 0 {
            return 0;
        }
        let mut ways = vec![0u128; len + 1];
        ways[len] = 1;
        for p in (0..len).rev() {
            ways[p] = self.buckets[p]
                .iter()
                .fold(0u128, |acc, m| acc.saturating_add(ways[m.end()]));
        }
        ways[0]
    }

    /// The same matches seen from the other end of the ciphertext.
    ///
    /// A match covering `start..end` becomes one covering
    /// `len - end..len - start`, so every tiling of the mirrored index is a
    /// tiling of this one read backwards.
    pub fn mirrored(&self) -> Self {
        let len = self.ciphertext_len();
        let flipped = self
            .iter()
            .map(|m| Match::new(m.word.clone(), len - m.end(), m.len));
        Self::from_matches(len, flipped)
    }

    /// Summary numbers for inspection and logging.
    pub fn stats(&self) -> IndexStats {
        let mut words = BTreeSet::new();
        let mut covered = 0;
        let mut max_branching = 0;
        for bucket in &self.buckets {
            if !bucket.is_empty() {
                covered += 1;
            }
            max_branching = max_branching.max(bucket.len());
            words.extend(bucket.iter().map(|m| m.word.clone()));
        }
        IndexStats {
            positions: self.ciphertext_len(),
            covered_positions: covered,
            total_matches: self.total_matches(),
            distinct_words: words.len(),
            max_branching,
            first_uncovered: self.buckets.iter().position(Vec::is_empty),
        }
    }
}

/// Shape of a [`MatchIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub positions: usize,
    /// Positions at which at least one word starts.
    pub covered_positions: usize,
    pub total_matches: usize,
    pub distinct_words: usize,
    /// Largest number of candidates at any single position.
    pub max_branching: usize,
    /// First position no word starts at, if any.
    pub first_uncovered: Option<usize>,
}
