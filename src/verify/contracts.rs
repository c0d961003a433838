// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the search.
//!
//! Debug-mode assertions that catch algorithmic errors while tests run and
//! compile away in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_match_in_bounds`     | `len > 0` and `end <= ciphertext_len`           |
//! | `check_index_well_formed`   | bucket position, bounds, canonical order        |
//! | `check_tiling_covers`       | starts at 0, no gaps, no overlaps, ends at len  |

use crate::index::{compare_candidates, MatchIndex};
use crate::types::{Match, Tiling};
use std::cmp::Ordering;

// ============================================================================
// MATCH CONTRACTS
// ============================================================================

/// Check that a match covers at least one symbol and stays inside the
/// ciphertext.
///
/// # Panics (debug builds only)
/// Panics if `len == 0` or `end > ciphertext_len`.
#[inline]
pub fn check_match_in_bounds(m: &Match, ciphertext_len: usize) {
    debug_assert!(
        m.len > 0,
        "Contract violation: Match.InBounds - '{}' at {} has zero length",
        m.word,
        m.start
    );
    debug_assert!(
        m.end() <= ciphertext_len,
        "Contract violation: Match.InBounds - '{}' ends at {} > ciphertext_len {}",
        m.word,
        m.end(),
        ciphertext_len
    );
}

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check the three index invariants: every match sits in the bucket of its
/// start, stays in bounds, and buckets are strictly increasing in canonical
/// order.
///
/// # Panics (debug builds only)
/// Panics on the first violated invariant.
#[inline]
pub fn check_index_well_formed(index: &MatchIndex) {
    if !cfg!(debug_assertions) {
        return;
    }
    let len = index.ciphertext_len();
    for position in 0..len {
        let bucket = index.at(position);
        for m in bucket {
            debug_assert_eq!(
                m.start, position,
                "Contract violation: MatchIndex.BucketPosition - '{}' starts at {} but is filed under {}",
                m.word, m.start, position
            );
            check_match_in_bounds(m, len);
        }
        for pair in bucket.windows(2) {
            debug_assert!(
                compare_candidates(&pair[0], &pair[1]) == Ordering::Less,
                "Contract violation: MatchIndex.CanonicalOrder - '{}' before '{}' at {}",
                pair[0].word,
                pair[1].word,
                position
            );
        }
    }
}

// ============================================================================
// TILING CONTRACTS
// ============================================================================

/// Check that a tiling is a complete cover of `0..ciphertext_len`.
///
/// # Panics (debug builds only)
/// Panics if the first match does not start at 0, if consecutive matches
/// leave a gap or overlap, or if the last match does not end at
/// `ciphertext_len`.
#[inline]
pub fn check_tiling_covers(tiling: &Tiling, ciphertext_len: usize) {
    let mut cursor = 0;
    for (i, m) in tiling.matches().iter().enumerate() {
        debug_assert_eq!(
            m.start, cursor,
            "Contract violation: Tiling.Contiguous - match {} ('{}') starts at {} but previous ended at {}",
            i, m.word, m.start, cursor
        );
        check_match_in_bounds(m, ciphertext_len);
        cursor = m.end();
    }
    debug_assert!(
        !tiling.is_empty() && cursor == ciphertext_len,
        "Contract violation: Tiling.Complete - covers 0..{} of 0..{}",
        cursor,
        ciphertext_len
    );
}
