// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared by the index, the search and the pipeline.
//!
//! A [`Match`] is one occurrence of one word's encoding inside a ciphertext.
//! A [`Tiling`] is a run of matches that covers the ciphertext end to end.
//! A [`Solution`] is what callers actually look at: the words and the
//! sentence they spell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Separator placed between words when a tiling is rendered as a sentence.
pub const DEFAULT_SEPARATOR: &str = " ";

/// One occurrence of a dictionary word's encoded form in the ciphertext.
///
/// `len` is always positive and equals the encoded length of `word` under the
/// transformation that produced the match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// Shared so that every occurrence of a word points at the same allocation.
    pub word: Arc<str>,
    /// Character offset of the first code symbol.
    pub start: usize,
    /// Number of code symbols covered.
    pub len: usize,
}

impl Match {
    pub fn new(word: impl Into<Arc<str>>, start: usize, len: usize) -> Self {
        Self {
            word: word.into(),
            start,
            len,
        }
    }

    /// Exclusive end offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.word, self.start, self.end())
    }
}

/// A complete, gap-free, non-overlapping cover of a ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Tiling {
    matches: Vec<Match>,
}

impl Tiling {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Words in reading order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.matches.iter().map(|m| &*m.word)
    }

    /// Offset just past the last match (0 for an empty tiling).
    pub fn end(&self) -> usize {
        self.matches.last().map_or(0, Match::end)
    }

    /// Check that the matches start at 0, chain without gaps and end at
    /// `ciphertext_len`.
    pub fn covers(&self, ciphertext_len: usize) -> bool {
        let mut cursor = 0;
        for m in &self.matches {
            if m.start != cursor || m.len == 0 {
                return false;
            }
            cursor = m.end();
        }
        !self.matches.is_empty() && cursor == ciphertext_len
    }

    /// Join the words with `separator`.
    pub fn sentence(&self, separator: &str) -> String {
        self.words().collect::<Vec<_>>().join(separator)
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

/// A tiling as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    pub words: Vec<String>,
    pub sentence: String,
}

impl Solution {
    pub fn from_tiling(tiling: &Tiling, separator: &str) -> Self {
        Self {
            words: tiling.words().map(str::to_string).collect(),
            sentence: tiling.sentence(separator),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sentence)
    }
}

/// A ciphertext together with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub ciphertext: String,
    #[serde(default)]
    pub description: String,
}

impl Puzzle {
    pub fn new(ciphertext: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            description: description.into(),
        }
    }

    /// Length in code symbols.
    pub fn len(&self) -> usize {
        self.ciphertext.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }
}
