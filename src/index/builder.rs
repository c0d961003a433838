// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match index construction.
//!
//! Encoding a word is the expensive part of a lookup, and the same dictionary
//! is usually searched against several ciphertexts. The builder therefore
//! encodes every word exactly once, up front, and then only runs substring
//! searches per ciphertext. It is immutable after construction, so one builder
//! per transformation can be shared across worker threads.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::MatchIndex;
use crate::dictionary::Dictionary;
use crate::error::DecodeError;
use crate::transform::Transformation;
use crate::types::Match;
use crate::util::find_all;
use crate::verify::Ciphertext;

/// A dictionary word with its cached encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedWord {
    pub word: Arc<str>,
    pub code: String,
    /// Encoding length in code symbols.
    pub code_len: usize,
}

/// Encodes a dictionary once and indexes it against any number of ciphertexts.
#[derive(Debug, Clone)]
pub struct MatchIndexBuilder {
    entries: Vec<EncodedWord>,
    /// Number of distinct input words, including ones that encode to nothing.
    word_count: usize,
}

impl MatchIndexBuilder {
    /// Encode every word with `encode`.
    ///
    /// Duplicate words are collapsed. Words whose encoding is empty are kept
    /// out of the index entirely: a zero-length match would never advance a
    /// search.
    pub fn new<I, S, F>(words: I, encode: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        let mut encoded: BTreeMap<Arc<str>, String> = BTreeMap::new();
        for word in words {
            let word = word.as_ref();
            if !encoded.contains_key(word) {
                encoded.insert(Arc::from(word), encode(word));
            }
        }

        let word_count = encoded.len();
        let entries: Vec<EncodedWord> = encoded
            .into_iter()
            .filter(|(_, code)| !code.is_empty())
            .map(|(word, code)| EncodedWord {
                code_len: code.chars().count(),
                word,
                code,
            })
            .collect();

        debug!(
            words = word_count,
            encodable = entries.len(),
            "encoded dictionary"
        );

        Self {
            entries,
            word_count,
        }
    }

    /// Encode a dictionary under one of the transformations.
    pub fn for_transformation(dictionary: &Dictionary, transformation: &Transformation) -> Self {
        Self::new(dictionary.iter(), |word| transformation.encode(word))
    }

    /// Cached encodings, sorted by word.
    pub fn entries(&self) -> &[EncodedWord] {
        &self.entries
    }

    /// Number of distinct words the builder was given.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Index every occurrence, overlapping ones included, of every encoded
    /// word in `ciphertext`.
    ///
    /// Never fails: an empty dictionary or ciphertext gives an empty index.
    pub fn build(&self, ciphertext: &str) -> MatchIndex {
        let len = ciphertext.chars().count();
        let mut matches = Vec::new();
        for entry in &self.entries {
            if entry.code_len > len {
                continue;
            }
            matches.extend(
                find_all(ciphertext, &entry.code)
                    .into_iter()
                    .map(|start| Match::new(entry.word.clone(), start, entry.code_len)),
            );
        }

        let index = MatchIndex::from_matches(len, matches);
        debug!(
            ciphertext_len = len,
            matches = index.total_matches(),
            "built match index"
        );
        index
    }

    /// Like [`build`](Self::build), but rejects bad input first: an empty
    /// dictionary or a ciphertext with symbols other than `.` and `-`.
    pub fn build_checked(&self, ciphertext: &str) -> Result<MatchIndex, DecodeError> {
        if self.word_count == 0 {
            return Err(DecodeError::EmptyDictionary);
        }
        let ciphertext = Ciphertext::new(ciphertext)?;
        Ok(self.build(ciphertext.as_str()))
    }
}

/// One-shot index construction: encode `dictionary` with `encode` and index it
/// against `ciphertext`.
pub fn build_index<I, S, F>(dictionary: I, encode: F, ciphertext: &str) -> MatchIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    MatchIndexBuilder::new(dictionary, encode).build(ciphertext)
}

/// One-shot index construction with input validation.
pub fn build_index_checked<I, S, F>(
    dictionary: I,
    encode: F,
    ciphertext: &str,
) -> Result<MatchIndex, DecodeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    MatchIndexBuilder::new(dictionary, encode).build_checked(ciphertext)
}
