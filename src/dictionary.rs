// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word lists.
//!
//! A dictionary is an ordered, de-duplicated set of words. Ordering matters
//! only for reproducibility: the index re-sorts candidates anyway, so the
//! order words were loaded in never changes the results.

use crate::error::DecodeError;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any list of words. Surrounding whitespace is trimmed and
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        dictionary.extend(words);
        dictionary
    }

    /// Parse a newline-separated word list.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Load and merge several word-list files.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, DecodeError> {
        let mut dictionary = Self::new();
        for path in paths {
            let path = path.as_ref();
            let text = fs::read_to_string(path).map_err(|source| DecodeError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let before = dictionary.len();
            dictionary.extend(text.lines());
            debug!(
                path = %path.display(),
                added = dictionary.len() - before,
                "loaded word list"
            );
        }
        debug!(samples = ?dictionary.samples(20), total = dictionary.len(), "dictionary ready");
        Ok(dictionary)
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_string());
            }
        }
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty() && self.words.insert(word.to_string())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Up to `count` words spread evenly across the dictionary, for logs.
    pub fn samples(&self, count: usize) -> Vec<&str> {
        if self.words.is_empty() || count == 0 {
            return Vec::new();
        }
        let stride = (self.words.len() / count).max(1);
        self.iter().step_by(stride).take(count).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::collections::btree_set::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter().map(String::as_str as fn(&String) -> &str)
    }
}
