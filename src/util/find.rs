// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Overlapping substring search.
//!
//! `str::match_indices` skips past each hit, which loses shifted occurrences:
//! "..." appears three times in ".....", not once. [`find_all`] resumes one
//! character after every hit instead.
//!
//! Offsets are **character offsets**. Validated ciphertexts are ASCII, where
//! character and byte offsets coincide, but the lenient builder accepts any
//! string, so non-ASCII input goes through a byte → char table.

/// Pre-computed byte-to-character offset mapping for a text.
struct CharOffsets {
    /// byte_to_char[b] = index of the character starting at byte b
    byte_to_char: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        let mut byte_to_char = vec![0; text.len() + 1];
        let mut count = 0;
        for (byte, _) in text.char_indices() {
            byte_to_char[byte] = count;
            count += 1;
        }
        byte_to_char[text.len()] = count;
        Self { byte_to_char }
    }

    fn char_at(&self, byte: usize) -> usize {
        self.byte_to_char[byte]
    }
}

/// Every character offset at which `needle` begins inside `haystack`,
/// including overlapping occurrences, in ascending order.
///
/// An empty needle or haystack has no occurrences.
pub fn find_all(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() || haystack.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let offsets = (!haystack.is_ascii()).then(|| CharOffsets::new(haystack));
    let mut hits = Vec::new();
    let mut from = 0;

    while let Some(found) = haystack[from..].find(needle) {
        let byte = from + found;
        hits.push(offsets.as_ref().map_or(byte, |o| o.char_at(byte)));

        // Advance by one character, not by the needle length
        let step = haystack[byte..].chars().next().map_or(1, char::len_utf8);
        from = byte + step;
        if from >= haystack.len() {
            break;
        }
    }

    hits
}
