//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from dotdash::testing
pub use dotdash::testing::{brute_force_sentences, index_from_matches, index_with_codes, sentences};

// ============================================================================
// PUZZLES
// ============================================================================

/// Ciphertext whose last symbol is a dash.
pub const DASH_AT_END: &str =
    "..-.---.-..-...--..--.-.--...--.-..-.-.---...--..-.--.-...--.-.---..-..--..-";

/// Same ciphertext with the last symbol flipped to a dot.
pub const DOT_AT_END: &str =
    "..-.---.-..-...--..--.-.--...--.-..-.-.---...--..-.--.-...--.-.---..-..--...";

/// Two-symbol alphabet used throughout: `a` is a dot, `b` is a dash.
pub const DOT_DASH: &[(&str, &str)] = &[("a", "."), ("b", "-")];

// ============================================================================
// WORD LISTS
// ============================================================================

/// Write `words` one per line to `dir/name` and return the path.
pub fn write_wordlist(dir: &Path, name: &str, words: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = words.join("\n");
    content.push('\n');
    fs::write(&path, content).expect("write word list");
    path
}

/// Write a manifest to `dir/manifest.json` and return the path.
pub fn write_manifest(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("manifest.json");
    fs::write(&path, json).expect("write manifest");
    path
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that every tiling of `index` covers it exactly: contiguous, starting
/// at zero, ending at the ciphertext length.
pub fn assert_tilings_cover(index: &dotdash::MatchIndex) {
    for tiling in index.tilings(dotdash::SearchBudget::unlimited()) {
        let mut position = 0;
        for m in tiling.matches() {
            assert_eq!(m.start, position, "gap or overlap before {}", m);
            position = m.end();
        }
        assert_eq!(position, index.ciphertext_len(), "tiling stops short");
    }
}
