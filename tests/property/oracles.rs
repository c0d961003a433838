//! Reference oracles for differential testing.
//!
//! These are simple, obviously-correct implementations. They serve as ground
//! truth for the indexed, pruned, budgeted code paths.

use proptest::prelude::*;

use crate::common::brute_force_sentences;
use dotdash::{build_index, find_all, MatchIndex};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Every start offset of `needle` in `haystack`, by checking each offset.
pub fn oracle_find_all(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    let hay: Vec<char> = haystack.chars().collect();
    let pat: Vec<char> = needle.chars().collect();
    (0..hay.len())
        .filter(|&i| hay[i..].starts_with(&pat))
        .collect()
}

/// Tilings by recursing directly on the ciphertext and the codes, with no
/// index at all.
pub fn oracle_tilings(codes: &[(String, String)], ciphertext: &str) -> Vec<String> {
    fn walk(
        codes: &[(String, String)],
        rest: &str,
        path: &mut Vec<String>,
        out: &mut Vec<String>,
    ) {
        if rest.is_empty() {
            if !path.is_empty() {
                out.push(path.join(" "));
            }
            return;
        }
        for (word, code) in codes {
            if !code.is_empty() && rest.starts_with(code.as_str()) {
                path.push(word.clone());
                walk(codes, &rest[code.len()..], path, out);
                path.pop();
            }
        }
    }

    let mut out = Vec::new();
    walk(codes, ciphertext, &mut Vec::new(), &mut out);
    out.sort();
    out
}

// =============================================================================
// STRATEGIES
// =============================================================================

pub fn code_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[.-]{1,3}").unwrap()
}

/// Distinct words, each with a random code. Codes may collide.
pub fn codebook_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-f]{1,2}", code_strategy(), 1..6)
        .prop_map(|m| m.into_iter().collect())
}

pub fn ciphertext_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[.-]{0,10}").unwrap()
}

pub fn index_for(codes: &[(String, String)], ciphertext: &str) -> MatchIndex {
    build_index(
        codes.iter().map(|(w, _)| w.as_str()),
        |word| {
            codes
                .iter()
                .find(|(w, _)| w == word)
                .map(|(_, c)| c.clone())
                .unwrap_or_default()
        },
        ciphertext,
    )
}

// =============================================================================
// DIFFERENTIAL TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_find_all_matches_oracle(
        haystack in ciphertext_strategy(),
        needle in code_strategy(),
    ) {
        prop_assert_eq!(find_all(&haystack, &needle), oracle_find_all(&haystack, &needle));
    }

    #[test]
    fn prop_enumeration_matches_oracle(
        codes in codebook_strategy(),
        ciphertext in ciphertext_strategy(),
    ) {
        let index = index_for(&codes, &ciphertext);
        let mut found = crate::common::sentences(&index);
        found.sort();
        prop_assert_eq!(found, oracle_tilings(&codes, &ciphertext));
    }

    #[test]
    fn prop_pruned_order_matches_unpruned(
        codes in codebook_strategy(),
        ciphertext in ciphertext_strategy(),
    ) {
        let index = index_for(&codes, &ciphertext);
        prop_assert_eq!(crate::common::sentences(&index), brute_force_sentences(&index));
    }
}
