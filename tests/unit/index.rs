//! Match index construction through the public builder.

use crate::common::{index_with_codes, DOT_DASH};
use dotdash::{build_index, build_index_checked, morse, DecodeError, MatchIndexBuilder};

fn identity(word: &str) -> String {
    word.to_string()
}

#[test]
fn test_overlapping_occurrences_are_all_indexed() {
    let index = build_index(["..."], identity, ".....");
    let starts: Vec<usize> = index.iter().map(|m| m.start).collect();
    assert_eq!(starts, vec![0, 1, 2]);
    assert!(index.at(3).is_empty());
    assert!(index.at(4).is_empty());
}

#[test]
fn test_absent_words_leave_no_trace() {
    let index = index_with_codes(&[("a", "."), ("z", "---")], "..");
    assert!(index.iter().all(|m| &*m.word == "a"));
    assert_eq!(index.stats().distinct_words, 1);
}

#[test]
fn test_empty_inputs_give_empty_index() {
    let empty_dict: [&str; 0] = [];
    assert!(build_index(empty_dict, identity, ".-.").is_empty());
    let index = build_index(["a"], morse::encode, "");
    assert!(index.is_empty());
    assert_eq!(index.ciphertext_len(), 0);
}

#[test]
fn test_checked_build_rejects_bad_input() {
    let empty_dict: [&str; 0] = [];
    assert!(matches!(
        build_index_checked(empty_dict, identity, "."),
        Err(DecodeError::EmptyDictionary)
    ));
    assert!(matches!(
        build_index_checked(["e"], morse::encode, ".-_"),
        Err(DecodeError::InvalidCiphertext { position: 2, found: '_' })
    ));
}

#[test]
fn test_one_builder_many_ciphertexts() {
    let builder = MatchIndexBuilder::new(["e", "t", "a"], morse::encode);
    let short = builder.build(".-");
    let long = builder.build(".-.-");
    assert_eq!(short.total_matches(), 3);
    assert_eq!(long.total_matches(), 6);
}

#[test]
fn test_stats_report_first_gap() {
    let index = index_with_codes(DOT_DASH, ".x-");
    let stats = index.stats();
    assert_eq!(stats.positions, 3);
    assert_eq!(stats.covered_positions, 2);
    assert_eq!(stats.first_uncovered, Some(1));
}

#[test]
fn test_count_tilings_matches_fibonacci() {
    // "e" and "i" tile a run of n dots in fib(n + 1) ways
    let index = build_index(["e", "i"], morse::encode, "..........");
    assert_eq!(index.count_tilings(), 89);
}

#[test]
fn test_mirrored_reads_backwards() {
    let index = index_with_codes(&[("a", "."), ("bb", "--")], ".--");
    let mirrored = index.mirrored();
    let words: Vec<_> = mirrored.iter().map(|m| (&*m.word, m.start)).collect();
    assert_eq!(words, vec![("bb", 0), ("a", 2)]);
    assert_eq!(mirrored.mirrored(), index);
}
