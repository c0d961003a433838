//! The two long puzzles, which differ only in their final symbol.

use crate::common::{DASH_AT_END, DOT_AT_END};
use dotdash::{
    decode, morse, Ciphertext, DecodeOptions, Dictionary, MatchIndexBuilder, Outcome, Puzzle,
    StopReason, Transformation,
};

fn letters() -> Dictionary {
    Dictionary::from_words(('a'..='z').map(|c| c.to_string()))
}

#[test]
fn test_puzzles_are_valid_ciphertexts() {
    assert_eq!(Ciphertext::new(DASH_AT_END).unwrap().len(), 76);
    assert_eq!(Ciphertext::new(DOT_AT_END).unwrap().len(), 76);
    assert_eq!(&DASH_AT_END[..75], &DOT_AT_END[..75]);
}

#[test]
fn test_letters_tile_both_puzzles_under_every_transformation() {
    let dictionary = letters();
    for t in Transformation::all() {
        let builder = MatchIndexBuilder::for_transformation(&dictionary, &t);
        for ciphertext in [DASH_AT_END, DOT_AT_END] {
            let index = builder.build_checked(ciphertext).unwrap();
            assert_eq!(index.stats().first_uncovered, None, "{}", t.label());
            assert!(index.count_tilings() > 1_000_000);
        }
    }
}

#[test]
fn test_capped_decode_of_long_puzzles() {
    let puzzles = vec![
        Puzzle::new(DASH_AT_END, "dash at end"),
        Puzzle::new(DOT_AT_END, "dot at end"),
    ];
    let options = DecodeOptions {
        max_results: Some(3),
        ..DecodeOptions::default()
    };
    let reports = decode(&letters(), &puzzles, &Transformation::all(), &options).unwrap();

    assert_eq!(reports.len(), 8);
    for report in &reports {
        assert_eq!(report.solutions.len(), 3);
        assert_eq!(report.outcome, Outcome::Truncated(StopReason::ResultLimit));
    }
    // first forward reading uses only the shortest codes, e and t
    let first = &reports[0].solutions[0];
    assert!(first.words.iter().all(|w| w == "e" || w == "t"));
    assert_eq!(morse::encode(&first.words.concat()), DASH_AT_END);
}

#[test]
fn test_node_budget_stops_long_puzzle() {
    let puzzles = vec![Puzzle::new(DOT_AT_END, "dot at end")];
    let options = DecodeOptions {
        max_nodes: Some(10),
        ..DecodeOptions::default()
    };
    let reports = decode(
        &letters(),
        &puzzles,
        &[Transformation::canonical(dotdash::Variant::Forward)],
        &options,
    )
    .unwrap();
    assert_eq!(reports[0].outcome, Outcome::Truncated(StopReason::NodeBudget));
    assert_eq!(reports[0].nodes_visited, 10);
    assert!(reports[0].solutions.is_empty());
}
