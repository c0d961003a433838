//! Result collection and outcome reporting.

use crate::common::index_with_codes;
use dotdash::{Outcome, ResultCollector, SearchBudget, StopReason};

fn dots(n: usize) -> String {
    ".".repeat(n)
}

#[test]
fn test_solved_collects_all() {
    let index = index_with_codes(&[("e", "."), ("i", "..")], &dots(4));
    let found = ResultCollector::new().collect(index.tilings(SearchBudget::unlimited()));
    assert_eq!(found.outcome, Outcome::Solved);
    assert_eq!(found.len() as u128, index.count_tilings());
    assert_eq!(found.solutions[0].sentence, "e e e e");
    assert_eq!(found.solutions[0].words, vec!["e", "e", "e", "e"]);
}

#[test]
fn test_no_solution_outcome() {
    let index = index_with_codes(&[("a", "..")], ".");
    let found = ResultCollector::new().collect(index.tilings(SearchBudget::unlimited()));
    assert_eq!(found.outcome, Outcome::NoSolution);
    assert!(found.is_empty());
    assert!(!found.is_truncated());
}

#[test]
fn test_node_budget_one_sets_truncated_flag() {
    let index = index_with_codes(&[("e", "."), ("i", "..")], &dots(3));
    let found = ResultCollector::new()
        .collect(index.tilings(SearchBudget::unlimited().with_max_nodes(1)));
    assert!(found.len() <= 1);
    assert_eq!(found.outcome, Outcome::Truncated(StopReason::NodeBudget));
}

#[test]
fn test_result_limit_exact_count_is_not_truncated() {
    // ".." has exactly two tilings
    let index = index_with_codes(&[("e", "."), ("i", "..")], &dots(2));
    let found = ResultCollector::new()
        .with_limit(2)
        .collect(index.tilings(SearchBudget::unlimited()));
    assert_eq!(found.len(), 2);
    assert_eq!(found.outcome, Outcome::Solved);
}

#[test]
fn test_result_limit_below_count_is_truncated() {
    let index = index_with_codes(&[("e", "."), ("i", "..")], &dots(5));
    let found = ResultCollector::new()
        .with_limit(3)
        .collect(index.tilings(SearchBudget::unlimited()));
    assert_eq!(found.len(), 3);
    assert_eq!(found.outcome, Outcome::Truncated(StopReason::ResultLimit));
}

#[test]
fn test_custom_separator() {
    let index = index_with_codes(&[("a", "."), ("b", "-")], ".-");
    let found = ResultCollector::new()
        .with_separator("_")
        .collect(index.tilings(SearchBudget::unlimited()));
    assert_eq!(found.solutions[0].sentence, "a_b");
}
