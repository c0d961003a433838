// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The full decode pipeline: dictionary + puzzles → one report per
//! (puzzle, transformation) pair.
//!
//! Every stage is an ordinary call: validate, encode, index, enumerate,
//! collect. Input is validated for every puzzle before any search starts, so
//! a typo in the third ciphertext fails the run immediately instead of after
//! the first two have been searched.
//!
//! Pairs share nothing mutable. Each one builds its own index and walks it
//! with its own stack, which is what makes the parallel path trivial: rayon
//! maps over pairs and collects in order, so report order never depends on
//! scheduling.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Limits;
use crate::dictionary::Dictionary;
use crate::error::DecodeError;
use crate::index::{IndexStats, MatchIndexBuilder};
use crate::search::{Outcome, ResultCollector, SearchBudget};
use crate::transform::Transformation;
use crate::types::{Puzzle, Solution, DEFAULT_SEPARATOR};
use crate::verify::Ciphertext;

/// Knobs for a decode run. Node, time and result limits apply to each pair
/// separately; the cancellation flag stops every pair at once.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub max_results: Option<usize>,
    pub max_nodes: Option<u64>,
    pub timeout: Option<Duration>,
    pub separator: String,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            max_nodes: None,
            timeout: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            cancel: None,
        }
    }
}

impl DecodeOptions {
    pub fn from_limits(limits: &Limits) -> Self {
        Self {
            max_results: limits.max_results,
            max_nodes: limits.max_nodes,
            timeout: limits.timeout(),
            ..Self::default()
        }
    }

    /// A fresh budget for one pair. The deadline starts now.
    fn budget(&self) -> SearchBudget {
        let mut budget = SearchBudget::unlimited();
        if let Some(max_nodes) = self.max_nodes {
            budget = budget.with_max_nodes(max_nodes);
        }
        if let Some(timeout) = self.timeout {
            budget = budget.with_timeout(timeout);
        }
        if let Some(flag) = &self.cancel {
            budget = budget.with_cancel_flag(flag.clone());
        }
        budget
    }

    fn collector(&self) -> ResultCollector {
        ResultCollector::new()
            .with_optional_limit(self.max_results)
            .with_separator(self.separator.clone())
    }
}

/// Everything found for one (puzzle, transformation) pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeReport {
    pub puzzle: Puzzle,
    pub transformation: &'static str,
    pub index: IndexStats,
    pub solutions: Vec<Solution>,
    pub outcome: Outcome,
    pub nodes_visited: u64,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl DecodeReport {
    pub fn is_truncated(&self) -> bool {
        self.outcome.is_truncated()
    }
}

/// Reject an empty dictionary or any malformed ciphertext.
pub fn validate(dictionary: &Dictionary, puzzles: &[Puzzle]) -> Result<(), DecodeError> {
    if dictionary.is_empty() {
        return Err(DecodeError::EmptyDictionary);
    }
    for puzzle in puzzles {
        Ciphertext::new(&puzzle.ciphertext)?;
    }
    Ok(())
}

/// Decode every puzzle under every transformation.
///
/// Reports come back puzzle-major: all transformations for the first puzzle,
/// then all for the second, each group in the order `transformations` lists.
pub fn decode(
    dictionary: &Dictionary,
    puzzles: &[Puzzle],
    transformations: &[Transformation],
    options: &DecodeOptions,
) -> Result<Vec<DecodeReport>, DecodeError> {
    let (builders, pairs) = prepare(dictionary, puzzles, transformations)?;

    #[cfg(feature = "parallel")]
    let reports = pairs
        .par_iter()
        .map(|&(p, t)| run_pair(&puzzles[p], &transformations[t], &builders[t], options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let reports = pairs
        .iter()
        .map(|&(p, t)| run_pair(&puzzles[p], &transformations[t], &builders[t], options))
        .collect();

    Ok(reports)
}

/// [`decode`] with a progress bar ticked once per finished pair.
#[cfg(feature = "parallel")]
pub fn decode_with_progress(
    dictionary: &Dictionary,
    puzzles: &[Puzzle],
    transformations: &[Transformation],
    options: &DecodeOptions,
    progress: &ProgressBar,
) -> Result<Vec<DecodeReport>, DecodeError> {
    let (builders, pairs) = prepare(dictionary, puzzles, transformations)?;
    progress.set_length(pairs.len() as u64);

    let reports = pairs
        .par_iter()
        .map(|&(p, t)| {
            let report = run_pair(&puzzles[p], &transformations[t], &builders[t], options);
            progress.inc(1);
            report
        })
        .collect();

    Ok(reports)
}

type Pair = (usize, usize);

/// Validate, encode the dictionary once per transformation, and list pairs.
fn prepare(
    dictionary: &Dictionary,
    puzzles: &[Puzzle],
    transformations: &[Transformation],
) -> Result<(Vec<MatchIndexBuilder>, Vec<Pair>), DecodeError> {
    validate(dictionary, puzzles)?;

    let builders: Vec<MatchIndexBuilder> = transformations
        .iter()
        .map(|t| MatchIndexBuilder::for_transformation(dictionary, t))
        .collect();

    let pairs: Vec<Pair> = (0..puzzles.len())
        .flat_map(|p| (0..transformations.len()).map(move |t| (p, t)))
        .collect();

    debug!(
        words = dictionary.len(),
        puzzles = puzzles.len(),
        transformations = transformations.len(),
        "decode prepared"
    );
    Ok((builders, pairs))
}

fn run_pair(
    puzzle: &Puzzle,
    transformation: &Transformation,
    builder: &MatchIndexBuilder,
    options: &DecodeOptions,
) -> DecodeReport {
    let started = Instant::now();
    let index = builder.build(&puzzle.ciphertext);
    let collected = options.collector().collect(index.tilings(options.budget()));
    let elapsed = started.elapsed();

    info!(
        puzzle = %puzzle.description,
        transformation = transformation.label(),
        solutions = collected.solutions.len(),
        nodes = collected.nodes_visited,
        truncated = collected.is_truncated(),
        elapsed_ms = elapsed.as_millis() as u64,
        "decoded"
    );

    DecodeReport {
        puzzle: puzzle.clone(),
        transformation: transformation.label(),
        index: index.stats(),
        solutions: collected.solutions,
        outcome: collected.outcome,
        nodes_visited: collected.nodes_visited,
        elapsed,
    }
}
