// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a tiling stream into a result list.
//!
//! The collector pulls one tiling at a time, so a result limit actually limits
//! work: the enumerator never runs ahead of what the caller asked for. The
//! outcome distinguishes "nothing exists" from "stopped early", because an
//! empty list means something different in each case.

use serde::Serialize;

use super::{Enumerator, StopReason};
use crate::types::{Solution, DEFAULT_SEPARATOR};

/// How a collection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status", content = "reason")]
pub enum Outcome {
    /// The search space was exhausted and at least one tiling exists.
    Solved,
    /// The search space was exhausted and no tiling exists.
    NoSolution,
    /// The search stopped early; more tilings may exist.
    Truncated(StopReason),
}

impl Outcome {
    pub fn is_truncated(&self) -> bool {
        matches!(self, Outcome::Truncated(_))
    }
}

/// Solutions plus how the search ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collected {
    pub solutions: Vec<Solution>,
    pub outcome: Outcome,
    pub nodes_visited: u64,
}

impl Collected {
    pub fn is_truncated(&self) -> bool {
        self.outcome.is_truncated()
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// Collects tilings into [`Solution`]s, optionally stopping at a limit.
#[derive(Debug, Clone)]
pub struct ResultCollector {
    limit: Option<usize>,
    separator: String,
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self {
            limit: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` solutions.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_optional_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Separator between words in each solution's sentence.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Drain `tilings` into solutions.
    ///
    /// When the limit is reached, the enumerator is asked for one more tiling:
    /// if it has one, the outcome is `Truncated(ResultLimit)`; if it runs dry,
    /// the result is complete.
    pub fn collect(&self, mut tilings: Enumerator<'_>) -> Collected {
        let mut solutions = Vec::new();
        let mut limited = false;

        loop {
            if self.limit.is_some_and(|limit| solutions.len() >= limit) {
                limited = tilings.next().is_some();
                break;
            }
            match tilings.next() {
                Some(tiling) => solutions.push(Solution::from_tiling(&tiling, &self.separator)),
                None => break,
            }
        }

        let outcome = if limited {
            Outcome::Truncated(StopReason::ResultLimit)
        } else if let Some(reason) = tilings.stop_reason() {
            Outcome::Truncated(reason)
        } else if solutions.is_empty() {
            Outcome::NoSolution
        } else {
            Outcome::Solved
        };

        Collected {
            solutions,
            outcome,
            nodes_visited: tilings.nodes_visited(),
        }
    }
}
