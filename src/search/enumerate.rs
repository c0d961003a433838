// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Depth-first enumeration of tilings.
//!
//! The search walks positions left to right. At position `p` it tries every
//! match starting at `p`, in the index's canonical order, and descends to
//! `p + len`. Reaching the end of the ciphertext yields a tiling. Reaching a
//! position nothing leads on from is a dead end.
//!
//! The walk uses an explicit frame stack instead of recursion, so depth is
//! bounded by memory rather than the call stack, and the iterator can hand out
//! one tiling at a time. The path prefix is a private buffer: pushed on
//! descend, popped on backtrack, copied only when a tiling is emitted.
//!
//! Before walking, the enumerator marks which positions can still reach the
//! end. Candidates landing on a position that cannot are skipped without being
//! visited, so every node visited lies on at least one complete tiling.

use std::iter::FusedIterator;

use tracing::trace;

use super::{SearchBudget, StopReason};
use crate::index::MatchIndex;
use crate::types::{Match, Tiling};
use crate::verify::contracts::check_tiling_covers;

/// One level of the walk: a position and the next candidate to try there.
#[derive(Debug, Clone, Copy)]
struct Frame {
    position: usize,
    next: usize,
}

/// Lazy, restartable enumeration of every tiling of a [`MatchIndex`].
///
/// Each `Enumerator` is an independent traversal; building a second one over
/// the same index yields the same tilings in the same order.
#[derive(Debug)]
pub struct Enumerator<'a> {
    index: &'a MatchIndex,
    budget: SearchBudget,
    viable: Vec<bool>,
    stack: Vec<Frame>,
    path: Vec<&'a Match>,
    nodes: u64,
    emitted: u64,
    started: bool,
    finished: bool,
    stop: Option<StopReason>,
}

impl<'a> Enumerator<'a> {
    pub fn new(index: &'a MatchIndex, budget: SearchBudget) -> Self {
        Self {
            index,
            budget,
            viable: index.viable_positions(),
            stack: Vec::new(),
            path: Vec::new(),
            nodes: 0,
            emitted: 0,
            started: false,
            finished: false,
            stop: None,
        }
    }

    /// Nodes visited so far (the root counts as one).
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Tilings handed out so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Why the search stopped early, if it did.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// True once the iterator will yield nothing more, for any reason.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Account for one more node, or stop the search if the budget says no.
    fn visit(&mut self) -> bool {
        match self.budget.check(self.nodes) {
            Ok(()) => {
                self.nodes += 1;
                true
            }
            Err(reason) => {
                trace!(%reason, nodes = self.nodes, "search stopped");
                self.stop = Some(reason);
                self.finish();
                false
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.stack.clear();
        self.path.clear();
    }

    fn emit(&mut self) -> Tiling {
        let tiling = Tiling::new(self.path.iter().map(|m| (*m).clone()).collect());
        check_tiling_covers(&tiling, self.index.ciphertext_len());
        self.emitted += 1;
        trace!(words = tiling.len(), emitted = self.emitted, "tiling found");
        tiling
    }
}

impl Iterator for Enumerator<'_> {
    type Item = Tiling;

    fn next(&mut self) -> Option<Tiling> {
        if self.finished {
            return None;
        }

        let index = self.index;
        let len = index.ciphertext_len();

        if !self.started {
            self.started = true;
            // An empty ciphertext has no tilings; an unreachable end has none
            // either, and neither needs a single node visited to know it.
            if len == 0 || !self.viable[0] {
                self.finish();
                return None;
            }
            if !self.visit() {
                return None;
            }
            self.stack.push(Frame {
                position: 0,
                next: 0,
            });
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.finish();
                return None;
            };

            let candidates = index.at(frame.position);
            let Some(candidate) = candidates.get(frame.next) else {
                // Every candidate here has been tried: backtrack
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.path.pop();
                }
                continue;
            };
            frame.next += 1;

            let next_position = candidate.end();
            if !self.viable[next_position] {
                continue;
            }
            if !self.visit() {
                return None;
            }

            self.path.push(candidate);
            if next_position == len {
                let tiling = self.emit();
                self.path.pop();
                return Some(tiling);
            }
            self.stack.push(Frame {
                position: next_position,
                next: 0,
            });
        }
    }
}

impl FusedIterator for Enumerator<'_> {}

/// Enumerate every tiling of `index` under `budget`.
pub fn enumerate(index: &MatchIndex, budget: SearchBudget) -> Enumerator<'_> {
    Enumerator::new(index, budget)
}
