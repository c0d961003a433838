// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Limits on how much work one enumeration may do.
//!
//! The number of tilings can grow exponentially with ciphertext length, so
//! every search runs under a budget. All limits are checked at every node the
//! search visits. Tripping one is not an error: the search stops and the
//! caller keeps whatever it already has.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a search stopped before exhausting the space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// Visited the maximum number of nodes.
    NodeBudget,
    /// Ran past the deadline.
    Deadline,
    /// The cancellation flag was raised.
    Cancelled,
    /// Collected the maximum number of results and more were available.
    ResultLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::NodeBudget => "node budget exhausted",
            StopReason::Deadline => "deadline reached",
            StopReason::Cancelled => "cancelled",
            StopReason::ResultLimit => "result limit reached",
        };
        f.write_str(text)
    }
}

/// Node, time and cancellation limits for one enumeration.
///
/// The default budget is unlimited.
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    max_nodes: Option<u64>,
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Stop after visiting `max_nodes` search nodes.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Stop as soon as `flag` becomes true. The flag may be shared by many
    /// searches, including ones on other threads.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn max_nodes(&self) -> Option<u64> {
        self.max_nodes
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// May a search that has visited `visited` nodes visit one more?
    pub fn check(&self, visited: u64) -> Result<(), StopReason> {
        if self.max_nodes.is_some_and(|max| visited >= max) {
            return Err(StopReason::NodeBudget);
        }
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Err(StopReason::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(StopReason::Deadline);
        }
        Ok(())
    }
}
