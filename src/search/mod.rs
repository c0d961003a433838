// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: from a match index to a list of sentences.
//!
//! The enumerator walks the index and yields tilings lazily; the budget
//! decides when it must give up; the collector turns the stream into
//! solutions and records how the search ended.

mod budget;
mod collect;
mod enumerate;

pub use budget::*;
pub use collect::*;
pub use enumerate::*;
