// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid input unrepresentable.
//!
//! A [`Ciphertext`] is checked once, at construction, and is a valid string of
//! code symbols forever after. Anything that takes a `Ciphertext` instead of a
//! `&str` can skip the check.

use crate::error::DecodeError;
use crate::morse;
use std::fmt;

/// A string made only of `.` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ciphertext<'a> {
    inner: &'a str,
}

impl<'a> Ciphertext<'a> {
    /// Validate the alphabet.
    ///
    /// # Errors
    /// `DecodeError::InvalidCiphertext` naming the first offending symbol.
    pub fn new(text: &'a str) -> Result<Self, DecodeError> {
        match morse::first_invalid_symbol(text) {
            Some((position, found)) => Err(DecodeError::InvalidCiphertext { position, found }),
            None => Ok(Self { inner: text }),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.inner
    }

    /// Length in code symbols (ASCII, so bytes and symbols agree).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Display for Ciphertext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner)
    }
}
