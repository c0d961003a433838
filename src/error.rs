// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised before a search starts.
//!
//! Running out of budget is not an error (see [`crate::search::Outcome`]),
//! and neither is finding nothing. Everything here is about bad input.

use std::fmt;
use std::path::PathBuf;

/// Error type for rejected input.
#[derive(Debug)]
pub enum DecodeError {
    /// Ciphertext contains a symbol outside `{'.', '-'}`.
    InvalidCiphertext { position: usize, found: char },
    /// No words to tile with.
    EmptyDictionary,
    /// A word list or manifest could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A manifest could not be parsed or is inconsistent.
    Manifest { path: PathBuf, message: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCiphertext { position, found } => {
                write!(
                    f,
                    "ciphertext contains {:?} at position {} (expected '.' or '-')",
                    found, position
                )
            }
            DecodeError::EmptyDictionary => write!(f, "dictionary is empty"),
            DecodeError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            DecodeError::Manifest { path, message } => {
                write!(f, "invalid manifest {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
