// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run manifests.
//!
//! A manifest names the word lists, the puzzles and the search limits for a
//! decode run, so a run can be repeated without retyping ciphertexts:
//!
//! ```json
//! {
//!   "version": 1,
//!   "wordlists": ["words/common.txt", "words/custom.txt"],
//!   "puzzles": [{ "ciphertext": "..-.", "description": "dash at end" }],
//!   "limits": { "maxResults": 100, "maxNodes": 1000000, "timeoutMs": 5000 },
//!   "transformations": ["forward", "backward-code"]
//! }
//! ```
//!
//! Word-list paths are relative to the manifest's own directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dictionary::Dictionary;
use crate::error::DecodeError;
use crate::transform::{Transformation, Variant};
use crate::types::Puzzle;

/// The only manifest version understood.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Limits {
    #[serde(default)]
    pub max_results: Option<usize>,
    #[serde(default)]
    pub max_nodes: Option<u64>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Limits {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: &Limits) -> Limits {
        Limits {
            max_results: self.max_results.or(fallback.max_results),
            max_nodes: self.max_nodes.or(fallback.max_nodes),
            timeout_ms: self.timeout_ms.or(fallback.timeout_ms),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: u32,
    pub wordlists: Vec<PathBuf>,
    pub puzzles: Vec<Puzzle>,
    #[serde(default)]
    pub limits: Limits,
    /// Defaults to all four variants.
    #[serde(default)]
    pub transformations: Option<Vec<Variant>>,
}

impl Manifest {
    /// Read and validate a manifest, resolving word-list paths against its
    /// directory.
    pub fn load(path: &Path) -> Result<Self, DecodeError> {
        let content = fs::read_to_string(path).map_err(|source| DecodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::parse(&content).map_err(|message| DecodeError::Manifest {
            path: path.to_path_buf(),
            message,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for wordlist in &mut manifest.wordlists {
            if wordlist.is_relative() {
                *wordlist = base.join(&*wordlist);
            }
        }
        Ok(manifest)
    }

    /// Parse and validate manifest JSON. Paths are left as written.
    pub fn parse(json: &str) -> Result<Self, String> {
        let manifest: Manifest =
            serde_json::from_str(json).map_err(|e| format!("invalid JSON: {}", e))?;
        if manifest.version != MANIFEST_VERSION {
            return Err(format!(
                "unsupported version {} (expected {})",
                manifest.version, MANIFEST_VERSION
            ));
        }
        if manifest.wordlists.is_empty() {
            return Err("no wordlists listed".to_string());
        }
        if manifest.puzzles.is_empty() {
            return Err("no puzzles listed".to_string());
        }
        Ok(manifest)
    }

    /// Load every listed word list into one dictionary.
    pub fn dictionary(&self) -> Result<Dictionary, DecodeError> {
        Dictionary::load(&self.wordlists)
    }

    /// Transformations to run, in canonical order.
    pub fn transformations(&self) -> Vec<Transformation> {
        match &self.transformations {
            Some(variants) => {
                let mut variants = variants.clone();
                variants.sort();
                variants.dedup();
                variants.into_iter().map(Transformation::canonical).collect()
            }
            None => Transformation::all().to_vec(),
        }
    }
}
