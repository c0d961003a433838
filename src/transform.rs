// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Encode strategies applied to dictionary words.
//!
//! A puzzle may have been written backwards, keyed backwards, or both. Rather
//! than transforming the ciphertext, each variant transforms the dictionary:
//! reverse the word before encoding, reverse the code after encoding, or both.

use crate::morse;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four canonical encode strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// encode(word)
    Forward,
    /// reverse(encode(word))
    BackwardCode,
    /// encode(reverse(word))
    BackwardText,
    /// reverse(encode(reverse(word)))
    BackwardBoth,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Forward,
        Variant::BackwardCode,
        Variant::BackwardText,
        Variant::BackwardBoth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Variant::Forward => "forward plaintext, forward morse",
            Variant::BackwardCode => "forward plaintext, backward morse",
            Variant::BackwardText => "backward plaintext, forward morse",
            Variant::BackwardBoth => "backward plaintext, backward morse",
        }
    }

    fn reverses_text(self) -> bool {
        matches!(self, Variant::BackwardText | Variant::BackwardBoth)
    }

    fn reverses_code(self) -> bool {
        matches!(self, Variant::BackwardCode | Variant::BackwardBoth)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Variant::Forward),
            "backward-code" => Ok(Variant::BackwardCode),
            "backward-text" => Ok(Variant::BackwardText),
            "backward-both" => Ok(Variant::BackwardBoth),
            other => Err(format!(
                "unknown transformation '{}' (expected forward, backward-code, backward-text or backward-both)",
                other
            )),
        }
    }
}

/// A word → code function with a label.
///
/// Pure and cheap to copy. Custom encoders can be supplied with
/// [`Transformation::custom`].
#[derive(Clone, Copy)]
pub struct Transformation {
    label: &'static str,
    variant: Option<Variant>,
    encoder: fn(&str) -> String,
}

impl Transformation {
    pub fn canonical(variant: Variant) -> Self {
        Self {
            label: variant.label(),
            variant: Some(variant),
            encoder: morse::encode,
        }
    }

    /// The four canonical variants in display order.
    pub fn all() -> [Transformation; 4] {
        Variant::ALL.map(Transformation::canonical)
    }

    /// A transformation around an arbitrary encoder, used as-is.
    pub fn custom(label: &'static str, encoder: fn(&str) -> String) -> Self {
        Self {
            label,
            variant: None,
            encoder,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn variant(&self) -> Option<Variant> {
        self.variant
    }

    /// Encode a single dictionary word.
    pub fn encode(&self, word: &str) -> String {
        let Some(variant) = self.variant else {
            return (self.encoder)(word);
        };
        let code = if variant.reverses_text() {
            (self.encoder)(&reverse(word))
        } else {
            (self.encoder)(word)
        };
        if variant.reverses_code() {
            reverse(&code)
        } else {
            code
        }
    }
}

impl fmt::Debug for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformation")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .finish()
    }
}

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
