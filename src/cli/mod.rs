// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the dotdash command-line interface.
//!
//! Three subcommands: `decode` to tile ciphertexts with a dictionary,
//! `encode` to see what a word looks like under a transformation, and
//! `inspect` to look at match indexes without enumerating anything.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use dotdash::config::Limits;
use dotdash::transform::Variant;

#[derive(Parser)]
#[command(
    name = "dotdash",
    about = "Decode unspaced Morse ciphertexts by tiling them with dictionary words",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every way to tile ciphertexts with dictionary words
    Decode {
        /// Run manifest (word lists, puzzles, limits)
        #[arg(short, long, conflicts_with_all = ["ciphertext", "words"])]
        manifest: Option<PathBuf>,

        #[command(flatten)]
        input: PuzzleInput,

        /// Transformations to run (default: all four)
        #[arg(short, long, value_delimiter = ',')]
        transform: Vec<Variant>,

        #[command(flatten)]
        limits: LimitArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the encoded form of a text
    Encode {
        /// Text to encode
        text: String,

        /// Transformation to apply
        #[arg(short, long, default_value = "forward")]
        transform: Variant,
    },

    /// Show match-index statistics and tiling counts
    Inspect {
        #[command(flatten)]
        input: PuzzleInput,
    },
}

#[derive(Args)]
pub struct PuzzleInput {
    /// Word-list files (one word per line)
    #[arg(short, long, num_args = 1..)]
    pub words: Vec<PathBuf>,

    /// Ciphertext made of '.' and '-'
    #[arg(short, long)]
    pub ciphertext: Option<String>,

    /// Label for the ciphertext
    #[arg(short, long, default_value = "ciphertext")]
    pub description: String,
}

#[derive(Args)]
pub struct LimitArgs {
    /// Maximum solutions per transformation
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Maximum search nodes per transformation
    #[arg(long)]
    pub max_nodes: Option<u64>,

    /// Time limit per transformation, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl From<&LimitArgs> for Limits {
    fn from(args: &LimitArgs) -> Self {
        Limits {
            max_results: args.limit,
            max_nodes: args.max_nodes,
            timeout_ms: args.timeout_ms,
        }
    }
}
