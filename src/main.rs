// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use dotdash::config::{Limits, Manifest};
use dotdash::decode::{DecodeOptions, DecodeReport};
use dotdash::{Dictionary, MatchIndexBuilder, Puzzle, Transformation, Variant};

mod cli;
use cli::{display, Cli, Commands, LimitArgs, PuzzleInput};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dotdash=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Decode {
            manifest,
            input,
            transform,
            limits,
            json,
        } => run_decode(manifest.as_deref(), &input, &transform, &limits, json),
        Commands::Encode { text, transform } => {
            println!("{}", Transformation::canonical(transform).encode(&text));
            Ok(())
        }
        Commands::Inspect { input } => run_inspect(&input),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Everything a decode run needs, from either a manifest or flags.
struct Job {
    dictionary: Dictionary,
    puzzles: Vec<Puzzle>,
    transformations: Vec<Transformation>,
    limits: Limits,
}

fn run_decode(
    manifest: Option<&std::path::Path>,
    input: &PuzzleInput,
    transform: &[Variant],
    limits: &LimitArgs,
    json: bool,
) -> Result<()> {
    let job = match manifest {
        Some(path) => {
            let manifest = Manifest::load(path)?;
            let transformations = if transform.is_empty() {
                manifest.transformations()
            } else {
                canonical(transform)
            };
            Job {
                dictionary: manifest.dictionary()?,
                limits: Limits::from(limits).or(&manifest.limits),
                puzzles: manifest.puzzles,
                transformations,
            }
        }
        None => {
            let (dictionary, puzzle) = load_input(input)?;
            Job {
                dictionary,
                puzzles: vec![puzzle],
                transformations: if transform.is_empty() {
                    Transformation::all().to_vec()
                } else {
                    canonical(transform)
                },
                limits: Limits::from(limits),
            }
        }
    };

    let options = DecodeOptions::from_limits(&job.limits);
    let reports = run_with_progress(&job, &options, json)?;

    if json {
        let out = serde_json::to_string_pretty(&reports).context("serializing reports")?;
        println!("{}", out);
    } else {
        for report in &reports {
            display::report(report);
        }
        let truncated = reports.iter().filter(|r| r.is_truncated()).count();
        if truncated > 0 {
            eprintln!(
                "⚠️  {} of {} searches stopped early; raise the limits to see more",
                truncated,
                reports.len()
            );
        }
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_with_progress(job: &Job, options: &DecodeOptions, quiet: bool) -> Result<Vec<DecodeReport>> {
    let progress = if quiet || !display::use_colors() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    progress.set_style(create_progress_style());
    progress.set_prefix("Decoding");

    let reports = dotdash::decode::decode_with_progress(
        &job.dictionary,
        &job.puzzles,
        &job.transformations,
        options,
        &progress,
    )?;
    progress.finish_and_clear();
    Ok(reports)
}

#[cfg(not(feature = "parallel"))]
fn run_with_progress(job: &Job, options: &DecodeOptions, _quiet: bool) -> Result<Vec<DecodeReport>> {
    Ok(dotdash::decode::decode(
        &job.dictionary,
        &job.puzzles,
        &job.transformations,
        options,
    )?)
}

/// Create a progress style for the decode progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

fn run_inspect(input: &PuzzleInput) -> Result<()> {
    let (dictionary, puzzle) = load_input(input)?;

    display::section_top(&puzzle.description);
    display::row(&format!(" {} symbols", puzzle.len()));
    for chunk in puzzle.ciphertext.as_bytes().chunks(display::BOX_WIDTH - 2) {
        // ciphertexts are ASCII once validated
        let chunk = String::from_utf8_lossy(chunk);
        display::row(&format!(" {}", display::morse(&chunk)));
    }
    display::row(&format!(
        " {} words, e.g. {}",
        dictionary.len(),
        display::ellipsize(&dictionary.samples(8).join(", "), display::BOX_WIDTH - 24)
    ));
    display::section_bot();

    for transformation in Transformation::all() {
        let builder = MatchIndexBuilder::for_transformation(&dictionary, &transformation);
        let index = builder.build_checked(&puzzle.ciphertext)?;
        display::index_stats(transformation.label(), &index.stats(), index.count_tilings());
    }

    Ok(())
}

/// Dictionary and single puzzle from flags.
fn load_input(input: &PuzzleInput) -> Result<(Dictionary, Puzzle)> {
    if input.words.is_empty() {
        bail!("no word lists given (use --words or --manifest)");
    }
    let Some(ciphertext) = &input.ciphertext else {
        bail!("no ciphertext given (use --ciphertext or --manifest)");
    };
    let dictionary = Dictionary::load(&input.words)?;
    if dictionary.is_empty() {
        bail!("word lists contain no words");
    }
    dotdash::Ciphertext::new(ciphertext)?;
    Ok((dictionary, Puzzle::new(ciphertext.as_str(), input.description.as_str())))
}

fn canonical(variants: &[Variant]) -> Vec<Transformation> {
    let mut variants = variants.to_vec();
    variants.sort();
    variants.dedup();
    variants.into_iter().map(Transformation::canonical).collect()
}
