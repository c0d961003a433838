//! Manifests, word lists on disk, and the full decode pipeline.

use tempfile::TempDir;

use crate::common::{write_manifest, write_wordlist};
use dotdash::config::Manifest;
use dotdash::{decode, morse, DecodeError, DecodeOptions, Outcome, StopReason, Transformation};

fn sos_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_wordlist(dir.path(), "common.txt", &["sos", "eat", "tea"]);
    write_wordlist(dir.path(), "custom.txt", &["  s  ", "o", "", "sos"]);
    dir
}

#[test]
fn test_manifest_end_to_end() {
    let dir = sos_dir();
    let path = write_manifest(
        dir.path(),
        r#"{
            "version": 1,
            "wordlists": ["common.txt", "custom.txt"],
            "puzzles": [{"ciphertext": "...---...", "description": "distress"}],
            "transformations": ["forward"]
        }"#,
    );

    let manifest = Manifest::load(&path).unwrap();
    let dictionary = manifest.dictionary().unwrap();
    assert_eq!(dictionary.len(), 5);

    let reports = decode(
        &dictionary,
        &manifest.puzzles,
        &manifest.transformations(),
        &DecodeOptions::from_limits(&manifest.limits),
    )
    .unwrap();

    assert_eq!(reports.len(), 1);
    let sentences: Vec<_> = reports[0].solutions.iter().map(|s| s.sentence.as_str()).collect();
    assert_eq!(sentences, vec!["s o s", "sos"]);
    assert_eq!(reports[0].outcome, Outcome::Solved);
    assert_eq!(reports[0].puzzle.description, "distress");
}

#[test]
fn test_manifest_limits_are_applied() {
    let dir = TempDir::new().unwrap();
    write_wordlist(dir.path(), "dots.txt", &["e", "i", "s", "h"]);
    let path = write_manifest(
        dir.path(),
        r#"{
            "version": 1,
            "wordlists": ["dots.txt"],
            "puzzles": [{"ciphertext": "............"}],
            "limits": {"maxResults": 4}
        }"#,
    );
    let manifest = Manifest::load(&path).unwrap();
    let reports = decode(
        &manifest.dictionary().unwrap(),
        &manifest.puzzles,
        &manifest.transformations(),
        &DecodeOptions::from_limits(&manifest.limits),
    )
    .unwrap();

    assert_eq!(reports.len(), 4);
    for report in &reports {
        assert_eq!(report.solutions.len(), 4);
        assert_eq!(report.outcome, Outcome::Truncated(StopReason::ResultLimit));
    }
}

#[test]
fn test_missing_wordlist_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        dir.path(),
        r#"{"version": 1, "wordlists": ["nope.txt"], "puzzles": [{"ciphertext": "."}]}"#,
    );
    let manifest = Manifest::load(&path).unwrap();
    match manifest.dictionary() {
        Err(DecodeError::Io { path, .. }) => assert!(path.ends_with("nope.txt")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_manifest_names_its_path() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(dir.path(), r#"{"version": 1, "wordlists": []"#);
    let err = Manifest::load(&path).unwrap_err();
    assert!(matches!(err, DecodeError::Manifest { .. }));
    assert!(err.to_string().contains("manifest.json"));
}

#[test]
fn test_unknown_limit_field_is_rejected() {
    let json = r#"{
        "version": 1,
        "wordlists": ["a.txt"],
        "puzzles": [{"ciphertext": "."}],
        "limits": {"maxResult": 3}
    }"#;
    assert!(Manifest::parse(json).is_err());
}

#[test]
fn test_reports_serialize_with_outcome() {
    let dictionary = dotdash::Dictionary::from_words(["e", "t"]);
    let puzzles = vec![dotdash::Puzzle::new(morse::encode("tee"), "tee")];
    let reports = decode(
        &dictionary,
        &puzzles,
        &[Transformation::canonical(dotdash::Variant::Forward)],
        &DecodeOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["outcome"]["status"], "solved");
    assert_eq!(json[0]["solutions"][0]["sentence"], "t e e");
    assert_eq!(json[0]["transformation"], "forward plaintext, forward morse");
    assert_eq!(json[0]["index"]["positions"], 3);
}
