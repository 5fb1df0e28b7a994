//! Integration tests for the partcount pipeline.
//!
//! These write real puzzle and config files to a temp directory and drive
//! config loading, puzzle parsing, counting, formatting, and `run`.

use std::fs;
use std::path::{Path, PathBuf};

use partcount::cli::Args;
use partcount::config::load_config;
use partcount::count::{Count, Method};
use partcount::formatter::create_formatter;
use partcount::input::{InputError, Puzzle};
use partcount::report::{cross_check, evaluate};

const REFERENCE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn default_args(input: PathBuf) -> Args {
    Args {
        input,
        config: None,
        format: Some("quiet".to_string()),
        method: None,
        totals_only: false,
        cross_check: false,
        stdin: false,
        debug: false,
    }
}

// ---------- Full pipeline tests ----------

#[test]
fn reference_puzzle_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "input.txt", REFERENCE);

    let puzzle = Puzzle::from_path(&path).unwrap();
    assert_eq!(puzzle.patterns.len(), 8);
    assert_eq!(puzzle.targets.len(), 8);

    for method in Method::ALL {
        let report = evaluate(&puzzle.patterns, &puzzle.targets, method.counter().as_ref());
        assert_eq!(report.decomposable(), 6, "{method}");
        assert_eq!(report.total, Count::from(16u32), "{method}");
    }
    assert!(cross_check(&puzzle.patterns, &puzzle.targets).is_empty());
}

#[test]
fn text_report_for_reference_puzzle() {
    let puzzle: Puzzle = REFERENCE.parse().unwrap();
    let report = evaluate(
        &puzzle.patterns,
        &puzzle.targets,
        Method::Prefix.counter().as_ref(),
    );

    let mut buf = Vec::new();
    create_formatter("text", true).format_to(&report, &mut buf);
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with("brwrr: 2\nbggr: 1\ngbbr: 4\nrrbgbr: 6\nubwu: 0\n"));
    assert!(out.ends_with("8 targets checked, 6 decomposable, 16 decompositions\n"));
}

#[test]
fn config_selects_json_totals() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_file(
        dir.path(),
        ".partcount.yml",
        "format: json\nmethod: suffix\nshow_counts: false\n",
    );
    let config = load_config(None, Some(dir.path())).unwrap();
    assert_eq!(config.source(), Some(config_path.as_path()));

    let mut args = default_args(PathBuf::from("unused"));
    args.format = None;
    let puzzle: Puzzle = REFERENCE.parse().unwrap();
    let method = args.resolved_method(&config);
    assert_eq!(method, Method::Suffix);

    let report = evaluate(&puzzle.patterns, &puzzle.targets, method.counter().as_ref());
    let mut buf = Vec::new();
    create_formatter(args.resolved_format(&config), args.show_counts(&config))
        .format_to(&report, &mut buf);
    let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed["metadata"]["method"], "suffix");
    assert_eq!(parsed["metadata"]["total"], "16");
    assert!(parsed.get("targets").is_none());
}

#[test]
fn run_succeeds_on_reference_puzzle() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "input.txt", REFERENCE);
    let mut args = default_args(path);
    args.cross_check = true;
    assert_eq!(partcount::run(args).unwrap(), 0);
}

#[test]
fn run_with_explicit_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "input.txt", REFERENCE);
    let config = write_file(dir.path(), "custom.yml", "method: suffix\n");
    let mut args = default_args(input);
    args.config = Some(config);
    assert_eq!(partcount::run(args).unwrap(), 0);
}

// ---------- Error paths ----------

#[test]
fn run_missing_input_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = partcount::run(default_args(dir.path().join("nope.txt"))).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
}

#[test]
fn run_missing_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "input.txt", REFERENCE);
    let mut args = default_args(input);
    args.config = Some(dir.path().join("missing.yml"));
    assert!(partcount::run(args).is_err());
}

#[test]
fn run_input_without_targets_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "input.txt", "r, wr, b\n\n");
    let err = partcount::run(default_args(path)).unwrap_err();
    assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::NoTargets));
}

#[test]
fn run_empty_pattern_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "input.txt", "r, , b\n\nrb\n");
    let err = partcount::run(default_args(path)).unwrap_err();
    assert!(format!("{err:#}").contains("empty pattern"));
}

#[test]
fn run_counts_past_u128() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!("a, aa\n\n{}\n", "a".repeat(300));
    let path = write_file(dir.path(), "input.txt", &content);
    let mut args = default_args(path);
    args.cross_check = true;
    assert_eq!(partcount::run(args).unwrap(), 0);
}

#[test]
fn run_long_target_with_suffix_method() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!("a\n\n{}\n", "a".repeat(300_000));
    let path = write_file(dir.path(), "input.txt", &content);
    let mut args = default_args(path);
    args.method = Some("suffix".to_string());
    args.cross_check = true;
    assert_eq!(partcount::run(args).unwrap(), 0);
}

#[test]
fn unmatchable_targets_are_not_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "input.txt", "x, y\n\nabc\nzzz\n");
    assert_eq!(partcount::run(default_args(path)).unwrap(), 0);
}
