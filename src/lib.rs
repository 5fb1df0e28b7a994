pub mod cli;
pub mod config;
pub mod count;
pub mod formatter;
pub mod input;
pub mod pattern;
pub mod report;

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use cli::Args;
use config::load_config;
use formatter::create_formatter;
use input::Puzzle;
use report::{Mismatch, cross_check, evaluate};

/// Install the stderr log subscriber. `--debug` lowers the level to debug;
/// `RUST_LOG` still wins when set. Safe to call more than once.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Count every target in the puzzle and print the report. Returns the exit
/// code: 0 = ok, 1 = the counting methods disagreed under `--cross-check`.
pub fn run(args: Args) -> Result<i32> {
    let config = load_config(args.config.as_deref(), None)?;
    match config.source() {
        Some(path) => debug!("config loaded from: {}", path.display()),
        None => debug!("no config file found"),
    }

    let puzzle = if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        text.parse::<Puzzle>().context("failed to parse stdin")?
    } else {
        Puzzle::from_path(&args.input)?
    };
    info!(
        patterns = puzzle.patterns.len(),
        max_len = puzzle.patterns.max_len(),
        targets = puzzle.targets.len(),
        "puzzle loaded"
    );

    let method = args.resolved_method(&config);
    debug!(%method, "counting");
    let report = evaluate(&puzzle.patterns, &puzzle.targets, method.counter().as_ref());

    let formatter = create_formatter(args.resolved_format(&config), args.show_counts(&config));
    formatter.print(&report);

    if args.cross_check {
        let mismatches = cross_check(&puzzle.patterns, &puzzle.targets);
        let code = report_mismatches(&mismatches, &mut std::io::stderr().lock());
        if code != 0 {
            return Ok(code);
        }
        debug!("cross-check passed");
    }

    Ok(0)
}

/// Print one `mismatch:` line per disagreement. Returns the exit code:
/// 0 when there are none, 1 otherwise.
pub fn report_mismatches(mismatches: &[Mismatch], out: &mut dyn Write) -> i32 {
    if mismatches.is_empty() {
        return 0;
    }
    for m in mismatches {
        let _ = writeln!(out, "mismatch: {m}");
    }
    warn!(count = mismatches.len(), "cross-check failed");
    1
}
