//! Puzzle text parsing.
//!
//! ```text
//! r, wr, b, g, bwu, rb, gb, br
//!
//! brwrr
//! bggr
//! ```
//!
//! The first line holds comma-separated patterns; every following non-blank
//! line is one target.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::pattern::{PatternError, PatternSet};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no pattern line found")]
    NoPatterns,
    #[error("invalid pattern line: {0}")]
    Patterns(#[from] PatternError),
    #[error("no targets found after the pattern line")]
    NoTargets,
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub patterns: PatternSet,
    pub targets: Vec<String>,
}

impl FromStr for Puzzle {
    type Err = InputError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines();

        let pattern_line = lines
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .ok_or(InputError::NoPatterns)?;
        let patterns = PatternSet::new(pattern_line.split(',').map(str::trim))?;

        let targets: Vec<String> = lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if targets.is_empty() {
            return Err(InputError::NoTargets);
        }

        Ok(Puzzle { patterns, targets })
    }
}

impl Puzzle {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        text.parse::<Puzzle>()
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}
