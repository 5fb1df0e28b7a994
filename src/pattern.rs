use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern set is empty")]
    NoPatterns,
    #[error("empty pattern string (every position would match it)")]
    EmptyPattern,
}

/// The building blocks a target may be split into.
///
/// Duplicates collapse on construction. Lengths are byte lengths, which is
/// what the counters index targets by.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: HashSet<String>,
    max_len: usize,
    /// Distinct pattern lengths, ascending.
    lengths: BTreeSet<usize>,
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        for pattern in patterns {
            let pattern = pattern.into();
            if pattern.is_empty() {
                return Err(PatternError::EmptyPattern);
            }
            set.insert(pattern);
        }
        if set.is_empty() {
            return Err(PatternError::NoPatterns);
        }

        let lengths: BTreeSet<usize> = set.iter().map(|p| p.len()).collect();
        let max_len = lengths.last().copied().unwrap_or(0);

        Ok(Self {
            patterns: set,
            max_len,
            lengths,
        })
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.patterns.contains(candidate)
    }

    /// Longest pattern in bytes. No window wider than this can match.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.lengths.iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Patterns that `text` starts with.
    pub fn prefixes_of<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |p| text.starts_with(p))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false: `new` rejects empty sets. Pairs with `len`.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in sorted order, for stable display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }
}
