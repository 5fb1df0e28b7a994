use std::fmt;

use num_traits::Zero;
use tracing::{debug, warn};

use crate::count::{Count, Counter, Method};
use crate::pattern::PatternSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCount {
    pub target: String,
    pub count: Count,
}

/// Counts for a batch of targets, in input order.
#[derive(Debug, Clone)]
pub struct Report {
    pub method: Method,
    pub entries: Vec<TargetCount>,
    /// Sum of all counts.
    pub total: Count,
}

impl Report {
    /// Targets with at least one decomposition.
    pub fn decomposable(&self) -> usize {
        self.entries.iter().filter(|e| !e.count.is_zero()).count()
    }

    pub fn target_count(&self) -> usize {
        self.entries.len()
    }
}

/// Count every target independently and sum the results.
pub fn evaluate(patterns: &PatternSet, targets: &[String], counter: &dyn Counter) -> Report {
    let mut entries = Vec::with_capacity(targets.len());
    let mut total = Count::zero();

    for target in targets {
        let count = counter.count(patterns, target);
        debug!(target = %target, count = %count, "counted");
        total += &count;
        entries.push(TargetCount {
            target: target.clone(),
            count,
        });
    }

    Report {
        method: counter.method(),
        entries,
        total,
    }
}

/// A target two counters disagree on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub target: String,
    pub first: (Method, Count),
    pub second: (Method, Count),
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}={} {}={}",
            self.target, self.first.0, self.first.1, self.second.0, self.second.1
        )
    }
}

/// Count every target with both methods and report disagreements.
pub fn cross_check(patterns: &PatternSet, targets: &[String]) -> Vec<Mismatch> {
    cross_check_with(
        patterns,
        targets,
        Method::Prefix.counter().as_ref(),
        Method::Suffix.counter().as_ref(),
    )
}

/// Count every target with two counters and report disagreements.
pub fn cross_check_with(
    patterns: &PatternSet,
    targets: &[String],
    first: &dyn Counter,
    second: &dyn Counter,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for target in targets {
        let a = first.count(patterns, target);
        let b = second.count(patterns, target);
        if a != b {
            warn!(target = %target, first = %a, second = %b, "methods disagree");
            mismatches.push(Mismatch {
                target: target.clone(),
                first: (first.method(), a),
                second: (second.method(), b),
            });
        }
    }
    mismatches
}
