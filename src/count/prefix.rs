//! Forward dynamic programming over prefix end positions.
//!
//! `ways[i]` is the number of decompositions of `target[..i]`. The empty
//! prefix has exactly one (the empty sequence), and every pattern ending at
//! `i` extends each decomposition of the prefix it starts after.
//!
//! Positions from which the end of the target cannot be reached are left at
//! zero, so dead-end prefixes never grow large counts.

use num_traits::{One, Zero};

use crate::count::{Count, Counter, Method};
use crate::pattern::PatternSet;

pub struct PrefixCounter;

impl Counter for PrefixCounter {
    fn method(&self) -> Method {
        Method::Prefix
    }

    fn count(&self, patterns: &PatternSet, target: &str) -> Count {
        let n = target.len();
        let viable = viable_positions(patterns, target);
        let mut ways: Vec<Count> = vec![Count::zero(); n + 1];
        ways[0] = Count::one();

        for end in 1..=n {
            if !viable[end] {
                continue;
            }
            let lower = end.saturating_sub(patterns.max_len());
            let mut total = Count::zero();
            for start in lower..end {
                if ways[start].is_zero() {
                    continue;
                }
                // `get` is None when a bound splits a multi-byte character.
                let Some(window) = target.get(start..end) else {
                    continue;
                };
                if patterns.contains(window) {
                    total += &ways[start];
                }
            }
            ways[end] = total;
        }

        ways.swap_remove(n)
    }
}

/// `viable[i]` is true when `target[i..]` splits into patterns.
fn viable_positions(patterns: &PatternSet, target: &str) -> Vec<bool> {
    let n = target.len();
    let mut viable = vec![false; n + 1];
    viable[n] = true;
    for start in (0..n).rev() {
        viable[start] = patterns.lengths().any(|len| {
            let end = start + len;
            end <= n
                && viable[end]
                && target
                    .get(start..end)
                    .is_some_and(|window| patterns.contains(window))
        });
    }
    viable
}
