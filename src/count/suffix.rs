//! Counting over remaining suffixes.
//!
//! `table[offset]` counts the decompositions of `target[offset..]`: one for
//! the empty suffix, otherwise the sum of `table[offset + p.len()]` over every
//! pattern `p` the suffix starts with. The table is filled from the end of the
//! target toward the start, so every entry it reads is already known and the
//! stack stays flat however long the target is. It belongs to a single
//! `count` call, so nothing leaks between targets or pattern sets.

use num_traits::{One, Zero};

use crate::count::{Count, Counter, Method};
use crate::pattern::PatternSet;

pub struct SuffixCounter;

impl Counter for SuffixCounter {
    fn method(&self) -> Method {
        Method::Suffix
    }

    fn count(&self, patterns: &PatternSet, target: &str) -> Count {
        let n = target.len();
        let mut table: Vec<Count> = vec![Count::zero(); n + 1];
        table[n] = Count::one();

        for offset in (0..n).rev() {
            // Offsets inside a multi-byte character start no suffix.
            let Some(rest) = target.get(offset..) else {
                continue;
            };
            let mut total = Count::zero();
            for pattern in patterns.prefixes_of(rest) {
                total += &table[offset + pattern.len()];
            }
            table[offset] = total;
        }

        table.swap_remove(0)
    }
}
