pub mod prefix;
pub mod suffix;

use std::fmt;

use num_bigint::BigUint;

use crate::pattern::PatternSet;

/// Number of decompositions of a target.
///
/// Counts grow exponentially with target length, so they are unbounded
/// integers rather than a fixed-width type.
pub type Count = BigUint;

/// Counts the ordered sequences of patterns whose concatenation is exactly
/// the target.
pub trait Counter {
    fn method(&self) -> Method;

    fn count(&self, patterns: &PatternSet, target: &str) -> Count;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Forward DP over prefix end positions.
    #[default]
    Prefix,
    /// Counting over remaining suffixes, tabulated by offset.
    Suffix,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Prefix, Method::Suffix];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Prefix => "prefix",
            Method::Suffix => "suffix",
        }
    }

    pub fn from_str(s: &str) -> Option<Method> {
        match s.to_lowercase().as_str() {
            "prefix" => Some(Method::Prefix),
            "suffix" => Some(Method::Suffix),
            _ => None,
        }
    }

    pub fn counter(&self) -> Box<dyn Counter> {
        match self {
            Method::Prefix => Box::new(prefix::PrefixCounter),
            Method::Suffix => Box::new(suffix::SuffixCounter),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
