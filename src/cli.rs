use std::path::PathBuf;

use clap::Parser;

use crate::config::ResolvedConfig;
use crate::count::Method;

#[derive(Parser, Debug)]
#[command(
    name = "partcount",
    version,
    about = "Count the ways target strings split into pattern strings"
)]
pub struct Args {
    /// Puzzle file: a comma-separated pattern line, then one target per line
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_parser = ["text", "json", "quiet"])]
    pub format: Option<String>,

    /// Counting method [default: prefix]
    #[arg(short, long, value_parser = ["prefix", "suffix"])]
    pub method: Option<String>,

    /// Print only the totals, not each target's count
    #[arg(long)]
    pub totals_only: bool,

    /// Count every target with both methods and fail if they disagree
    #[arg(long)]
    pub cross_check: bool,

    /// Read the puzzle from stdin instead of INPUT
    #[arg(long)]
    pub stdin: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Output format: the flag, then the config file, then `text`.
    pub fn resolved_format<'a>(&'a self, config: &'a ResolvedConfig) -> &'a str {
        self.format
            .as_deref()
            .or_else(|| config.format())
            .unwrap_or("text")
    }

    /// Counting method: the flag, then the config file, then prefix DP.
    pub fn resolved_method(&self, config: &ResolvedConfig) -> Method {
        self.method
            .as_deref()
            .and_then(Method::from_str)
            .or_else(|| config.method())
            .unwrap_or_default()
    }

    pub fn show_counts(&self, config: &ResolvedConfig) -> bool {
        !self.totals_only && config.show_counts()
    }
}
