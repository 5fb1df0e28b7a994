//! Time the prefix-DP and suffix-memoized counters on generated puzzles.
//!
//! Usage:
//!   cargo run --release --bin bench_partcount
//!   cargo run --release --bin bench_partcount -- --len 200 --targets 500 --seed 7

use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use partcount::count::{Count, Method};
use partcount::pattern::PatternSet;
use partcount::report::evaluate;

// --- CLI ---

#[derive(Parser)]
#[command(about = "Benchmark the partcount counting methods on generated puzzles.")]
struct Args {
    /// Length of each generated target
    #[arg(long, default_value_t = 60)]
    len: usize,

    /// Number of generated targets
    #[arg(long, default_value_t = 400)]
    targets: usize,

    /// Number of generated patterns
    #[arg(long, default_value_t = 400)]
    patterns: usize,

    /// Longest generated pattern
    #[arg(long, default_value_t = 8)]
    max_pattern_len: usize,

    /// RNG seed, so runs are repeatable
    #[arg(long, default_value_t = 19)]
    seed: u64,
}

const ALPHABET: &[u8] = b"wubrg";

fn random_word(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Patterns of length 1..=max_len, always including the single letters so
/// that most targets stay decomposable.
fn generate_patterns(rng: &mut StdRng, count: usize, max_len: usize) -> PatternSet {
    let singles = ALPHABET.iter().map(|&b| (b as char).to_string());
    let generated: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(1..=max_len.max(1));
            random_word(rng, len)
        })
        .collect();
    match PatternSet::new(singles.chain(generated)) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}

fn main() {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let patterns = generate_patterns(&mut rng, args.patterns, args.max_pattern_len);
    let targets: Vec<String> = (0..args.targets)
        .map(|_| random_word(&mut rng, args.len))
        .collect();

    println!(
        "{} patterns (max {} bytes), {} targets of {} bytes, seed {}",
        patterns.len(),
        patterns.max_len(),
        targets.len(),
        args.len,
        args.seed,
    );
    println!();
    println!("| method | time | decomposable | total |");
    println!("|--------|-----:|-------------:|------:|");

    let mut totals: Vec<Count> = Vec::new();
    for method in Method::ALL {
        let start = Instant::now();
        let report = evaluate(&patterns, &targets, method.counter().as_ref());
        let elapsed = start.elapsed();
        println!(
            "| {method} | {} | {} | {} |",
            format_duration(elapsed),
            report.decomposable(),
            report.total,
        );
        totals.push(report.total);
    }

    if totals.windows(2).any(|w| w[0] != w[1]) {
        eprintln!("error: methods disagree on the batch total");
        process::exit(1);
    }
}

fn format_duration(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms < 1.0 {
        format!("{:.0}us", ms * 1000.0)
    } else {
        format!("{ms:.1}ms")
    }
}
