pub mod json;
pub mod quiet;
pub mod text;

use std::io::Write;

use crate::report::Report;

pub trait Formatter {
    fn format_to(&self, report: &Report, out: &mut dyn Write);

    fn print(&self, report: &Report) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.format_to(report, &mut lock);
    }
}

/// `show_counts` controls whether per-target counts are listed before the totals.
pub fn create_formatter(format: &str, show_counts: bool) -> Box<dyn Formatter> {
    match format {
        "json" => Box::new(json::JsonFormatter { show_counts }),
        "quiet" => Box::new(quiet::QuietFormatter),
        // "text" and any unknown value
        _ => Box::new(text::TextFormatter { show_counts }),
    }
}

fn plural(n: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if n == 1 { singular } else { plural }
}
