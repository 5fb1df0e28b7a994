use std::io::Write;

use num_traits::One;

use crate::formatter::{Formatter, plural};
use crate::report::Report;

pub struct TextFormatter {
    pub show_counts: bool,
}

impl Formatter for TextFormatter {
    fn format_to(&self, report: &Report, out: &mut dyn Write) {
        if self.show_counts {
            for entry in &report.entries {
                let _ = writeln!(out, "{}: {}", entry.target, entry.count);
            }
            let _ = writeln!(out);
        }
        let targets = report.target_count();
        let _ = writeln!(
            out,
            "{targets} {} checked, {} decomposable, {} {}",
            plural(targets, "target", "targets"),
            report.decomposable(),
            report.total,
            if report.total.is_one() {
                "decomposition"
            } else {
                "decompositions"
            },
        );
    }
}
