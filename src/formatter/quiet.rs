use std::io::Write;

use crate::formatter::Formatter;
use crate::report::Report;

/// Prints the total and nothing else.
pub struct QuietFormatter;

impl Formatter for QuietFormatter {
    fn format_to(&self, report: &Report, out: &mut dyn Write) {
        let _ = writeln!(out, "{}", report.total);
    }
}
