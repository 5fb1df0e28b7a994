use std::io::Write;

use serde::Serialize;

use crate::formatter::Formatter;
use crate::report::Report;

pub struct JsonFormatter {
    pub show_counts: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    targets: Option<Vec<Entry<'a>>>,
}

/// Counts are unbounded, so they are written as decimal strings.
#[derive(Serialize)]
struct Metadata {
    method: &'static str,
    targets: usize,
    decomposable: usize,
    total: String,
}

#[derive(Serialize)]
struct Entry<'a> {
    target: &'a str,
    count: String,
}

impl Formatter for JsonFormatter {
    fn format_to(&self, report: &Report, out: &mut dyn Write) {
        let targets = self.show_counts.then(|| {
            report
                .entries
                .iter()
                .map(|e| Entry {
                    target: &e.target,
                    count: e.count.to_string(),
                })
                .collect()
        });

        let output = JsonOutput {
            metadata: Metadata {
                method: report.method.name(),
                targets: report.target_count(),
                decomposable: report.decomposable(),
                total: report.total.to_string(),
            },
            targets,
        };
        if serde_json::to_writer_pretty(&mut *out, &output).is_ok() {
            let _ = writeln!(out);
        }
    }
}
