//! Full structured report: every field of every record, labeled.

use crate::parser::Record;

use super::{NO_PAPERS_MESSAGE, tidy_field};

/// Divider emitted after each record.
pub const RECORD_DIVIDER: &str = "---";

/// Renders every record as a labeled block followed by a divider.
///
/// Title is always shown. Authors, published date, summary and link are
/// shown only when non-empty after tidying. Categories are not shown.
#[must_use]
pub fn format_report(records: &[Record]) -> String {
    if records.is_empty() {
        return NO_PAPERS_MESSAGE.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    for record in records {
        lines.push(format!("**Title:** {}", tidy_field(&record.title)));
        lines.push(String::new());

        let optional = [
            ("Authors", record.authors.as_str()),
            ("Published", record.published.as_str()),
            ("Summary", record.summary.as_str()),
            ("PDF Link", record.url.as_str()),
        ];
        for (label, value) in optional {
            let value = tidy_field(value);
            if value.is_empty() {
                continue;
            }
            lines.push(format!("**{label}:** {value}"));
            lines.push(String::new());
        }

        lines.push(RECORD_DIVIDER.to_string());
    }
    lines.join("\n")
}
