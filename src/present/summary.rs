//! Short display of the first few records.

use crate::parser::Record;

use super::NO_PAPERS_MESSAGE;

/// Default number of records shown by [`format_summary`].
pub const DEFAULT_SUMMARY_COUNT: usize = 3;

/// Renders at most `max_count` records under a "Found N" heading.
///
/// Each record gets a numbered subheading plus categories, link and summary
/// when present, then a divider.
#[must_use]
pub fn format_summary(records: &[Record], max_count: usize) -> String {
    if records.is_empty() {
        return NO_PAPERS_MESSAGE.to_string();
    }

    let shown = &records[..records.len().min(max_count)];
    let mut output = format!("## \u{1f4c4} Found {} Recent Papers\n\n", shown.len());

    for (index, record) in shown.iter().enumerate() {
        output.push_str(&format!("### {}. {}\n", index + 1, record.title));
        if !record.categories.is_empty() {
            output.push_str(&format!("**Categories:** `{}`\n\n", record.categories));
        }
        if !record.url.is_empty() {
            output.push_str(&format!("**Link:** [{url}]({url})\n\n", url = record.url));
        }
        if !record.summary.is_empty() {
            output.push_str(&format!("**Summary:** {}\n\n", record.summary));
        }
        output.push_str("---\n\n");
    }

    output
}
