//! Heuristic check for whether assistant text is a list of papers.

use std::sync::LazyLock;

use regex::Regex;

use super::record::Record;
use super::scanner::parse_records;

/// Minimum number of records (or numbered lines) that makes a list.
pub const MIN_LIST_LEN: usize = 2;

#[allow(clippy::expect_used)]
static NUMBERED_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\. ").expect("numbered list line regex is valid")
});

/// Returns true if `text` looks like a multi-paper list.
///
/// Parses `text` and defers to [`is_paper_list_with`]. Callers that also
/// need the records should parse once and call [`is_paper_list_with`].
#[must_use]
pub fn is_paper_list(text: &str) -> bool {
    let records = parse_records(text);
    is_paper_list_with(&records, text)
}

/// Returns true if `records` (parsed from `text`) or `text` itself form a list.
///
/// A list has at least [`MIN_LIST_LEN`] records, or failing that at least
/// [`MIN_LIST_LEN`] raw lines starting with `<number>. `. Lines are not
/// trimmed individually, so indented numbering does not count.
#[must_use]
pub fn is_paper_list_with(records: &[Record], text: &str) -> bool {
    if records.len() >= MIN_LIST_LEN {
        return true;
    }
    count_numbered_lines(text) >= MIN_LIST_LEN
}

fn count_numbered_lines(text: &str) -> usize {
    text.trim()
        .split('\n')
        .filter(|line| NUMBERED_LINE_PATTERN.is_match(line))
        .count()
}
