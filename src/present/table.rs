//! Two-column (title, URL) projection of records, with CSV export.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::parser::{NOT_AVAILABLE, Record, UNKNOWN_TITLE};

/// One row of the paper table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Display title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Link, or [`NOT_AVAILABLE`].
    #[serde(rename = "URL")]
    pub url: String,
}

/// Errors that can occur while exporting the table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV file could not be created.
    #[error("cannot create CSV file {path}: {source}\n  Suggestion: Check that the directory exists and is writable")]
    Create {
        /// Target path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Serializing or flushing rows failed.
    #[error("failed writing CSV to {path}: {source}")]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// Projects records onto (title, URL) rows.
///
/// A title in `[text](url)` form keeps only `text`. A title that is just the
/// word "title" (any case) becomes [`UNKNOWN_TITLE`]. A missing URL becomes
/// [`NOT_AVAILABLE`]. Empty input gives an empty table.
#[must_use]
pub fn to_table(records: &[Record]) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow {
            title: table_title(&record.title),
            url: if record.url.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                record.url.clone()
            },
        })
        .collect()
}

fn table_title(title: &str) -> String {
    let mut text = title;
    if text.starts_with('[')
        && text.ends_with(')')
        && let Some(end) = text.find("](")
    {
        text = &text[1..end];
    }

    if text.trim().eq_ignore_ascii_case("title") {
        UNKNOWN_TITLE.to_string()
    } else {
        text.to_string()
    }
}

/// Writes rows as CSV with a `Title,URL` header. Writes nothing for no rows.
///
/// # Errors
///
/// Returns [`csv::Error`] when serialization or the underlying writer fails.
pub fn write_csv<W: io::Write>(rows: &[TableRow], writer: W) -> Result<(), csv::Error> {
    if rows.is_empty() {
        return Ok(());
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Exports rows to a CSV file and returns the number of rows written.
///
/// No file is created for an empty table.
///
/// # Errors
///
/// Returns [`ExportError`] when the file cannot be created or written.
pub fn export_csv(rows: &[TableRow], path: &Path) -> Result<usize, ExportError> {
    if rows.is_empty() {
        debug!(path = %path.display(), "Empty table, skipping CSV export");
        return Ok(0);
    }

    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(rows, file).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = rows.len(), "Exported CSV");
    Ok(rows.len())
}

/// Renders rows as a markdown table with `Title` and `URL` columns.
///
/// Pipes inside cells are escaped. Empty input gives an empty string.
#[must_use]
pub fn format_markdown_table(rows: &[TableRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::from("| Title | URL |\n|---|---|\n");
    for row in rows {
        out.push_str(&format!(
            "| {} | {} |\n",
            escape_cell(&row.title),
            escape_cell(&row.url)
        ));
    }
    out
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Default export file name, e.g. `arxiv_papers_20240303_140509.csv`.
#[must_use]
pub fn csv_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!("arxiv_papers_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(title: &str, url: &str) -> Record {
        let mut record = Record::new(title);
        record.url = url.to_string();
        record
    }

    #[test]
    fn test_to_table_empty() {
        assert!(to_table(&[]).is_empty());
    }

    #[test]
    fn test_to_table_plain_title_and_url() {
        let rows = to_table(&[record("Paper", "https://arxiv.org/abs/1")]);
        assert_eq!(
            rows,
            vec![TableRow {
                title: "Paper".to_string(),
                url: "https://arxiv.org/abs/1".to_string(),
            }]
        );
    }

    #[test]
    fn test_to_table_missing_url_uses_placeholder() {
        let rows = to_table(&[record("Paper", "")]);
        assert_eq!(rows[0].url, NOT_AVAILABLE);
    }

    #[test]
    fn test_to_table_unwraps_markdown_link_title() {
        let rows = to_table(&[record("[Linked Paper](https://arxiv.org/abs/2)", "")]);
        assert_eq!(rows[0].title, "Linked Paper");
    }

    #[test]
    fn test_to_table_link_title_keeps_text_before_first_link_marker() {
        let rows = to_table(&[record("[A](b) and [C](d)", "")]);
        assert_eq!(rows[0].title, "A");
    }

    #[test]
    fn test_to_table_bare_title_word_becomes_unknown() {
        let rows = to_table(&[record("Title", ""), record(" TITLE ", ""), record("[title](x)", "")]);
        assert!(rows.iter().all(|row| row.title == UNKNOWN_TITLE));
    }

    #[test]
    fn test_write_csv_has_header_and_rows() {
        let rows = to_table(&[record("A, with comma", "https://arxiv.org/abs/1"), record("B", "")]);
        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Title,URL\n\"A, with comma\",https://arxiv.org/abs/1\nB,N/A\n"
        );
    }

    #[test]
    fn test_write_csv_empty_writes_nothing() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_export_csv_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.csv");
        let written = export_csv(&to_table(&[record("A", "")]), &path).unwrap();
        assert_eq!(written, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Title,URL\nA,N/A\n");
    }

    #[test]
    fn test_export_csv_empty_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.csv");
        assert_eq!(export_csv(&[], &path).unwrap(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_export_csv_missing_directory_is_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("papers.csv");
        let err = export_csv(&to_table(&[record("A", "")]), &path).unwrap_err();
        assert!(matches!(err, ExportError::Create { .. }));
        assert!(err.to_string().contains("Suggestion"));
    }

    #[test]
    fn test_format_markdown_table() {
        let rows = to_table(&[record("A | B", "https://arxiv.org/abs/1"), record("C", "")]);
        assert_eq!(
            format_markdown_table(&rows),
            "| Title | URL |\n|---|---|\n| A \\| B | https://arxiv.org/abs/1 |\n| C | N/A |\n"
        );
        assert_eq!(format_markdown_table(&[]), "");
    }

    #[test]
    fn test_csv_file_name_uses_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 3, 14, 5, 9).unwrap();
        assert_eq!(csv_file_name(&now), "arxiv_papers_20240303_140509.csv");
    }
}
