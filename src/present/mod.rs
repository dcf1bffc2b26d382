//! Renderers for parsed paper records.
//!
//! All presenters are pure functions over a record slice and never fail:
//! - [`format_report`] - every record with labeled fields and dividers
//! - [`format_summary`] - first few records with categories, link, summary
//! - [`to_table`] - (title, URL) rows, exportable as CSV via [`export_csv`]

mod report;
mod summary;
mod table;

pub use report::{RECORD_DIVIDER, format_report};
pub use summary::{DEFAULT_SUMMARY_COUNT, format_summary};
pub use table::{ExportError, TableRow, csv_file_name, export_csv, format_markdown_table, to_table, write_csv};

/// Shown by the report presenters when there is nothing to render.
pub const NO_PAPERS_MESSAGE: &str = "No papers found in the expected format.";

/// Trims whitespace and stray `:` / `*` left over from markdown labels.
fn tidy_field(value: &str) -> &str {
    value
        .trim()
        .trim_matches(':')
        .trim_matches('*')
        .trim()
}
