//! Rendering answers to stdout and exporting the paper table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assistant_core::parser::{Record, parse_records};
use assistant_core::present::{
    NO_PAPERS_MESSAGE, csv_file_name, export_csv, format_markdown_table, format_report,
    format_summary, to_table,
};
use assistant_core::Presentation;
use tracing::{info, warn};

use super::settings::{CsvTarget, RenderSettings};
use crate::cli::OutputFormat;

/// Renders an answer in the requested format.
///
/// `auto` follows the display decision. The record formats (`report`,
/// `summary`, `table`, `json`) render whatever records the text yields,
/// even when it was not classified as a paper list.
pub(crate) fn render_answer(
    text: &str,
    presentation: &Presentation,
    settings: &RenderSettings,
) -> Result<String> {
    let parsed;
    let records: &[Record] = if presentation.is_papers() {
        presentation.records()
    } else {
        parsed = parse_records(text);
        &parsed
    };

    let rendered = match settings.format {
        OutputFormat::Auto => presentation.to_markdown(),
        OutputFormat::Raw => text.to_string(),
        OutputFormat::Report => format_report(records),
        OutputFormat::Summary => format_summary(records, settings.max_count),
        OutputFormat::Table => {
            let rows = to_table(records);
            if rows.is_empty() {
                NO_PAPERS_MESSAGE.to_string()
            } else {
                format_markdown_table(&rows)
            }
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(records).context("Failed to serialize records")?
        }
    };
    Ok(rendered)
}

/// Writes the paper table when an export was requested.
///
/// Returns the written path, or `None` when nothing was exported.
pub(crate) fn export_table(
    presentation: &Presentation,
    target: &CsvTarget,
) -> Result<Option<PathBuf>> {
    let path = match target {
        CsvTarget::Off => return Ok(None),
        CsvTarget::Timestamped => next_free_path(Path::new(&csv_file_name(&chrono::Local::now()))),
        CsvTarget::Path(path) => path.clone(),
    };

    let rows = presentation.table();
    if rows.is_empty() {
        warn!("Answer has no paper table; skipping CSV export");
        return Ok(None);
    }

    let written = export_csv(rows, &path)?;
    info!(path = %path.display(), rows = written, "Exported paper table");
    Ok(Some(path))
}

/// Returns `path`, or `<stem>_<n>.<ext>` for the first `n` that is not taken.
fn next_free_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    (2u32..)
        .map(|n| path.with_file_name(format!("{stem}_{n}{extension}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Prints one rendered answer and runs the export, if any.
pub(crate) fn emit_answer(
    text: &str,
    presentation: &Presentation,
    settings: &RenderSettings,
) -> Result<()> {
    let rendered = render_answer(text, presentation, settings)?;
    println!("{}", rendered.trim_end());

    if let Some(path) = export_table(presentation, &settings.csv)? {
        eprintln!("Saved paper table to {}", path.display());
    }
    Ok(())
}
