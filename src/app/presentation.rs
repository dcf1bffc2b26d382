//! Display decision for one assistant answer.

use tracing::debug;

use crate::parser::{RecordSequence, is_paper_list_with, parse_records};
use crate::present::{
    TableRow, format_markdown_table, format_report, format_summary, to_table,
};
use crate::upstream::ResearchService;

/// How an answer should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// The answer is a paper list that parsed into at least one record.
    Papers {
        /// Parsed records in answer order.
        records: RecordSequence,
        /// Structured report of every record.
        report: String,
        /// (title, URL) projection.
        table: Vec<TableRow>,
    },
    /// Anything else, shown as the assistant wrote it.
    Raw(String),
}

impl Presentation {
    /// Whether the answer was recognized as a paper list.
    #[must_use]
    pub fn is_papers(&self) -> bool {
        matches!(self, Self::Papers { .. })
    }

    /// Parsed records, empty for raw answers.
    #[must_use]
    pub fn records(&self) -> &[crate::parser::Record] {
        match self {
            Self::Papers { records, .. } => records,
            Self::Raw(_) => &[],
        }
    }

    /// Table rows, empty for raw answers.
    #[must_use]
    pub fn table(&self) -> &[TableRow] {
        match self {
            Self::Papers { table, .. } => table,
            Self::Raw(_) => &[],
        }
    }

    /// Condensed summary of the first `max_count` records, if any.
    #[must_use]
    pub fn summary(&self, max_count: usize) -> Option<String> {
        match self {
            Self::Papers { records, .. } => Some(format_summary(records, max_count)),
            Self::Raw(_) => None,
        }
    }

    /// Markdown rendering: report followed by the table for papers,
    /// the text itself otherwise.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        match self {
            Self::Papers { report, table, .. } => {
                format!("{report}\n\n{}", format_markdown_table(table))
            }
            Self::Raw(text) => text.clone(),
        }
    }
}

/// Decides how to show an (already cleaned) answer.
///
/// The text is parsed once. It is presented as papers only when it looks
/// like a paper list and at least one record was recovered.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
#[must_use]
pub fn present_response(text: &str) -> Presentation {
    let records = parse_records(text);
    if is_paper_list_with(&records, text) && !records.is_empty() {
        debug!(records = records.len(), "Answer presented as paper list");
        let report = format_report(&records);
        let table = to_table(&records);
        Presentation::Papers {
            records,
            report,
            table,
        }
    } else {
        debug!("Answer presented as raw text");
        Presentation::Raw(text.to_string())
    }
}

/// Asks the service and returns the answer text. Failures become the
/// error's user-facing message.
pub async fn answer_text(service: &dyn ResearchService, question: &str) -> String {
    match service.ask(question).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "Research service request failed");
            err.user_message()
        }
    }
}

/// Runs one question through the service and decides how to show the answer.
pub async fn ask_and_present(service: &dyn ResearchService, question: &str) -> Presentation {
    present_response(&answer_text(service, question).await)
}
