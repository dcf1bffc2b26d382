//! Line scanner that turns cleaned text into paper records.
//!
//! The scanner is a two-state machine: either no record is open, or exactly
//! one record is open and receives field lines. A title line closes the open
//! record (if any) and opens a new one; end of input closes the last one.

use std::mem;

use tracing::{debug, trace};

use super::patterns::{FieldKind, TitleStyle, match_field, match_title};
use super::record::{Record, RecordSequence};

/// Scanner state between lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// No title seen yet; field lines are dropped.
    #[default]
    Idle,
    /// A record is open and receives field lines.
    Open(Record),
}

/// What a single line did to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line, skipped.
    Blank,
    /// Title line: a new record was opened.
    Opened(TitleStyle),
    /// Field line: the open record was updated.
    Field(FieldKind),
    /// Line matched nothing usable (or no record was open).
    Dropped,
}

/// Incremental record scanner.
#[derive(Debug, Default)]
pub struct RecordScanner {
    state: ScanState,
    records: RecordSequence,
}

impl RecordScanner {
    /// Creates a scanner with no open record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Returns the records closed so far (excluding the open one).
    #[must_use]
    pub fn closed(&self) -> &[Record] {
        &self.records
    }

    /// Feeds one line of text.
    pub fn feed_line(&mut self, raw_line: &str) -> LineOutcome {
        let line = raw_line.trim();
        if line.is_empty() {
            return LineOutcome::Blank;
        }

        if let Some(title) = match_title(line) {
            self.close_open_record();
            trace!(style = %title.style, title = %title.text, "Opened record");
            self.state = ScanState::Open(Record::new(title.text));
            return LineOutcome::Opened(title.style);
        }

        let ScanState::Open(record) = &mut self.state else {
            return LineOutcome::Dropped;
        };

        match match_field(line) {
            Some((kind, value)) => {
                record.set_field(kind, value);
                LineOutcome::Field(kind)
            }
            None => LineOutcome::Dropped,
        }
    }

    /// Closes any open record and returns every record in source order.
    #[must_use]
    pub fn finish(mut self) -> RecordSequence {
        self.close_open_record();
        self.records
    }

    fn close_open_record(&mut self) {
        if let ScanState::Open(record) = mem::take(&mut self.state) {
            self.records.push(record);
        }
    }
}

/// Parses cleaned text into paper records.
///
/// Every title line opens a record, so the result holds one record per
/// title line in order of appearance. Empty input yields no records.
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
#[must_use]
pub fn parse_records(text: &str) -> RecordSequence {
    let mut scanner = RecordScanner::new();
    let mut dropped = 0usize;
    for line in text.split('\n') {
        if scanner.feed_line(line) == LineOutcome::Dropped {
            dropped += 1;
        }
    }

    let records = scanner.finish();
    debug!(records = records.len(), dropped, "Record scan complete");
    records
}
