//! Text parsing for assistant responses that describe research papers.
//!
//! This module turns loosely formatted markdown into paper records. It is
//! shallow, line-oriented pattern matching: no grammar, no validation of
//! what the text claims.
//!
//! # Pipeline
//!
//! - [`clean`] decodes escaped newlines/quotes and canonicalizes bullets and
//!   bold headings
//! - [`parse_records`] scans lines, opening a record on each title line and
//!   attributing author/date/summary/URL lines to it
//! - [`is_paper_list`] decides whether the text is a multi-paper list at all
//!
//! Nothing here fails: malformed input degrades to fewer or sparser records.
//!
//! # Example
//!
//! ```
//! use assistant_core::parser::{clean, is_paper_list, parse_records};
//!
//! let text = clean("1. **Title**: Deep Learning Basics\\nAuthors: J. Doe\\n2. Transformers");
//! let records = parse_records(&text);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].authors, "J. Doe");
//! assert!(is_paper_list(&text));
//! ```

mod classify;
mod cleaner;
mod patterns;
mod record;
mod scanner;

pub use classify::{MIN_LIST_LEN, is_paper_list, is_paper_list_with};
pub use cleaner::{clean, has_structural_marker};
pub use patterns::{
    FIELD_ORDER, FieldKind, TITLE_STYLES, TitleMatch, TitleStyle, match_field, match_title,
    unwrap_markdown_link,
};
pub use record::{NOT_AVAILABLE, Record, RecordSequence, UNKNOWN_TITLE};
pub use scanner::{LineOutcome, RecordScanner, ScanState, parse_records};
