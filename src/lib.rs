//! ArXiv Assistant Core Library
//!
//! This library turns free-form answers from a research assistant service
//! into structured paper records and renders them for display.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Text cleaning, record scanning, paper-list classification
//! - [`present`] - Report, summary, and table renderers plus CSV export
//! - [`upstream`] - Research service trait and the flow run HTTP client
//! - [`app`] - Display decision and conversation history

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod parser;
pub mod present;
pub mod upstream;

mod user_agent;

// Re-export commonly used types
pub use app::{Conversation, Message, Presentation, Role, ask_and_present, present_response};
pub use parser::{Record, RecordSequence, clean, is_paper_list, parse_records};
pub use present::{
    DEFAULT_SUMMARY_COUNT, NO_PAPERS_MESSAGE, TableRow, format_report, format_summary, to_table,
};
pub use upstream::{LangflowClient, LangflowConfig, ResearchService, UpstreamError};
