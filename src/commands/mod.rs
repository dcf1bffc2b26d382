//! CLI command handlers.

mod ask;
mod chat;
mod output;
mod parse;
mod progress;
mod settings;

use std::io::{self, IsTerminal};

use crate::app_config::FileConfig;

pub use ask::run_ask_command;
pub use chat::run_chat_command;
pub use parse::run_parse_command;

/// Process-wide options every handler needs.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// `--quiet` was given.
    pub quiet: bool,
    /// Values from the config file (default when none was loaded).
    pub file_config: FileConfig,
}

/// Awaits a service call with the spinner running on an interactive stderr.
async fn with_spinner<F: Future>(quiet: bool, work: F) -> F::Output {
    let enabled = progress::should_use_spinner(
        io::stderr().is_terminal(),
        quiet,
        progress::is_dumb_terminal(),
    );
    let spinner = progress::Spinner::start(enabled, progress::SEARCHING_MESSAGE);
    let output = work.await;
    spinner.finish();
    output
}
