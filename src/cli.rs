//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Ask a research assistant for arXiv papers and render the answers.
///
/// Answers that look like paper lists are parsed into records and shown as
/// a structured report, a short summary, or a (title, URL) table.
#[derive(Parser, Debug)]
#[command(name = "arxiv-assistant")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: $XDG_CONFIG_HOME/arxiv-assistant/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask one question and render the answer
    Ask(AskArgs),
    /// Render an answer saved to a file (or piped on stdin) without any network access
    Parse(ParseArgs),
    /// Interactive session: one question per line, `exit` or `quit` to stop
    Chat(ChatArgs),
}

/// How an answer is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Report plus table for paper lists, the answer as-is otherwise
    Auto,
    /// Every parsed record with labeled fields
    Report,
    /// The first few records with categories, link, and summary
    Summary,
    /// Markdown table of titles and URLs
    Table,
    /// Parsed records as JSON
    Json,
    /// The cleaned answer text
    Raw,
}

/// Rendering flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Output format [default: auto]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Records shown by the summary format (1-50) [default: 3]
    #[arg(short = 'n', long = "max", value_parser = clap::value_parser!(u8).range(1..=50))]
    pub max: Option<u8>,

    /// Export the paper table as CSV (optionally to PATH; use --csv=PATH)
    #[arg(long, value_name = "PATH", num_args = 0..=1, require_equals = true)]
    pub csv: Option<Option<PathBuf>>,
}

/// Connection flags for the research service.
#[derive(Args, Debug, Clone, Default)]
pub struct ServiceArgs {
    /// Bearer token for the flow API
    #[arg(long, env = "LANGFLOW_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// OpenAI key forwarded to the flow's agent component
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Flow run URL
    #[arg(long, env = "LANGFLOW_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (1-600) [default: 120]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..=600))]
    pub timeout: Option<u64>,
}

/// Arguments for `ask`.
#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// Question to ask (multiple words are joined with spaces)
    #[arg(required = true, value_name = "QUESTION")]
    pub question: Vec<String>,

    #[command(flatten)]
    pub render: RenderArgs,

    #[command(flatten)]
    pub service: ServiceArgs,
}

impl AskArgs {
    /// The question as one line.
    #[must_use]
    pub fn question_text(&self) -> String {
        self.question.join(" ")
    }
}

/// Arguments for `parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// File holding the answer text (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Arguments for `chat`.
#[derive(Args, Debug, Clone)]
pub struct ChatArgs {
    /// Write the session transcript (markdown) to PATH on exit
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    #[command(flatten)]
    pub render: RenderArgs,

    #[command(flatten)]
    pub service: ServiceArgs,
}
