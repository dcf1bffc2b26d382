//! Chat command handler: a question per stdin line until `exit`/`quit`.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use assistant_core::upstream::ResearchService;
use assistant_core::{Conversation, LangflowClient};
use tracing::{debug, info};

use super::output::emit_answer;
use super::settings::{RenderSettings, service_config};
use super::{RunContext, with_spinner};
use crate::cli::ChatArgs;

const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

pub async fn run_chat_command(args: &ChatArgs, ctx: &RunContext) -> Result<()> {
    let settings = RenderSettings::resolve(&args.render, &ctx.file_config);
    let config = service_config(&args.service, &ctx.file_config)?;
    let client = LangflowClient::new(config)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive && !ctx.quiet {
        eprintln!("Ask about research papers (be specific for better results). Type `exit` to quit.");
    }

    let conversation = chat_loop(&client, stdin.lock(), &settings, ctx.quiet, interactive).await?;

    if let Some(path) = &args.transcript {
        fs::write(path, conversation.render_transcript())
            .with_context(|| format!("Failed to write transcript '{}'", path.display()))?;
        info!(path = %path.display(), turns = conversation.messages().len(), "Transcript written");
    }
    Ok(())
}

async fn chat_loop<R: BufRead>(
    service: &dyn ResearchService,
    reader: R,
    settings: &RenderSettings,
    quiet: bool,
    prompt: bool,
) -> Result<Conversation> {
    let mut conversation = Conversation::new();
    let mut lines = reader.lines();

    loop {
        if prompt {
            eprint!("> ");
            io::stderr().flush().ok();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read question from stdin")?;
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if is_exit_command(question) {
            debug!("Chat ended by user");
            break;
        }

        let presentation = with_spinner(quiet, conversation.ask(service, question)).await;
        let answer = conversation
            .messages()
            .last()
            .map_or("", |message| message.content.as_str());
        emit_answer(answer, &presentation, settings)?;
        println!();
    }

    Ok(conversation)
}

fn is_exit_command(line: &str) -> bool {
    EXIT_COMMANDS
        .iter()
        .any(|command| line.eq_ignore_ascii_case(command))
}
