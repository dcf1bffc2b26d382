//! Ask command handler: one question, one rendered answer.

use anyhow::{Result, bail};
use assistant_core::app::answer_text;
use assistant_core::{LangflowClient, present_response};
use tracing::debug;

use super::output::emit_answer;
use super::settings::{RenderSettings, service_config};
use super::{RunContext, with_spinner};
use crate::cli::AskArgs;

pub async fn run_ask_command(args: &AskArgs, ctx: &RunContext) -> Result<()> {
    let question = args.question_text();
    if question.trim().is_empty() {
        bail!("Question is empty.\n  Suggestion: Pass the question as arguments, e.g. arxiv-assistant ask \"recent papers on RLHF\"");
    }

    let settings = RenderSettings::resolve(&args.render, &ctx.file_config);
    let config = service_config(&args.service, &ctx.file_config)?;
    debug!(?config, format = ?settings.format, "Ask command configured");
    let client = LangflowClient::new(config)?;

    let answer = with_spinner(ctx.quiet, answer_text(&client, &question)).await;
    let presentation = present_response(&answer);
    emit_answer(&answer, &presentation, &settings)
}
