//! Parse command handler: render a saved answer without the network.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use assistant_core::{clean, present_response};
use tracing::debug;

use super::RunContext;
use super::output::emit_answer;
use super::settings::RenderSettings;
use crate::cli::ParseArgs;

pub fn run_parse_command(args: &ParseArgs, ctx: &RunContext) -> Result<()> {
    let settings = RenderSettings::resolve(&args.render, &ctx.file_config);
    let raw = read_input(args.file.as_deref())?;
    debug!(input_len = raw.len(), format = ?settings.format, "Parsing saved answer");

    let text = clean(&raw);
    let presentation = present_response(&text);
    emit_answer(&text, &presentation, &settings)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read answer file '{}'", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read answer from stdin")?;
            Ok(buffer)
        }
    }
}
