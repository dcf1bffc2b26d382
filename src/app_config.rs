//! Application configuration loading for CLI defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;

use crate::cli::OutputFormat;

const APP_DIR: &str = "arxiv-assistant";
const CONFIG_FILE: &str = "config.toml";

/// TOML-backed file configuration for assistant defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Flow run endpoint.
    pub api_url: Option<String>,
    /// Flow component that receives the OpenAI key tweak.
    pub component_id: Option<String>,
    /// Request timeout in seconds (1..=600).
    pub timeout_secs: Option<u64>,
    /// Records shown by the summary format (1..=50).
    pub summary_count: Option<u8>,
    /// Default output format.
    pub format: Option<OutputFormat>,
    /// Default verbosity mode.
    pub verbosity: Option<VerbositySetting>,
}

/// Supported config verbosity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbositySetting {
    Default,
    Verbose,
    Quiet,
    Debug,
}

impl VerbositySetting {
    /// Log filter used when no CLI flag or `RUST_LOG` overrides it.
    #[must_use]
    pub fn default_level(self) -> &'static str {
        match self {
            Self::Default => "warn",
            Self::Verbose => "info",
            Self::Quiet => "error",
            Self::Debug => "debug",
        }
    }
}

/// Loaded config metadata.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// Path that was consulted, if any could be resolved.
    pub path: Option<PathBuf>,
    /// Parsed file config; default when no file exists.
    pub config: FileConfig,
    /// Whether configuration was loaded from disk.
    pub loaded_from_file: bool,
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/arxiv-assistant/config.toml`
/// 2. `$HOME/.config/arxiv-assistant/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config_home).join(APP_DIR).join(CONFIG_FILE));
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILE),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from an explicit path, or from the default path if present.
///
/// An explicit path must exist; a missing default file is not an error.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let config = load_file_config(path)?;
        return Ok(LoadedConfig {
            path: Some(path.to_path_buf()),
            config,
            loaded_from_file: true,
        });
    }

    let path = resolve_default_config_path();
    let Some(path_ref) = path.as_deref() else {
        return Ok(LoadedConfig::default());
    };

    if !path_ref.exists() {
        return Ok(LoadedConfig {
            path,
            ..LoadedConfig::default()
        });
    }

    let config = load_file_config(path_ref)?;
    Ok(LoadedConfig {
        path,
        config,
        loaded_from_file: true,
    })
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_no = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_no}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();
        let invalid = || format!("Invalid `{key}` value on line {line_no}");

        match key {
            "api_url" => {
                cfg.api_url = Some(parse_string_literal(value).with_context(invalid)?);
            }
            "component_id" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                if parsed.trim().is_empty() {
                    bail!("Invalid `component_id` value on line {line_no}: must not be empty");
                }
                cfg.component_id = Some(parsed);
            }
            "timeout_secs" => {
                let parsed = parse_integer_u64(value).with_context(invalid)?;
                check_range(key, line_no, parsed, 1, 600)?;
                cfg.timeout_secs = Some(parsed);
            }
            "summary_count" => {
                let parsed = parse_integer_u64(value).with_context(invalid)?;
                check_range(key, line_no, parsed, 1, 50)?;
                cfg.summary_count = Some(u8::try_from(parsed).with_context(invalid)?);
            }
            "format" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.format = Some(OutputFormat::from_str(&parsed, true).map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid `format` value '{parsed}' on line {line_no}. Expected one of: auto, report, summary, table, json, raw"
                    )
                })?);
            }
            "verbosity" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.verbosity = Some(parse_verbosity(&parsed).with_context(|| {
                    format!("Invalid `verbosity` value '{parsed}' on line {line_no}")
                })?);
            }
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_no}");
            }
        }
    }
    Ok(cfg)
}

fn check_range(key: &str, line_no: usize, value: u64, min: u64, max: u64) -> Result<()> {
    if !(min..=max).contains(&value) {
        bail!(
            "Invalid config value for `{key}` on line {line_no}: {value}. Expected range: {min}..={max}"
        );
    }
    Ok(())
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

fn parse_integer_u64(raw_value: &str) -> Result<u64> {
    let token = raw_value.trim();
    if token.is_empty() {
        bail!("Expected integer value");
    }
    let value = token.parse::<i128>()?;
    if value < 0 {
        bail!("Expected non-negative integer");
    }
    u64::try_from(value).map_err(|_| anyhow::anyhow!("Integer value out of range for u64"))
}

fn parse_verbosity(value: &str) -> Result<VerbositySetting> {
    match value {
        "default" => Ok(VerbositySetting::Default),
        "verbose" => Ok(VerbositySetting::Verbose),
        "quiet" => Ok(VerbositySetting::Quiet),
        "debug" => Ok(VerbositySetting::Debug),
        _ => bail!("Expected one of: default, verbose, quiet, debug"),
    }
}
