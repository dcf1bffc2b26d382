//! Merges CLI flags, environment, and file config into runtime settings.
//!
//! Precedence: CLI flag / env var > config file > built-in default.

use std::path::PathBuf;

use anyhow::{Result, bail};
use assistant_core::DEFAULT_SUMMARY_COUNT;
use assistant_core::upstream::{DEFAULT_COMPONENT_ID, DEFAULT_TIMEOUT_SECS, LangflowConfig};

use crate::app_config::FileConfig;
use crate::cli::{OutputFormat, RenderArgs, ServiceArgs};

/// Where (and whether) to export the paper table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CsvTarget {
    /// No export.
    Off,
    /// Timestamped file name in the current directory.
    Timestamped,
    /// Explicit path.
    Path(PathBuf),
}

/// Resolved rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderSettings {
    pub format: OutputFormat,
    pub max_count: usize,
    pub csv: CsvTarget,
}

impl RenderSettings {
    pub(crate) fn resolve(args: &RenderArgs, file: &FileConfig) -> Self {
        let max_count = args
            .max
            .or(file.summary_count)
            .map_or(DEFAULT_SUMMARY_COUNT, usize::from);
        let csv = match &args.csv {
            None => CsvTarget::Off,
            Some(None) => CsvTarget::Timestamped,
            Some(Some(path)) => CsvTarget::Path(path.clone()),
        };
        Self {
            format: args.format.or(file.format).unwrap_or(OutputFormat::Auto),
            max_count,
            csv,
        }
    }
}

/// Builds the upstream client configuration, failing early on missing
/// credentials or endpoint.
pub(crate) fn service_config(args: &ServiceArgs, file: &FileConfig) -> Result<LangflowConfig> {
    let Some(token) = args.token.as_deref().filter(|t| !t.trim().is_empty()) else {
        bail!(
            "Missing API token.\n  Suggestion: Set LANGFLOW_TOKEN (environment or .env) or pass --token"
        );
    };
    let Some(api_url) = args
        .api_url
        .as_deref()
        .or(file.api_url.as_deref())
        .filter(|u| !u.trim().is_empty())
    else {
        bail!(
            "Missing flow run URL.\n  Suggestion: Set LANGFLOW_API_URL, pass --api-url, or add `api_url` to the config file"
        );
    };

    let config = LangflowConfig::new(api_url, token)?
        .with_openai_api_key(args.openai_api_key.as_deref())
        .with_component_id(file.component_id.as_deref().unwrap_or(DEFAULT_COMPONENT_ID))
        .with_timeout_secs(args.timeout.or(file.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS));
    Ok(config)
}
