//! Progress UI (spinner) while waiting on the research service.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Message shown while a question is in flight.
pub(crate) const SEARCHING_MESSAGE: &str = "Searching ArXiv and processing...";

pub(crate) fn is_dumb_terminal() -> bool {
    std::env::var("TERM")
        .map(|value| value.eq_ignore_ascii_case("dumb"))
        .unwrap_or(false)
}

pub(crate) fn should_use_spinner(
    stderr_is_terminal: bool,
    quiet: bool,
    dumb_terminal: bool,
) -> bool {
    stderr_is_terminal && !quiet && !dumb_terminal
}

/// Spinner handle; a no-op when disabled.
pub(crate) struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Starts a spinner on stderr when `enabled`.
    pub(crate) fn start(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Stops and erases the spinner.
    pub(crate) fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_use_spinner_requires_interactive_stderr() {
        assert!(should_use_spinner(true, false, false));
        assert!(!should_use_spinner(false, false, false));
        assert!(!should_use_spinner(true, true, false));
        assert!(!should_use_spinner(true, false, true));
    }

    #[test]
    fn test_disabled_spinner_is_noop() {
        let spinner = Spinner::start(false, SEARCHING_MESSAGE);
        assert!(spinner.bar.is_none());
        spinner.finish();
    }

    #[test]
    fn test_enabled_spinner_finishes_cleanly() {
        let spinner = Spinner::start(true, SEARCHING_MESSAGE);
        assert!(spinner.bar.is_some());
        spinner.finish();
    }
}
