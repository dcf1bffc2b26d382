//! Error types for upstream assistant calls.
//!
//! Messages follow the What/Why/Fix pattern used across the project.
//! [`UpstreamError::user_message`] gives the short text shown in place of
//! an answer when a turn fails.

use thiserror::Error;

/// Maximum number of body characters kept in [`UpstreamError::HttpStatus`].
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Errors that can occur while asking the upstream assistant.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The bearer token was rejected (HTTP 401).
    #[error(
        "authentication failed (HTTP 401) calling {url}\n  Suggestion: Check your LANGFLOW_TOKEN"
    )]
    AuthFailed {
        /// Run endpoint that rejected the token.
        url: String,
    },

    /// The flow does not exist at the configured endpoint (HTTP 404).
    #[error("flow not found (HTTP 404) at {url}\n  Suggestion: Check the configured API URL")]
    FlowNotFound {
        /// Run endpoint that returned 404.
        url: String,
    },

    /// The service gateway gave up waiting for the flow (HTTP 504).
    #[error("gateway timeout (HTTP 504) from {url}\n  Suggestion: Try a simpler query")]
    GatewayTimeout {
        /// Run endpoint that timed out.
        url: String,
    },

    /// The client-side request timeout elapsed.
    #[error("request to {url} timed out after {timeout_secs}s\n  Suggestion: Try a simpler query")]
    Timeout {
        /// Run endpoint.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Any other non-success HTTP status.
    #[error("HTTP {status} from {url}: {body_preview}")]
    HttpStatus {
        /// Run endpoint.
        url: String,
        /// Response status code.
        status: u16,
        /// Start of the response body.
        body_preview: String,
    },

    /// Transport failure (DNS, connection refused, TLS, body read).
    #[error("request to {url} failed: {source}")]
    Request {
        /// Run endpoint.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Client configuration is unusable.
    #[error("invalid upstream configuration: {reason}\n  Suggestion: {suggestion}")]
    InvalidConfig {
        /// What is wrong.
        reason: String,
        /// How to fix it.
        suggestion: String,
    },
}

impl UpstreamError {
    /// Maps a non-success status code to the matching variant.
    #[must_use]
    pub fn from_status(url: &str, status: u16, body: &str) -> Self {
        match status {
            401 => Self::AuthFailed {
                url: url.to_string(),
            },
            404 => Self::FlowNotFound {
                url: url.to_string(),
            },
            504 => Self::GatewayTimeout {
                url: url.to_string(),
            },
            _ => Self::HttpStatus {
                url: url.to_string(),
                status,
                body_preview: body.chars().take(BODY_PREVIEW_CHARS).collect(),
            },
        }
    }

    /// Classifies a transport error, separating client timeouts.
    #[must_use]
    pub fn from_transport(url: &str, timeout_secs: u64, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout_secs,
            }
        } else {
            Self::Request {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Creates an `InvalidConfig` error.
    #[must_use]
    pub fn invalid_config(reason: &str, suggestion: &str) -> Self {
        Self::InvalidConfig {
            reason: reason.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    /// Returns the HTTP status behind this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthFailed { .. } => Some(401),
            Self::FlowNotFound { .. } => Some(404),
            Self::GatewayTimeout { .. } => Some(504),
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Timeout { .. } | Self::Request { .. } | Self::InvalidConfig { .. } => None,
        }
    }

    /// Short user-facing text shown instead of an answer.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::GatewayTimeout { .. } => {
                "\u{274c} Error: Gateway Timeout. The request took too long. Try a simpler query."
                    .to_string()
            }
            Self::AuthFailed { .. } => {
                "\u{274c} Error: Authentication failed. Please check your LANGFLOW_TOKEN."
                    .to_string()
            }
            Self::FlowNotFound { .. } => {
                "\u{274c} Error: Flow not found. Please check your API URL.".to_string()
            }
            Self::HttpStatus {
                status,
                body_preview,
                ..
            } => format!("\u{274c} HTTP error {status}: {body_preview}"),
            Self::Timeout { .. } => {
                "\u{274c} Error: The request timed out. Try a simpler query.".to_string()
            }
            Self::Request { source, .. } => format!("\u{274c} Request error: {source}"),
            Self::InvalidConfig { reason, .. } => {
                format!("\u{274c} Configuration error: {reason}")
            }
        }
    }
}
