//! Upstream research assistant.
//!
//! [`ResearchService`] is the seam between the presentation flow and the
//! remote assistant. [`LangflowClient`] implements it against a flow run
//! endpoint; tests substitute their own implementations.

mod client;
mod error;
mod response;

use async_trait::async_trait;

pub use client::{
    DEFAULT_COMPONENT_ID, DEFAULT_TIMEOUT_SECS, LangflowClient, LangflowConfig, build_payload,
};
pub use error::{BODY_PREVIEW_CHARS, UpstreamError};
pub use response::{SHAPE_ERROR_PREFIX, extract_message_text};

/// Something that can answer a research question with markdown text.
#[async_trait]
pub trait ResearchService: Send + Sync {
    /// Asks one question and returns the cleaned answer text.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when the assistant cannot be reached or
    /// rejects the request.
    async fn ask(&self, question: &str) -> Result<String, UpstreamError>;
}
