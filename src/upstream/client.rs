//! HTTP client for a Langflow-style flow run endpoint.
//!
//! One request per question: the question is posted as a chat input, and the
//! answer text is pulled out of the run response by
//! [`extract_message_text`](super::extract_message_text).

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::error::UpstreamError;
use super::response::extract_message_text;
use super::ResearchService;
use crate::user_agent;

/// Flow component that receives the OpenAI key tweak by default.
pub const DEFAULT_COMPONENT_ID: &str = "Agent-Ex18F";

/// Default whole-request timeout; flow runs can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`LangflowClient`].
#[derive(Clone)]
pub struct LangflowConfig {
    api_url: Url,
    token: String,
    openai_api_key: Option<String>,
    component_id: String,
    timeout_secs: u64,
}

impl LangflowConfig {
    /// Creates a config for the given run URL and bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::InvalidConfig`] when the URL is not an
    /// absolute http(s) URL or the token is blank.
    pub fn new(api_url: &str, token: &str) -> Result<Self, UpstreamError> {
        let parsed = Url::parse(api_url.trim()).map_err(|err| {
            UpstreamError::invalid_config(
                &format!("API URL '{api_url}' is not valid: {err}"),
                "Set LANGFLOW_API_URL to the full flow run URL",
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(UpstreamError::invalid_config(
                &format!("API URL scheme '{}' is not supported", parsed.scheme()),
                "Use an http:// or https:// run URL",
            ));
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(UpstreamError::invalid_config(
                "API token is empty",
                "Set LANGFLOW_TOKEN or pass --token",
            ));
        }

        Ok(Self {
            api_url: parsed,
            token: token.to_string(),
            openai_api_key: None,
            component_id: DEFAULT_COMPONENT_ID.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Sets the OpenAI key forwarded to the flow as a component tweak.
    /// Blank keys are ignored.
    #[must_use]
    pub fn with_openai_api_key(mut self, key: Option<&str>) -> Self {
        self.openai_api_key = key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string);
        self
    }

    /// Sets the component that receives the key tweak.
    #[must_use]
    pub fn with_component_id(mut self, component_id: &str) -> Self {
        self.component_id = component_id.to_string();
        self
    }

    /// Sets the request timeout (minimum 1 second).
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs.max(1);
        self
    }

    /// Run endpoint.
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Component id used for the key tweak.
    #[must_use]
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// Request timeout in seconds.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Whether an OpenAI key will be sent.
    #[must_use]
    pub fn has_openai_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

impl fmt::Debug for LangflowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LangflowConfig")
            .field("api_url", &self.api_url.as_str())
            .field("token", &"<redacted>")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("component_id", &self.component_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    input_value: &'a str,
    output_type: &'static str,
    input_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tweaks: Option<Map<String, Value>>,
}

/// Builds the JSON run request for one question.
///
/// The `tweaks` object is omitted when no OpenAI key is configured.
#[must_use]
pub fn build_payload(config: &LangflowConfig, question: &str) -> Value {
    let tweaks = config.openai_api_key.as_ref().map(|key| {
        let mut tweaks = Map::new();
        tweaks.insert(config.component_id.clone(), json!({ "api_key": key }));
        tweaks
    });
    let request = RunRequest {
        input_value: question,
        output_type: "chat",
        input_type: "chat",
        tweaks,
    };
    serde_json::to_value(request).unwrap_or(Value::Null)
}

/// [`ResearchService`] backed by a flow run endpoint.
#[derive(Debug, Clone)]
pub struct LangflowClient {
    client: Client,
    config: LangflowConfig,
}

impl LangflowClient {
    /// Creates a client with a pooled HTTP connection.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::InvalidConfig`] when the HTTP client cannot
    /// be constructed.
    pub fn new(config: LangflowConfig) -> Result<Self, UpstreamError> {
        let client = build_http_client(config.timeout_secs)?;
        Ok(Self { client, config })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &LangflowConfig {
        &self.config
    }

    /// Posts the question and returns the raw response body on success.
    #[instrument(skip(self, question), fields(question_len = question.len()))]
    async fn run(&self, question: &str) -> Result<String, UpstreamError> {
        let url = self.config.api_url.as_str();
        let payload = build_payload(&self.config, question);

        debug!(
            url,
            tweaks = self.config.has_openai_api_key(),
            "Posting flow run request"
        );
        let response = self
            .client
            .post(self.config.api_url.clone())
            .bearer_auth(&self.config.token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|err| UpstreamError::from_transport(url, self.config.timeout_secs, err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| UpstreamError::from_transport(url, self.config.timeout_secs, err))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Flow run returned an error status");
            return Err(UpstreamError::from_status(url, status.as_u16(), &body));
        }

        info!(status = status.as_u16(), body_len = body.len(), "Flow run completed");
        Ok(body)
    }
}

#[async_trait]
impl ResearchService for LangflowClient {
    async fn ask(&self, question: &str) -> Result<String, UpstreamError> {
        let body = self.run(question).await?;
        Ok(extract_message_text(&body))
    }
}

fn build_http_client(timeout_secs: u64) -> Result<Client, UpstreamError> {
    match catch_unwind(AssertUnwindSafe(|| base_builder(timeout_secs).build())) {
        Ok(Ok(client)) => Ok(client),
        Ok(Err(err)) => Err(client_build_error(&err.to_string())),
        Err(_) => {
            // System proxy lookup can panic in some sandboxed environments.
            warn!("HTTP client hit system proxy panic; building without proxy lookup");
            base_builder(timeout_secs)
                .no_proxy()
                .build()
                .map_err(|err| client_build_error(&err.to_string()))
        }
    }
}

fn base_builder(timeout_secs: u64) -> reqwest::ClientBuilder {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent::default_user_agent())
        .gzip(true)
}

fn client_build_error(detail: &str) -> UpstreamError {
    UpstreamError::invalid_config(
        &format!("HTTP client construction failed: {detail}"),
        "Check proxy and TLS settings in the environment",
    )
}
