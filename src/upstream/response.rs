//! Extraction of the answer text from a flow run response.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::parser::clean;

/// Prefix of the diagnostic returned when the body has an unexpected shape.
pub const SHAPE_ERROR_PREFIX: &str = "Error parsing response structure";

#[derive(Debug, Deserialize)]
struct RunResponse {
    #[serde(default)]
    outputs: Option<Vec<RunOutput>>,
}

#[derive(Debug, Deserialize)]
struct RunOutput {
    #[serde(default)]
    outputs: Option<Vec<ComponentOutput>>,
}

#[derive(Debug, Deserialize)]
struct ComponentOutput {
    #[serde(default)]
    results: Option<ComponentResults>,
}

#[derive(Debug, Deserialize)]
struct ComponentResults {
    #[serde(default)]
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    data: Option<ChatMessageData>,
}

#[derive(Debug, Deserialize)]
struct ChatMessageData {
    #[serde(default)]
    text: Option<String>,
}

impl RunResponse {
    /// `outputs[0].outputs[0].results.message.text`, else `...message.data.text`.
    fn message_text(&self) -> Option<&str> {
        let message = self
            .outputs
            .as_deref()?
            .first()?
            .outputs
            .as_deref()?
            .first()?
            .results
            .as_ref()?
            .message
            .as_ref()?;

        message
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
            .or_else(|| message.data.as_ref()?.text.as_deref())
            .filter(|text| !text.is_empty())
    }
}

/// Pulls the assistant answer out of a run response body.
///
/// The answer is passed through [`clean`]. A well-formed body without an
/// answer is returned verbatim. A body that isn't JSON, or whose nested
/// fields have the wrong types, yields a [`SHAPE_ERROR_PREFIX`] diagnostic
/// as ordinary text.
#[tracing::instrument(skip(body), fields(body_len = body.len()))]
#[must_use]
pub fn extract_message_text(body: &str) -> String {
    let response: RunResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "Unexpected run response shape");
            return format!("{SHAPE_ERROR_PREFIX}: {err}");
        }
    };

    match response.message_text() {
        Some(text) => clean(text),
        None => {
            debug!("Run response has no message text; returning raw body");
            body.to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap(message: serde_json::Value) -> String {
        json!({
            "session_id": "s1",
            "outputs": [{
                "inputs": {"input_value": "q"},
                "outputs": [{"results": {"message": message}}]
            }]
        })
        .to_string()
    }

    #[test]
    fn test_extract_message_text_primary_path() {
        let body = wrap(json!({"text": "Plain answer"}));
        assert_eq!(extract_message_text(&body), "Plain answer");
    }

    #[test]
    fn test_extract_message_text_falls_back_to_data_text() {
        let body = wrap(json!({"text": "", "data": {"text": "From data"}}));
        assert_eq!(extract_message_text(&body), "From data");

        let body = wrap(json!({"data": {"text": "Only data"}}));
        assert_eq!(extract_message_text(&body), "Only data");
    }

    #[test]
    fn test_extract_message_text_cleans_escapes_and_bullets() {
        let body = wrap(json!({"text": "**Papers**\\n* one"}));
        assert_eq!(extract_message_text(&body), "### **Papers**\n- one");
    }

    #[test]
    fn test_extract_message_text_missing_path_returns_raw_body() {
        let body = json!({"outputs": []}).to_string();
        assert_eq!(extract_message_text(&body), body);

        let body = json!({"detail": "nothing here"}).to_string();
        assert_eq!(extract_message_text(&body), body);

        let body = wrap(json!({"text": null}));
        assert_eq!(extract_message_text(&body), body);
    }

    #[test]
    fn test_extract_message_text_wrong_shape_is_diagnostic() {
        let body = json!({"outputs": "not a list"}).to_string();
        assert!(extract_message_text(&body).starts_with(SHAPE_ERROR_PREFIX));

        let body = wrap(json!({"text": 42}));
        assert!(extract_message_text(&body).starts_with(SHAPE_ERROR_PREFIX));
    }

    #[test]
    fn test_extract_message_text_non_json_is_diagnostic() {
        let text = extract_message_text("<html>502 Bad Gateway</html>");
        assert!(text.starts_with(SHAPE_ERROR_PREFIX));
    }
}
