//! In-memory conversation history.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::presentation::{Presentation, answer_text, present_response};
use crate::upstream::ResearchService;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person asking.
    User,
    /// The research assistant.
    Assistant,
}

impl Role {
    fn heading(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Assistant => f.write_str("assistant"),
        }
    }
}

/// One turn of the conversation, stored as the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author.
    pub role: Role,
    /// Raw content (assistant answers are kept unrendered).
    pub content: String,
}

/// Ordered message history for one session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty conversation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order they were added.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether nothing has been said yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a message.
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
    }

    /// Asks the service, records both sides of the turn, and returns how the
    /// answer should be shown.
    pub async fn ask(&mut self, service: &dyn ResearchService, question: &str) -> Presentation {
        self.push(Role::User, question);
        let answer = answer_text(service, question).await;
        let presentation = present_response(&answer);
        self.push(Role::Assistant, answer);
        presentation
    }

    /// Renders the history as markdown. Assistant turns are re-presented
    /// from their raw text, so paper lists come out as report plus table.
    #[must_use]
    pub fn render_transcript(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            let body = match message.role {
                Role::User => message.content.clone(),
                Role::Assistant => present_response(&message.content).to_markdown(),
            };
            out.push_str(&format!(
                "### {}\n\n{}\n\n",
                message.role.heading(),
                body.trim_end()
            ));
        }
        out
    }
}
