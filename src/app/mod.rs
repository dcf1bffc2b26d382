//! Answer presentation and conversation flow.
//!
//! - [`present_response`] decides whether an answer is a paper list
//! - [`ask_and_present`] runs one question through a [`ResearchService`](crate::upstream::ResearchService)
//! - [`Conversation`] keeps the session history and renders transcripts

mod conversation;
mod presentation;

pub use conversation::{Conversation, Message, Role};
pub use presentation::{Presentation, answer_text, ask_and_present, present_response};
