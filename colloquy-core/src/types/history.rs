//! The conversation transcript
//!
//! A [`ChatHistory`] is an ordered, append-only sequence of messages. It is
//! never reordered or truncated, which keeps the transcript replayable: the
//! exact request sent to a provider can be reconstructed at any point.

use crate::error::{Error, Result};
use crate::types::message::{Message, Role};
use serde::{Deserialize, Serialize};

/// An ordered, append-only conversation transcript
///
/// The first message of a conversation conventionally carries the
/// [`Role::System`] role and establishes the assistant persona;
/// [`ChatHistory::new`] seeds it. A history must not be shared between two
/// in-flight streaming runs; the streaming client enforces this by holding
/// `&mut ChatHistory` for the duration of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistory {
    messages: Vec<Message>,
}

impl ChatHistory {
    /// Create a history seeded with a single system message
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Append a user message
    ///
    /// Empty content is permitted; the transcript records exactly what the
    /// caller supplied.
    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append a message with the given role
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// The most recently appended message
    ///
    /// Returns [`Error::EmptyHistory`] if nothing has been appended yet.
    pub fn last_message(&self) -> Result<&Message> {
        self.messages.last().ok_or(Error::EmptyHistory)
    }

    /// All messages in conversation order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the transcript
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over messages in conversation order
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a ChatHistory {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
