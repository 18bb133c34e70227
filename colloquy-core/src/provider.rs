//! The chat-completion capability trait

use crate::error::Result;
use crate::types::history::ChatHistory;
use crate::types::stream::StreamEvent;
use async_trait::async_trait;

/// The capability every chat-completion provider exposes
///
/// Callers are written against this trait only; selecting OpenAI or Azure
/// OpenAI at runtime is a matter of which implementation is constructed.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// The stream type returned by this provider
    ///
    /// A lazy, finite, single-pass sequence: each poll suspends until the
    /// provider delivers the next event, the stream ends, or it fails.
    type Stream: futures_core::Stream<Item = Result<StreamEvent>> + Send + Unpin;

    /// Create a fresh conversation seeded with a system prompt
    fn create_new_chat(&self, system_prompt: &str) -> ChatHistory {
        ChatHistory::new(system_prompt)
    }

    /// Generate a complete reply for the conversation
    async fn generate_message(&self, history: &ChatHistory) -> Result<String>;

    /// Generate a reply as a stream of incremental events
    ///
    /// The returned stream does not modify `history`; committing the
    /// reconstructed reply is the caller's responsibility.
    async fn generate_message_stream(&self, history: &ChatHistory) -> Result<Self::Stream>;
}
