//! Common traits for provider implementations

use async_trait::async_trait;
use colloquy_core::{ChatHistory, ChatSettings, Error, StreamEvent};
use serde_json::Value;

/// Convert a conversation into a provider-specific request body
#[async_trait]
pub trait RequestConverter: Send + Sync {
    /// Build the JSON request body for the given conversation
    ///
    /// `model` is omitted from the body when `None` (Azure selects the
    /// model through the deployment path instead).
    async fn convert_request(
        &self,
        history: &ChatHistory,
        model: Option<&str>,
        settings: &ChatSettings,
    ) -> Result<Value, Error>;
}

/// Parse a non-streaming response into the reply content
#[async_trait]
pub trait ResponseParser: Send + Sync {
    /// Extract the generated message text from provider-specific JSON
    async fn parse_response(&self, value: Value) -> Result<String, Error>;
}

/// Parse streaming events from provider-specific line framing
pub trait StreamEventParser: Send + Sync {
    /// Parse one line of streaming data into an event, if it carries one
    fn parse_event(&self, line: &str) -> Result<Option<StreamEvent>, Error>;
}
