//! Response parsing for the OpenAI wire format

use crate::error;
use crate::sse::parse_sse_line;
use crate::traits::{ResponseParser, StreamEventParser};
use async_trait::async_trait;
use colloquy_core::{ContentDelta, Error, MetadataDelta, StreamEvent};
use serde::Deserialize;
use serde_json::Value;

/// Parses OpenAI responses and SSE stream lines
///
/// Azure OpenAI shares the wire format; the provider label only affects
/// error attribution.
#[derive(Clone, Copy)]
pub struct OpenAIParser {
    provider: &'static str,
}

impl OpenAIParser {
    pub(crate) fn new(provider: &'static str) -> Self {
        Self { provider }
    }
}

impl Default for OpenAIParser {
    fn default() -> Self {
        Self::new("openai")
    }
}

#[async_trait]
impl ResponseParser for OpenAIParser {
    async fn parse_response(&self, value: Value) -> Result<String, Error> {
        let response: ChatCompletionResponse =
            serde_json::from_value(value).map_err(error::serialization_error)?;

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.unwrap_or_default()),
            None => Err(error::provider_error(
                self.provider,
                "No choices in response",
            )),
        }
    }
}

impl StreamEventParser for OpenAIParser {
    fn parse_event(&self, line: &str) -> Result<Option<StreamEvent>, Error> {
        let Some((field, value)) = parse_sse_line(line) else {
            return Ok(None);
        };
        if field != "data" {
            return Ok(None); // comments, event/id/retry fields
        }
        if value == "[DONE]" {
            return Ok(Some(StreamEvent::Done));
        }

        let chunk: ChatCompletionChunk =
            serde_json::from_str(value).map_err(error::serialization_error)?;

        if let Some(choice) = chunk.choices.first() {
            if let Some(content) = &choice.delta.content {
                return Ok(Some(StreamEvent::Content(ContentDelta {
                    text: content.clone(),
                })));
            }
        }

        if chunk.id.is_some() || chunk.model.is_some() {
            return Ok(Some(StreamEvent::Metadata(MetadataDelta {
                model: chunk.model,
                id: chunk.id,
            })));
        }

        Ok(None)
    }
}

// Response structures
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// Streaming structures
#[derive(Deserialize)]
struct ChatCompletionChunk {
    id: Option<String>,
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Deserialize)]
struct ChunkChoice {
    delta: ChunkDelta,
}

#[derive(Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}
