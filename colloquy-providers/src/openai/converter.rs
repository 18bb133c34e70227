//! Request conversion for the OpenAI wire format

use crate::traits::RequestConverter;
use async_trait::async_trait;
use colloquy_core::{ChatHistory, ChatSettings, Error, Role};
use serde_json::{json, Value};

/// Converts conversations to OpenAI chat-completion request bodies
#[derive(Clone, Copy)]
pub struct OpenAIConverter;

#[async_trait]
impl RequestConverter for OpenAIConverter {
    async fn convert_request(
        &self,
        history: &ChatHistory,
        model: Option<&str>,
        settings: &ChatSettings,
    ) -> Result<Value, Error> {
        let mut body = json!({
            "messages": self.convert_messages(history),
        });

        if let Some(model) = model {
            body["model"] = json!(model);
        }

        if let Some(max_tokens) = settings.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = settings.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(top_p) = settings.top_p {
            body["top_p"] = json!(top_p);
        }
        if let Some(stop) = &settings.stop {
            body["stop"] = json!(stop);
        }
        if let Some(presence_penalty) = settings.presence_penalty {
            body["presence_penalty"] = json!(presence_penalty);
        }
        if let Some(frequency_penalty) = settings.frequency_penalty {
            body["frequency_penalty"] = json!(frequency_penalty);
        }
        if let Some(seed) = settings.seed {
            body["seed"] = json!(seed);
        }

        Ok(body)
    }
}

impl OpenAIConverter {
    fn convert_messages(&self, history: &ChatHistory) -> Vec<Value> {
        history
            .iter()
            .map(|message| {
                json!({
                    "role": role_name(message.role),
                    "content": message.content,
                })
            })
            .collect()
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
        _ => "user", // Unknown roles degrade to user
    }
}
