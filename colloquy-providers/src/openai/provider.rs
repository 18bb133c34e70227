//! OpenAI provider implementation
//!
//! Implements the core `ChatCompletion` trait over the OpenAI
//! chat-completions API, for both full and streaming replies.

use crate::http::{bearer_headers, HttpClient, ReqwestClient};
use crate::openai::{
    config::OpenAIConfig, converter::OpenAIConverter, parser::OpenAIParser, stream::OpenAIStream,
};
use crate::traits::{RequestConverter, ResponseParser};
use async_trait::async_trait;
use colloquy_core::{ChatCompletion, ChatHistory, Result};
use std::sync::Arc;
use tracing::debug;

/// OpenAI chat-completion provider
///
/// # Example
///
/// ```no_run
/// use colloquy_providers::OpenAI;
///
/// // Create with an API key
/// let provider = OpenAI::with_api_key("your-api-key");
///
/// // Or with custom configuration and client
/// use colloquy_providers::openai::OpenAIConfig;
/// use colloquy_providers::http::ReqwestClient;
/// use std::sync::Arc;
///
/// let config = OpenAIConfig::new("your-api-key").with_model("gpt-4");
/// let client = Arc::new(ReqwestClient::new().expect("Failed to create client"));
/// let provider = OpenAI::new(config, client);
/// ```
#[derive(Clone)]
pub struct OpenAI {
    client: Arc<dyn HttpClient>,
    config: OpenAIConfig,
    converter: OpenAIConverter,
    parser: OpenAIParser,
}

impl OpenAI {
    /// Create a new OpenAI provider with the given configuration and client
    pub fn new(config: OpenAIConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            config,
            converter: OpenAIConverter,
            parser: OpenAIParser::default(),
        }
    }

    /// Create a new OpenAI provider with just an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let client = Arc::new(ReqwestClient::new().expect("Failed to create HTTP client"));
        Self::new(OpenAIConfig::new(api_key), client)
    }

    /// Create a provider from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let config = OpenAIConfig::from_env()?;
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::new(config, client))
    }

    fn headers(&self) -> Result<reqwest::header::HeaderMap> {
        bearer_headers(&self.config.api_key, self.config.organization_id.as_deref())
    }
}

#[async_trait]
impl ChatCompletion for OpenAI {
    type Stream = OpenAIStream;

    async fn generate_message(&self, history: &ChatHistory) -> Result<String> {
        let mut body = self
            .converter
            .convert_request(history, Some(&self.config.model), &self.config.settings)
            .await?;
        body["stream"] = serde_json::json!(false);

        let url = self.config.chat_url();
        debug!(url = %url, model = %self.config.model, "requesting chat completion");

        let response = self.client.post(&url, self.headers()?, body).await?;
        self.parser.parse_response(response).await
    }

    async fn generate_message_stream(&self, history: &ChatHistory) -> Result<Self::Stream> {
        let mut body = self
            .converter
            .convert_request(history, Some(&self.config.model), &self.config.settings)
            .await?;
        body["stream"] = serde_json::json!(true);

        let url = self.config.chat_url();
        debug!(url = %url, model = %self.config.model, "opening chat completion stream");

        let bytes = self.client.post_stream(&url, self.headers()?, body).await?;
        Ok(OpenAIStream::new(bytes, self.parser))
    }
}
