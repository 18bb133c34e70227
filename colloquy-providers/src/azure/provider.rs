//! Azure OpenAI provider implementation

use crate::azure::config::AzureConfig;
use crate::http::{api_key_headers, HttpClient, ReqwestClient};
use crate::openai::{converter::OpenAIConverter, parser::OpenAIParser, stream::OpenAIStream};
use crate::traits::{RequestConverter, ResponseParser};
use async_trait::async_trait;
use colloquy_core::{ChatCompletion, ChatHistory, Result};
use std::sync::Arc;
use tracing::debug;

/// Azure OpenAI chat-completion provider
///
/// Reuses the OpenAI request conversion, response parsing and stream
/// handling; only endpoint shape and authentication differ.
///
/// # Example
///
/// ```no_run
/// use colloquy_providers::azure::{AzureConfig, AzureOpenAI};
///
/// let config = AzureConfig::new(
///     "https://my-resource.openai.azure.com",
///     "my-gpt-deployment",
///     "your-api-key",
/// );
/// let provider = AzureOpenAI::with_config(config);
/// ```
#[derive(Clone)]
pub struct AzureOpenAI {
    client: Arc<dyn HttpClient>,
    config: AzureConfig,
    converter: OpenAIConverter,
    parser: OpenAIParser,
}

impl AzureOpenAI {
    /// Create a new Azure OpenAI provider with the given configuration and client
    pub fn new(config: AzureConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            config,
            converter: OpenAIConverter,
            parser: OpenAIParser::new("azure_openai"),
        }
    }

    /// Create a provider with the default HTTP client
    pub fn with_config(config: AzureConfig) -> Self {
        let client = Arc::new(ReqwestClient::new().expect("Failed to create HTTP client"));
        Self::new(config, client)
    }

    /// Create a provider from the `AZURE_OPENAI_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config = AzureConfig::from_env()?;
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::new(config, client))
    }
}

#[async_trait]
impl ChatCompletion for AzureOpenAI {
    type Stream = OpenAIStream;

    async fn generate_message(&self, history: &ChatHistory) -> Result<String> {
        let mut body = self
            .converter
            .convert_request(history, None, &self.config.settings)
            .await?;
        body["stream"] = serde_json::json!(false);

        let url = self.config.chat_url();
        debug!(url = %url, deployment = %self.config.deployment, "requesting chat completion");

        let headers = api_key_headers(&self.config.api_key)?;
        let response = self.client.post(&url, headers, body).await?;
        self.parser.parse_response(response).await
    }

    async fn generate_message_stream(&self, history: &ChatHistory) -> Result<Self::Stream> {
        let mut body = self
            .converter
            .convert_request(history, None, &self.config.settings)
            .await?;
        body["stream"] = serde_json::json!(true);

        let url = self.config.chat_url();
        debug!(url = %url, deployment = %self.config.deployment, "opening chat completion stream");

        let headers = api_key_headers(&self.config.api_key)?;
        let bytes = self.client.post_stream(&url, headers, body).await?;
        Ok(OpenAIStream::new(bytes, self.parser))
    }
}
