//! OpenAI provider configuration

use crate::constants::{OPENAI_DEFAULT_BASE_URL, OPENAI_DEFAULT_MODEL};
use colloquy_core::{ChatSettings, Error};

/// Configuration for the OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Model used for completions
    pub model: String,
    /// Optional organization ID
    pub organization_id: Option<String>,
    /// Generation settings forwarded with every request
    pub settings: ChatSettings,
}

impl OpenAIConfig {
    /// Create a new configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENAI_DEFAULT_BASE_URL.to_string(),
            model: OPENAI_DEFAULT_MODEL.to_string(),
            organization_id: None,
            settings: ChatSettings::default(),
        }
    }

    /// Create a configuration from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Configuration("OPENAI_API_KEY is not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the organization ID
    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization_id = Some(org.into());
        self
    }

    /// Set the generation settings
    pub fn with_settings(mut self, settings: ChatSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get the URL for chat completions
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpenAIConfig::new("key");
        assert_eq!(config.base_url, OPENAI_DEFAULT_BASE_URL);
        assert_eq!(config.model, OPENAI_DEFAULT_MODEL);
        assert!(config.organization_id.is_none());
    }

    #[test]
    fn test_chat_url_trims_trailing_slash() {
        let config = OpenAIConfig::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(config.chat_url(), "http://localhost:8080/chat/completions");
    }
}
