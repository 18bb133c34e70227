//! Azure OpenAI provider configuration

use crate::constants::AZURE_DEFAULT_API_VERSION;
use colloquy_core::{ChatSettings, Error};
use url::Url;

/// Configuration for the Azure OpenAI provider
///
/// The deployment name selects the model; Azure request bodies carry no
/// `model` field.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    /// API key for authentication
    pub api_key: String,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    /// Deployment name of the chat model
    pub deployment: String,
    /// API version query parameter
    pub api_version: String,
    /// Generation settings forwarded with every request
    pub settings: ChatSettings,
}

impl AzureConfig {
    /// Create a new configuration
    pub fn new(
        endpoint: impl Into<String>,
        deployment: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            deployment: deployment.into(),
            api_version: AZURE_DEFAULT_API_VERSION.to_string(),
            settings: ChatSettings::default(),
        }
    }

    /// Create a configuration from environment variables
    ///
    /// Reads `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_CHAT_DEPLOYMENT_NAME`
    /// and `AZURE_OPENAI_KEY`; `AZURE_OPENAI_API_VERSION` overrides the
    /// default version when set.
    pub fn from_env() -> Result<Self, Error> {
        let endpoint = require_var("AZURE_OPENAI_ENDPOINT")?;
        Url::parse(&endpoint).map_err(|e| {
            Error::Configuration(format!("AZURE_OPENAI_ENDPOINT is not a valid URL: {}", e))
        })?;
        let deployment = require_var("AZURE_OPENAI_CHAT_DEPLOYMENT_NAME")?;
        let api_key = require_var("AZURE_OPENAI_KEY")?;

        let mut config = Self::new(endpoint, deployment, api_key);
        if let Ok(version) = std::env::var("AZURE_OPENAI_API_VERSION") {
            config.api_version = version;
        }
        Ok(config)
    }

    /// Set the API version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the generation settings
    pub fn with_settings(mut self, settings: ChatSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get the URL for chat completions against this deployment
    pub fn chat_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }
}

fn require_var(name: &str) -> Result<String, Error> {
    std::env::var(name).map_err(|_| Error::Configuration(format!("{} is not set", name)))
}
