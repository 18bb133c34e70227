//! Constants for provider implementations

/// Default OpenAI base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI model
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default Azure OpenAI API version
pub const AZURE_DEFAULT_API_VERSION: &str = "2024-05-01-preview";
