//! Conversions into the core error type

use colloquy_core::Error as CoreError;

/// Convert provider-reported failures to core errors
pub(crate) fn provider_error(provider: impl Into<String>, message: impl Into<String>) -> CoreError {
    CoreError::Provider {
        provider: provider.into(),
        message: message.into(),
        source: None,
    }
}

/// Convert network errors to core errors
pub(crate) fn network_error(error: reqwest::Error) -> CoreError {
    CoreError::Network {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Convert serialization errors to core errors
pub(crate) fn serialization_error(error: serde_json::Error) -> CoreError {
    CoreError::Serialization {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}
