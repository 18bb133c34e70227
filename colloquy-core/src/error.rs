//! Error types for the Colloquy library

use std::error::Error as StdError;
use std::fmt;

/// The main error type for all Colloquy operations
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Network-related errors
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Provider-reported errors
    Provider {
        /// Provider name (e.g., "openai", "azure_openai")
        provider: String,
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    Serialization {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Configuration errors (missing credential, malformed endpoint)
    Configuration(String),

    /// Authentication errors
    Authentication(String),

    /// Access to the last message of an empty chat history
    EmptyHistory,

    /// The fragment stream failed before it was exhausted; nothing was
    /// committed to the chat history
    StreamInterrupted {
        /// Error message
        message: String,
        /// The failure that cut the stream short
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The output sink rejected a fragment; nothing was committed to the
    /// chat history
    Sink {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network { message, .. } => write!(f, "Network error: {}", message),
            Error::Provider {
                provider, message, ..
            } => {
                write!(f, "Provider error ({}): {}", provider, message)
            }
            Error::Serialization { message, .. } => write!(f, "Serialization error: {}", message),
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::Authentication(msg) => write!(f, "Authentication error: {}", msg),
            Error::EmptyHistory => write!(f, "Chat history contains no messages"),
            Error::StreamInterrupted { message, .. } => {
                write!(f, "Stream interrupted: {}", message)
            }
            Error::Sink { message, .. } => write!(f, "Sink error: {}", message),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Network { source, .. }
            | Error::Provider { source, .. }
            | Error::Serialization { source, .. }
            | Error::StreamInterrupted { source, .. }
            | Error::Sink { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static)),
            _ => None,
        }
    }
}

/// Result type alias for Colloquy operations
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations for error conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Sink {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let error = Error::Network {
            message: "Connection refused".into(),
            source: None,
        };
        assert_eq!(error.to_string(), "Network error: Connection refused");

        let error = Error::Provider {
            provider: "openai".into(),
            message: "No choices in response".into(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Provider error (openai): No choices in response"
        );

        let error = Error::Serialization {
            message: "Invalid JSON".into(),
            source: None,
        };
        assert_eq!(error.to_string(), "Serialization error: Invalid JSON");

        let error = Error::Configuration("OPENAI_API_KEY is not set".into());
        assert_eq!(
            error.to_string(),
            "Configuration error: OPENAI_API_KEY is not set"
        );

        let error = Error::Authentication("Invalid API key".into());
        assert_eq!(error.to_string(), "Authentication error: Invalid API key");

        let error = Error::EmptyHistory;
        assert_eq!(error.to_string(), "Chat history contains no messages");

        let error = Error::StreamInterrupted {
            message: "connection reset".into(),
            source: None,
        };
        assert_eq!(error.to_string(), "Stream interrupted: connection reset");

        let error = Error::Sink {
            message: "broken pipe".into(),
            source: None,
        };
        assert_eq!(error.to_string(), "Sink error: broken pipe");
    }

    #[test]
    fn test_error_source() {
        let error = Error::Network {
            message: "Connection failed".into(),
            source: None,
        };
        assert!(error.source().is_none());

        let io_error = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        let error = Error::StreamInterrupted {
            message: "Stream cut short".into(),
            source: Some(Box::new(io_error)),
        };
        assert!(error.source().is_some());

        let error = Error::EmptyHistory;
        assert!(error.source().is_none());

        let json_error = serde_json::from_str::<String>("invalid").unwrap_err();
        let error = Error::Serialization {
            message: "JSON parse error".into(),
            source: Some(Box::new(json_error)),
        };
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe");
        let error: Error = io_error.into();

        match error {
            Error::Sink { message, source } => {
                assert!(message.contains("Broken pipe"));
                assert!(source.is_some());
            }
            _ => panic!("Expected Sink error"),
        }
    }

    #[test]
    fn test_error_from_serde_json_error() {
        let json_error = serde_json::from_str::<String>("invalid json").unwrap_err();
        let error: Error = json_error.into();

        match error {
            Error::Serialization { message, source } => {
                assert!(!message.is_empty());
                assert!(source.is_some());
            }
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
