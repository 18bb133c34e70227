//! Chat-completion provider implementations
//!
//! Both providers speak the OpenAI chat-completions wire format: JSON
//! request bodies and Server-Sent-Events streaming responses. They differ
//! only in endpoint shape and authentication scheme.

#![warn(missing_docs)]

pub mod constants;
mod error;
pub mod http;
pub mod sse;
pub mod traits;

// Provider implementations
pub mod azure;
pub mod openai;

// Re-export provider types
pub use azure::{AzureConfig, AzureOpenAI};
pub use openai::{OpenAI, OpenAIConfig};

// Re-export common traits
pub use traits::{RequestConverter, ResponseParser, StreamEventParser};
