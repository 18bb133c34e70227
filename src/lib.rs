//! Colloquy - streaming chat-completion conversations for Rust
//!
//! This crate ties together the Colloquy workspace: an append-only
//! conversation transcript, a streaming accumulator that reconstructs a
//! reply from incremental fragments while echoing them to an output sink,
//! and chat-completion providers (OpenAI, Azure OpenAI) behind a single
//! capability trait.
//!
//! # Quick Start
//!
//! ```no_run
//! use colloquy::client::{ChatClient, StdoutSink};
//! use colloquy::providers::OpenAI;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), colloquy::Error> {
//! let client = ChatClient::new(OpenAI::from_env()?);
//!
//! let mut history = client.create_new_chat("You are a librarian, expert about books");
//! history.add_user_message("Hi, I'm looking for book suggestions");
//!
//! // Fragments print as they arrive; the full reply is appended to the
//! // history once the stream is exhausted.
//! let mut sink = StdoutSink::new();
//! client.stream_reply(&mut history, &mut sink).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Re-export core types
pub use colloquy_core::*;

pub mod providers {
    //! Chat-completion provider implementations
    pub use colloquy_providers::*;
}

pub mod client {
    //! High-level conversation driver
    pub use colloquy_client::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use colloquy_core::{
        ChatCompletion, ChatHistory, ChatSettings, Error, Message, Role, StreamAccumulator,
        StreamEvent,
    };

    pub use colloquy_client::{ChatClient, FragmentSink, StdoutSink};
    pub use colloquy_providers::{AzureOpenAI, OpenAI};
}
