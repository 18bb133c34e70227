//! Core traits and types for the Colloquy chat library
//!
//! This crate provides the fundamental abstractions used throughout the
//! Colloquy workspace: the conversation transcript, streaming events and
//! the fragment accumulator, and the chat-completion capability trait.
//! It performs no I/O of its own.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use provider::ChatCompletion;
pub use types::{
    history::ChatHistory,
    message::{Message, Role},
    settings::{BuildError, ChatSettings, ChatSettingsBuilder},
    stream::{ContentDelta, MetadataDelta, StreamAccumulator, StreamEvent},
};
