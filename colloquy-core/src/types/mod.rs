//! Type definitions for chat conversations

pub mod history;
pub mod message;
pub mod settings;
pub mod stream;
