//! High-level conversation driver
//!
//! [`ChatClient`] wraps any [`ChatCompletion`](colloquy_core::ChatCompletion)
//! provider and owns the streaming run: fragments are forwarded to a
//! [`FragmentSink`] as they arrive, and the reconstructed reply is committed
//! to the conversation transcript only once the stream is exhausted.

#![warn(missing_docs)]

mod client;
mod sink;

pub use client::ChatClient;
pub use sink::{FragmentSink, StdoutSink};
