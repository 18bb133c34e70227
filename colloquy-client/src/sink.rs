//! Output sinks for progressive display

use std::io::{self, Write};

/// Receives reply fragments as they arrive
///
/// The streaming run forwards every fragment immediately, before requesting
/// the next one, so a sink observes the reply in exactly the order it is
/// being reconstructed.
pub trait FragmentSink {
    /// Write one fragment
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()>;
}

/// Sink that writes fragments to stdout, flushing after each one so a
/// partial reply is visible while the rest is still streaming
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a new stdout sink
    pub fn new() -> Self {
        Self
    }
}

impl FragmentSink for StdoutSink {
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(fragment.as_bytes())?;
        stdout.flush()
    }
}

/// Accumulate fragments into a string (useful in tests and for callers that
/// only want the final text)
impl FragmentSink for String {
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        self.push_str(fragment);
        Ok(())
    }
}

/// Record fragments individually, preserving their boundaries
impl FragmentSink for Vec<String> {
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        self.push(fragment.to_owned());
        Ok(())
    }
}
