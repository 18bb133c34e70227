//! Streaming types for incremental responses

/// One fragment of reply text delivered by a streaming provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDelta {
    /// The text content
    pub text: String,
}

/// Provider bookkeeping sent alongside content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataDelta {
    /// Model information
    pub model: Option<String>,
    /// Response ID
    pub id: Option<String>,
}

/// Events that can occur during streaming
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A fragment of reply content
    Content(ContentDelta),
    /// Metadata update
    Metadata(MetadataDelta),
    /// Stream has ended
    Done,
}

/// Accumulates reply fragments into the full message text
///
/// The accumulator exists for the duration of one streaming run and is
/// consumed when the reconstructed message is committed. Its content is the
/// exact concatenation of all fragments in arrival order; metadata events
/// leave it untouched.
#[derive(Debug, Default)]
pub struct StreamAccumulator {
    content: String,
}

impl StreamAccumulator {
    /// Create a new accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment to the buffer
    pub fn push_fragment(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Process a stream event
    pub fn process_event(&mut self, event: StreamEvent) {
        if let StreamEvent::Content(delta) = event {
            self.content.push_str(&delta.text);
        }
    }

    /// The accumulated content so far
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the accumulator, yielding the full reconstructed text
    pub fn into_content(self) -> String {
        self.content
    }
}
