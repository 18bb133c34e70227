//! Conversation client implementation

use crate::sink::FragmentSink;
use colloquy_core::{
    ChatCompletion, ChatHistory, Error, Result, Role, StreamAccumulator, StreamEvent,
};
use futures::StreamExt;
use tracing::{debug, trace};

/// High-level client driving conversations against one provider
///
/// # Examples
///
/// ```no_run
/// use colloquy_client::{ChatClient, StdoutSink};
/// use colloquy_providers::OpenAI;
///
/// # async fn example() -> Result<(), colloquy_core::Error> {
/// let client = ChatClient::new(OpenAI::with_api_key("your-api-key"));
///
/// let mut history = client.create_new_chat("You are a librarian, expert about books");
/// history.add_user_message("Hi, I'm looking for book suggestions");
///
/// let mut sink = StdoutSink::new();
/// client.stream_reply(&mut history, &mut sink).await?;
/// # Ok(())
/// # }
/// ```
pub struct ChatClient<P: ChatCompletion> {
    provider: P,
}

impl<P: ChatCompletion> ChatClient<P> {
    /// Create a new client with a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get a reference to the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Create a fresh conversation seeded with a system prompt
    pub fn create_new_chat(&self, system_prompt: &str) -> ChatHistory {
        self.provider.create_new_chat(system_prompt)
    }

    /// Generate a complete reply and commit it to the history
    ///
    /// Appends exactly one Assistant message and returns its content.
    pub async fn reply(&self, history: &mut ChatHistory) -> Result<String> {
        let content = self.provider.generate_message(history).await?;
        history.add_message(Role::Assistant, content.clone());
        debug!(messages = history.len(), "committed assistant reply");
        Ok(content)
    }

    /// Stream an Assistant reply, forwarding fragments to `sink`
    pub async fn stream_reply<S: FragmentSink>(
        &self,
        history: &mut ChatHistory,
        sink: &mut S,
    ) -> Result<()> {
        self.stream_message(history, sink, Role::Assistant).await
    }

    /// Stream a reply and commit it under the given role
    ///
    /// For each fragment, in arrival order: the fragment is appended to a
    /// local buffer, then forwarded to `sink`, both before the next fragment
    /// is requested. When the stream is exhausted the buffered text is
    /// committed to `history` as one message. If the stream or the sink
    /// fails first, nothing is committed and the history is exactly as it
    /// was before the call.
    ///
    /// Holding `&mut ChatHistory` for the whole run means two runs can never
    /// race on the same transcript.
    pub async fn stream_message<S: FragmentSink>(
        &self,
        history: &mut ChatHistory,
        sink: &mut S,
        role: Role,
    ) -> Result<()> {
        let mut stream = self.provider.generate_message_stream(history).await?;
        let mut accumulator = StreamAccumulator::new();

        while let Some(event) = stream.next().await {
            match event {
                Ok(StreamEvent::Content(delta)) => {
                    accumulator.push_fragment(&delta.text);
                    sink.write_fragment(&delta.text)?;
                    trace!(fragment_len = delta.text.len(), "forwarded fragment");
                }
                Ok(StreamEvent::Metadata(_)) => {}
                Ok(StreamEvent::Done) => break,
                Err(e) => {
                    // The buffer is discarded: a truncated reply never
                    // reaches the transcript.
                    return Err(Error::StreamInterrupted {
                        message: e.to_string(),
                        source: Some(Box::new(e)),
                    });
                }
            }
        }

        history.add_message(role, accumulator.into_content());
        debug!(messages = history.len(), role = %role, "committed streamed message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use colloquy_core::ContentDelta;
    use futures::stream;
    use std::pin::Pin;
    use std::sync::Mutex;

    type EventStream = Pin<Box<dyn futures::Stream<Item = Result<StreamEvent>> + Send>>;

    struct MockProvider {
        scripts: Mutex<Vec<Vec<Result<StreamEvent>>>>,
        reply: String,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                scripts: Mutex::new(Vec::new()),
                reply: "Hello from mock provider".to_string(),
            }
        }

        fn with_script(self, script: Vec<Result<StreamEvent>>) -> Self {
            self.scripts.lock().unwrap().push(script);
            self
        }
    }

    #[async_trait]
    impl ChatCompletion for MockProvider {
        type Stream = EventStream;

        async fn generate_message(&self, _history: &ChatHistory) -> Result<String> {
            Ok(self.reply.clone())
        }

        async fn generate_message_stream(&self, _history: &ChatHistory) -> Result<Self::Stream> {
            let script = self.scripts.lock().unwrap().remove(0);
            Ok(Box::pin(stream::iter(script)))
        }
    }

    fn content(text: &str) -> Result<StreamEvent> {
        Ok(StreamEvent::Content(ContentDelta {
            text: text.to_string(),
        }))
    }

    fn cut() -> Result<StreamEvent> {
        Err(Error::Network {
            message: "connection reset".to_string(),
            source: None,
        })
    }

    struct FailingSink;

    impl FragmentSink for FailingSink {
        fn write_fragment(&mut self, _fragment: &str) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "terminal went away",
            ))
        }
    }

    #[tokio::test]
    async fn test_stream_reply_commits_concatenation() {
        let provider = MockProvider::new().with_script(vec![
            content("Hello"),
            content(", "),
            content("welcome!"),
            Ok(StreamEvent::Done),
        ]);
        let client = ChatClient::new(provider);

        let mut history = client.create_new_chat("You are a librarian, expert about books");
        history.add_user_message("Hi");

        let mut sink = String::new();
        client.stream_reply(&mut history, &mut sink).await.unwrap();

        assert_eq!(sink, "Hello, welcome!");
        assert_eq!(history.len(), 3);
        let roles: Vec<Role> = history.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
        let message = history.last_message().unwrap();
        assert_eq!(message.content, "Hello, welcome!");
    }

    #[tokio::test]
    async fn test_sink_sees_fragments_in_buffer_order() {
        let provider = MockProvider::new().with_script(vec![
            content("Hello"),
            content(", "),
            content("welcome!"),
            Ok(StreamEvent::Done),
        ]);
        let client = ChatClient::new(provider);
        let mut history = client.create_new_chat("system");

        let mut sink: Vec<String> = Vec::new();
        client.stream_reply(&mut history, &mut sink).await.unwrap();

        assert_eq!(sink, vec!["Hello", ", ", "welcome!"]);
        assert_eq!(sink.concat(), history.last_message().unwrap().content);
    }

    #[tokio::test]
    async fn test_stream_without_done_marker_still_commits() {
        let provider = MockProvider::new().with_script(vec![content("Hi"), content(" there")]);
        let client = ChatClient::new(provider);
        let mut history = client.create_new_chat("system");

        let mut sink = String::new();
        client.stream_reply(&mut history, &mut sink).await.unwrap();

        assert_eq!(history.last_message().unwrap().content, "Hi there");
    }

    #[tokio::test]
    async fn test_empty_stream_commits_empty_message() {
        let provider = MockProvider::new().with_script(vec![]);
        let client = ChatClient::new(provider);
        let mut history = client.create_new_chat("system");

        let mut sink = String::new();
        client.stream_reply(&mut history, &mut sink).await.unwrap();

        assert_eq!(history.len(), 2);
        let message = history.last_message().unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "");
    }

    #[tokio::test]
    async fn test_interrupted_stream_leaves_history_unchanged() {
        let provider =
            MockProvider::new().with_script(vec![content("A"), content("B"), cut()]);
        let client = ChatClient::new(provider);

        let mut history = client.create_new_chat("system");
        history.add_user_message("Hi");
        let before = history.clone();

        let mut sink = String::new();
        let result = client.stream_reply(&mut history, &mut sink).await;

        match result {
            Err(Error::StreamInterrupted { .. }) => {}
            other => panic!("Expected StreamInterrupted, got {:?}", other),
        }
        assert_eq!(history, before);
        // The fragments were already displayed, but never committed
        assert_eq!(sink, "AB");
    }

    #[tokio::test]
    async fn test_sink_failure_aborts_without_commit() {
        let provider = MockProvider::new().with_script(vec![content("Hello")]);
        let client = ChatClient::new(provider);

        let mut history = client.create_new_chat("system");
        let before = history.clone();

        let result = client
            .stream_reply(&mut history, &mut FailingSink)
            .await;

        match result {
            Err(Error::Sink { .. }) => {}
            other => panic!("Expected Sink error, got {:?}", other),
        }
        assert_eq!(history, before);
    }

    #[tokio::test]
    async fn test_metadata_events_are_ignored() {
        let provider = MockProvider::new().with_script(vec![
            Ok(StreamEvent::Metadata(Default::default())),
            content("text"),
            Ok(StreamEvent::Metadata(Default::default())),
            Ok(StreamEvent::Done),
        ]);
        let client = ChatClient::new(provider);
        let mut history = client.create_new_chat("system");

        let mut sink = String::new();
        client.stream_reply(&mut history, &mut sink).await.unwrap();

        assert_eq!(sink, "text");
        assert_eq!(history.last_message().unwrap().content, "text");
    }

    #[tokio::test]
    async fn test_stream_message_with_custom_role() {
        let provider = MockProvider::new().with_script(vec![content("noted")]);
        let client = ChatClient::new(provider);
        let mut history = client.create_new_chat("system");

        let mut sink = String::new();
        client
            .stream_message(&mut history, &mut sink, Role::User)
            .await
            .unwrap();

        assert_eq!(history.last_message().unwrap().role, Role::User);
    }

    #[tokio::test]
    async fn test_reply_commits_assistant_message() {
        let client = ChatClient::new(MockProvider::new());
        let mut history = client.create_new_chat("system");

        let content = client.reply(&mut history).await.unwrap();

        assert_eq!(content, "Hello from mock provider");
        assert_eq!(history.len(), 2);
        let message = history.last_message().unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "Hello from mock provider");
    }
}
