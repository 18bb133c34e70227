//! Streaming implementation for the OpenAI wire format

use crate::http::ResponseStream;
use crate::openai::parser::OpenAIParser;
use crate::sse::LineBuffer;
use crate::traits::StreamEventParser;
use colloquy_core::{Error, StreamEvent};
use futures_core::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Event stream over an SSE chat-completion response
///
/// Single-pass and finite: it yields parsed events until the `[DONE]`
/// sentinel or the end of the transport, and yields an `Err` item if the
/// connection drops or a payload fails to parse. Dropping the stream
/// releases the underlying connection.
pub struct OpenAIStream {
    inner: ResponseStream,
    lines: LineBuffer,
    parser: OpenAIParser,
    finished: bool,
}

impl OpenAIStream {
    pub(crate) fn new(inner: ResponseStream, parser: OpenAIParser) -> Self {
        Self {
            inner,
            lines: LineBuffer::new(),
            parser,
            finished: false,
        }
    }

    fn parse_line(&mut self, line: &str) -> Poll<Option<Result<StreamEvent, Error>>> {
        match self.parser.parse_event(line) {
            Ok(Some(StreamEvent::Done)) => {
                self.finished = true;
                Poll::Ready(Some(Ok(StreamEvent::Done)))
            }
            Ok(Some(event)) => Poll::Ready(Some(Ok(event))),
            Ok(None) => Poll::Pending, // nothing to yield from this line
            Err(e) => {
                self.finished = true;
                Poll::Ready(Some(Err(e)))
            }
        }
    }
}

impl Stream for OpenAIStream {
    type Item = Result<StreamEvent, Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if this.finished {
                return Poll::Ready(None);
            }

            // Drain buffered lines before touching the transport
            match this.lines.next_line() {
                Ok(Some(line)) => match this.parse_line(&line) {
                    Poll::Pending => continue,
                    ready => return ready,
                },
                Ok(None) => {}
                Err(e) => {
                    this.finished = true;
                    return Poll::Ready(Some(Err(e)));
                }
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => this.lines.extend(&chunk),
                Poll::Ready(Some(Err(e))) => {
                    this.finished = true;
                    return Poll::Ready(Some(Err(Error::Network {
                        message: e.to_string(),
                        source: Some(Box::new(e)),
                    })));
                }
                Poll::Ready(None) => {
                    this.finished = true;
                    return match this.lines.take_remainder() {
                        Ok(Some(line)) => match this.parse_line(&line) {
                            Poll::Pending => Poll::Ready(None),
                            ready => ready,
                        },
                        Ok(None) => Poll::Ready(None),
                        Err(e) => Poll::Ready(Some(Err(e))),
                    };
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
