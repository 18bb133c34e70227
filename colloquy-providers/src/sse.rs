//! Server-Sent-Events line framing
//!
//! Buffers raw bytes and splits on `\n`. Working in bytes rather than
//! lossily-decoded strings matters: a multi-byte UTF-8 sequence can arrive
//! split across two network chunks, and line boundaries are the only safe
//! decode points.

use colloquy_core::Error;

/// Byte buffer yielding complete, trimmed lines
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes from the transport
    pub fn extend(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Pop the next complete non-empty line, if one is buffered
    pub fn next_line(&mut self) -> Result<Option<String>, Error> {
        loop {
            let Some(pos) = self.buf.iter().position(|&b| b == b'\n') else {
                return Ok(None);
            };
            let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
            line.pop(); // the '\n'
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.is_empty() {
                continue; // SSE event separator
            }
            return decode(line).map(Some);
        }
    }

    /// Drain whatever is left after the transport closed
    ///
    /// A well-formed stream ends with a newline, but a final unterminated
    /// line is still parsed rather than silently dropped.
    pub fn take_remainder(&mut self) -> Result<Option<String>, Error> {
        if self.buf.is_empty() {
            return Ok(None);
        }
        let text = decode(std::mem::take(&mut self.buf))?;
        let text = text.trim();
        if text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(text.to_string()))
        }
    }
}

fn decode(line: Vec<u8>) -> Result<String, Error> {
    String::from_utf8(line).map_err(|e| {
        let message = format!("Invalid UTF-8 in event stream: {}", e);
        Error::Serialization {
            message,
            source: Some(Box::new(e)),
        }
    })
}

/// Split an SSE line into its field name and value
pub fn parse_sse_line(line: &str) -> Option<(&str, &str)> {
    if let Some(pos) = line.find(':') {
        let (field, value) = line.split_at(pos);
        let value = value.get(1..)?.trim_start(); // Skip the ':' and trim spaces
        Some((field, value))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_split_across_chunks() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"data: hel");
        assert!(buffer.next_line().unwrap().is_none());

        buffer.extend(b"lo\ndata: wor");
        assert_eq!(buffer.next_line().unwrap().as_deref(), Some("data: hello"));
        assert!(buffer.next_line().unwrap().is_none());

        buffer.extend(b"ld\n");
        assert_eq!(buffer.next_line().unwrap().as_deref(), Some("data: world"));
    }

    #[test]
    fn test_crlf_and_blank_separators() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"data: a\r\n\r\ndata: b\n\n");
        assert_eq!(buffer.next_line().unwrap().as_deref(), Some("data: a"));
        assert_eq!(buffer.next_line().unwrap().as_deref(), Some("data: b"));
        assert!(buffer.next_line().unwrap().is_none());
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let text = "data: héllo\n".as_bytes();
        // Split in the middle of the two-byte 'é'
        let split = text.iter().position(|&b| b == 0xc3).unwrap() + 1;

        let mut buffer = LineBuffer::new();
        buffer.extend(&text[..split]);
        assert!(buffer.next_line().unwrap().is_none());
        buffer.extend(&text[split..]);
        assert_eq!(buffer.next_line().unwrap().as_deref(), Some("data: héllo"));
    }

    #[test]
    fn test_take_remainder() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"data: tail");
        assert!(buffer.next_line().unwrap().is_none());
        assert_eq!(
            buffer.take_remainder().unwrap().as_deref(),
            Some("data: tail")
        );
        assert!(buffer.take_remainder().unwrap().is_none());
    }

    #[test]
    fn test_parse_sse_line() {
        assert_eq!(parse_sse_line("data: hello"), Some(("data", "hello")));
        assert_eq!(parse_sse_line("data:hello"), Some(("data", "hello")));
        assert_eq!(parse_sse_line(": keep-alive"), Some(("", "keep-alive")));
        assert_eq!(parse_sse_line("no field"), None);
    }
}
