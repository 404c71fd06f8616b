//! Token-driven catalog decoder.
//!
//! The decoder is a small state machine over the top level of the document:
//!
//! ```text
//! Start ──{──▶ AwaitingKey ──"id":value──▶ AfterEntry ──,──▶ AwaitingKey
//!                   │                           │
//!                   └────────────}──────────────┴──}──▶ Done
//! ```
//!
//! Each `step` consumes exactly one top-level token. A string token is a port
//! id; the value that follows it is buffered on its own and deserialized into
//! a [`PortEntry`]. Nothing else of the document is held in memory.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::token::{Delim, Token};
use crate::ports::{DecodeError, PortEntry, PortEntrySource};

fn unexpected(token: &Token, expected: &'static str) -> DecodeError {
    DecodeError::UnexpectedToken {
        token: token.to_string(),
        expected,
    }
}

/// JSON whitespace. Narrower than `u8::is_ascii_whitespace`, which also
/// accepts form feed.
fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Outcome of a single decoding step.
#[derive(Debug, Clone, PartialEq)]
enum Step {
    /// An object boundary was consumed; no entry for this step.
    Delimiter(Delim),
    /// A key and its value were consumed.
    Entry(PortEntry),
    /// The document is finished.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    AwaitingKey { first: bool },
    AfterEntry,
    Done,
}

/// Incremental decoder for a catalog document.
///
/// Not restartable: every call advances the underlying reader. After an
/// error the decoder is finished and only yields `Step::End`.
pub struct PortDecoder<R> {
    reader: R,
    state: State,
}

impl<R> PortDecoder<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: State::Start,
        }
    }

    /// Advance the state machine by one top-level token.
    async fn step(&mut self) -> Result<Step, DecodeError> {
        let result = self.advance().await;
        if result.is_err() {
            self.state = State::Done;
        }
        result
    }

    async fn advance(&mut self) -> Result<Step, DecodeError> {
        loop {
            match self.state {
                State::Done => return Ok(Step::End),
                State::Start => {
                    return match self.next_token().await? {
                        // Empty input is an empty catalog.
                        None => {
                            self.state = State::Done;
                            Ok(Step::End)
                        }
                        Some(Token::Delimiter(Delim::OpenObject)) => {
                            self.state = State::AwaitingKey { first: true };
                            Ok(Step::Delimiter(Delim::OpenObject))
                        }
                        Some(token) => Err(unexpected(&token, "'{'")),
                    };
                }
                State::AwaitingKey { first } => {
                    return match self.next_token().await? {
                        None => Err(DecodeError::UnexpectedEof),
                        Some(Token::Delimiter(Delim::CloseObject)) if first => {
                            self.state = State::Done;
                            Ok(Step::Delimiter(Delim::CloseObject))
                        }
                        Some(Token::String(id)) => {
                            let entry = self.read_entry(id).await?;
                            self.state = State::AfterEntry;
                            Ok(Step::Entry(entry))
                        }
                        Some(token) => Err(unexpected(&token, "port id")),
                    };
                }
                State::AfterEntry => {
                    if self.peek_significant().await? == Some(b',') {
                        self.reader.consume(1);
                        self.state = State::AwaitingKey { first: false };
                        continue;
                    }
                    return match self.next_token().await? {
                        None => Err(DecodeError::UnexpectedEof),
                        Some(Token::Delimiter(Delim::CloseObject)) => {
                            self.state = State::Done;
                            Ok(Step::Delimiter(Delim::CloseObject))
                        }
                        Some(token) => Err(unexpected(&token, "',' or '}'")),
                    };
                }
            }
        }
    }

    /// Read the next top-level token, or `None` at end of input.
    async fn next_token(&mut self) -> Result<Option<Token>, DecodeError> {
        let Some(byte) = self.peek_significant().await? else {
            return Ok(None);
        };

        if let Some(delim) = Delim::from_byte(byte) {
            self.reader.consume(1);
            return Ok(Some(Token::Delimiter(delim)));
        }

        if byte == b'"' {
            let raw = self.read_raw_value().await?;
            let value = serde_json::from_slice(&raw).map_err(DecodeError::InvalidString)?;
            return Ok(Some(Token::String(value)));
        }

        if byte == b',' || byte == b':' {
            self.reader.consume(1);
            return Ok(Some(Token::Other((byte as char).to_string())));
        }

        let raw = self.read_raw_value().await?;
        Ok(Some(Token::Other(String::from_utf8_lossy(&raw).into_owned())))
    }

    async fn read_entry(&mut self, id: String) -> Result<PortEntry, DecodeError> {
        match self.peek_significant().await? {
            Some(b':') => self.reader.consume(1),
            Some(_) => {
                let token = self.next_token().await?.unwrap_or(Token::Other(String::new()));
                return Err(unexpected(&token, "':'"));
            }
            None => return Err(DecodeError::UnexpectedEof),
        }

        if self.peek_significant().await?.is_none() {
            return Err(DecodeError::UnexpectedEof);
        }

        let raw = self.read_raw_value().await?;
        let mut entry: PortEntry = serde_json::from_slice(&raw)
            .map_err(|source| DecodeError::InvalidEntry { id: id.clone(), source })?;
        entry.id = id;
        Ok(entry)
    }

    /// Peek the next non-whitespace byte without consuming it.
    async fn peek_significant(&mut self) -> Result<Option<u8>, DecodeError> {
        loop {
            let buf = self.reader.fill_buf().await?;
            if buf.is_empty() {
                return Ok(None);
            }
            let skipped = buf.iter().take_while(|&&b| is_json_whitespace(b)).count();
            if skipped < buf.len() {
                let byte = buf[skipped];
                self.reader.consume(skipped);
                return Ok(Some(byte));
            }
            let len = buf.len();
            self.reader.consume(len);
        }
    }

    /// Copy the raw bytes of one JSON value starting at the current position.
    async fn read_raw_value(&mut self) -> Result<Vec<u8>, DecodeError> {
        let mut scanner = ValueScanner::default();
        let mut raw = Vec::new();

        loop {
            let buf = self.reader.fill_buf().await?;
            if buf.is_empty() {
                if scanner.is_literal() && !raw.is_empty() {
                    return Ok(raw);
                }
                return Err(DecodeError::UnexpectedEof);
            }

            let mut taken = 0;
            let mut complete = false;
            for &byte in buf {
                match scanner.push(byte) {
                    Scan::More => taken += 1,
                    Scan::Complete => {
                        taken += 1;
                        complete = true;
                        break;
                    }
                    Scan::CompleteBefore => {
                        complete = true;
                        break;
                    }
                }
            }

            raw.extend_from_slice(&buf[..taken]);
            self.reader.consume(taken);
            if complete {
                return Ok(raw);
            }
        }
    }
}

#[async_trait]
impl<R> PortEntrySource for PortDecoder<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Pull the next entry, skipping object boundaries.
    async fn next_entry(&mut self) -> Result<Option<PortEntry>, DecodeError> {
        loop {
            match self.step().await? {
                Step::Delimiter(_) => continue,
                Step::Entry(entry) => return Ok(Some(entry)),
                Step::End => return Ok(None),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    More,
    /// The value ends with this byte.
    Complete,
    /// The value ended just before this byte.
    CompleteBefore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Composite,
    String,
    Literal,
}

/// Finds the end of a JSON value without interpreting it.
#[derive(Debug, Default)]
struct ValueScanner {
    kind: Option<ValueKind>,
    depth: usize,
    in_string: bool,
    escaped: bool,
}

impl ValueScanner {
    fn is_literal(&self) -> bool {
        self.kind == Some(ValueKind::Literal)
    }

    fn push(&mut self, byte: u8) -> Scan {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if byte == b'\\' {
                self.escaped = true;
            } else if byte == b'"' {
                self.in_string = false;
                if self.kind == Some(ValueKind::String) {
                    return Scan::Complete;
                }
            }
            return Scan::More;
        }

        match self.kind {
            None => {
                match byte {
                    b'{' | b'[' => {
                        self.kind = Some(ValueKind::Composite);
                        self.depth = 1;
                    }
                    b'"' => {
                        self.kind = Some(ValueKind::String);
                        self.in_string = true;
                    }
                    _ => self.kind = Some(ValueKind::Literal),
                }
                Scan::More
            }
            Some(ValueKind::Composite) => {
                match byte {
                    b'"' => self.in_string = true,
                    b'{' | b'[' => self.depth += 1,
                    b'}' | b']' => {
                        self.depth -= 1;
                        if self.depth == 0 {
                            return Scan::Complete;
                        }
                    }
                    _ => {}
                }
                Scan::More
            }
            Some(ValueKind::Literal) => {
                if is_json_whitespace(byte)
                    || matches!(byte, b',' | b':' | b'{' | b'}' | b'[' | b']' | b'"')
                {
                    Scan::CompleteBefore
                } else {
                    Scan::More
                }
            }
            // Strings complete inside the `in_string` branch.
            Some(ValueKind::String) => Scan::CompleteBefore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    fn decoder(input: &str) -> PortDecoder<&[u8]> {
        PortDecoder::new(input.as_bytes())
    }

    async fn decode_all(input: &str) -> Result<Vec<PortEntry>, DecodeError> {
        let mut decoder = decoder(input);
        let mut entries = Vec::new();
        while let Some(entry) = decoder.next_entry().await? {
            entries.push(entry);
        }
        Ok(entries)
    }

    const TWO_PORTS: &str = r#"{
      "AEAJM": {
        "name": "Ajman",
        "city": "Ajman",
        "country": "United Arab Emirates",
        "alias": [],
        "regions": [],
        "coordinates": [55.5136433, 25.4052165],
        "province": "Ajman",
        "timezone": "Asia/Dubai",
        "unlocs": ["AEAJM"],
        "code": "52000"
      },
      "AEAUH": {
        "name": "Abu Dhabi",
        "coordinates": [54.37, 24.47],
        "city": "Abu Dhabi",
        "province": "Abu Z¸aby [Abu Dhabi]",
        "country": "United Arab Emirates",
        "alias": [],
        "regions": [],
        "timezone": "Asia/Dubai",
        "unlocs": ["AEAUH"],
        "code": "52001"
      }
    }"#;

    #[tokio::test]
    async fn empty_object_yields_no_entries() {
        assert!(decode_all("{}").await.unwrap().is_empty());
        assert!(decode_all("  { \n }  ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_input_yields_no_entries() {
        assert!(decode_all("").await.unwrap().is_empty());
        assert!(decode_all(" \n\t").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn single_key_yields_entry_with_key_as_id() {
        let entries = decode_all(r#"{"AEAJM":{"name":"Ajman","code":"52000"}}"#)
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "AEAJM");
        assert_eq!(entries[0].name, "Ajman");
        assert_eq!(entries[0].code, "52000");
    }

    #[tokio::test]
    async fn entries_come_out_in_document_order() {
        let entries = decode_all(TWO_PORTS).await.unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["AEAJM", "AEAUH"]);
        assert_eq!(entries[0].coordinates, vec![55.5136433, 25.4052165]);
        assert_eq!(entries[1].province, "Abu Z¸aby [Abu Dhabi]");
    }

    #[tokio::test]
    async fn key_overrides_id_inside_value() {
        let entries = decode_all(r#"{"AEAJM":{"id":"other","code":"1"}}"#).await.unwrap();
        assert_eq!(entries[0].id, "AEAJM");
    }

    #[tokio::test]
    async fn escaped_keys_and_values_are_decoded() {
        let input = r#"{"A\"BC":{"name":"brace } and quote \" inside","code":"1"}}"#;
        let entries = decode_all(input).await.unwrap();

        assert_eq!(entries[0].id, "A\"BC");
        assert_eq!(entries[0].name, "brace } and quote \" inside");
    }

    #[tokio::test]
    async fn entry_without_code_is_not_validated_here() {
        let entries = decode_all(r#"{"AEAJM":{"name":"Ajman"}}"#).await.unwrap();
        assert!(entries[0].code.is_empty());
    }

    #[tokio::test]
    async fn steps_report_delimiters_and_entries() {
        let mut decoder = decoder(r#"{"A":{"code":"1"}}"#);

        assert_eq!(decoder.step().await.unwrap(), Step::Delimiter(Delim::OpenObject));
        assert!(matches!(decoder.step().await.unwrap(), Step::Entry(e) if e.id == "A"));
        assert_eq!(decoder.step().await.unwrap(), Step::Delimiter(Delim::CloseObject));
        assert_eq!(decoder.step().await.unwrap(), Step::End);
        assert_eq!(decoder.step().await.unwrap(), Step::End);
    }

    #[tokio::test]
    async fn top_level_array_is_rejected() {
        let err = decode_all(r#"[{"code":"1"}]"#).await.unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedToken { ref token, .. } if token == "["));
    }

    #[tokio::test]
    async fn number_key_is_rejected() {
        let err = decode_all(r#"{42:{"code":"1"}}"#).await.unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedToken { ref token, .. } if token == "42"));
    }

    #[tokio::test]
    async fn trailing_comma_is_rejected() {
        let err = decode_all(r#"{"A":{"code":"1"},}"#).await.unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedToken { .. }));
    }

    #[tokio::test]
    async fn missing_colon_is_rejected() {
        let err = decode_all(r#"{"A" {"code":"1"}}"#).await.unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedToken { expected: "':'", .. }));
    }

    #[tokio::test]
    async fn non_object_value_is_invalid_entry() {
        let err = decode_all(r#"{"A": 17}"#).await.unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEntry { ref id, .. } if id == "A"));
    }

    #[tokio::test]
    async fn mistyped_field_is_invalid_entry() {
        let err = decode_all(r#"{"A":{"coordinates":"north"}}"#).await.unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEntry { .. }));
    }

    #[tokio::test]
    async fn truncated_document_is_unexpected_eof() {
        let err = decode_all(r#"{"A":{"code":"1""#).await.unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEof));

        let err = decode_all(r#"{"A":{"code":"1"}"#).await.unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEof));
    }

    #[tokio::test]
    async fn entries_before_an_error_are_still_produced() {
        let mut decoder = decoder(r#"{"A":{"code":"1"},"B":oops}"#);

        assert_eq!(decoder.next_entry().await.unwrap().unwrap().id, "A");
        assert!(decoder.next_entry().await.is_err());
        assert!(decoder.next_entry().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn content_after_closing_brace_is_not_read() {
        let entries = decode_all(r#"{"A":{"code":"1"}} trailing"#).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn decodes_across_tiny_buffer_boundaries() {
        let reader = BufReader::with_capacity(1, TWO_PORTS.as_bytes());
        let mut decoder = PortDecoder::new(reader);

        let first = decoder.next_entry().await.unwrap().unwrap();
        let second = decoder.next_entry().await.unwrap().unwrap();

        assert_eq!(first.unlocs, vec!["AEAJM".to_string()]);
        assert_eq!(second.code, "52001");
        assert!(decoder.next_entry().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn form_feed_is_not_whitespace() {
        let err = decode_all("{\x0C\"A\":{\"code\":\"1\"}}").await.unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedToken { expected: "port id", .. }));

        let err = decode_all("\x0C{}").await.unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedToken { expected: "'{'", .. }));
    }

    #[tokio::test]
    async fn json_whitespace_is_skipped_everywhere() {
        let entries = decode_all("\r\n\t{ \"A\" :\t{\"code\": \"1\"} \r\n}")
            .await
            .unwrap();
        assert_eq!(entries[0].id, "A");
    }

    #[tokio::test]
    async fn next_token_classifies_tokens() {
        let mut decoder = decoder(r#"{ "key" 12 ]"#);

        assert_eq!(
            decoder.next_token().await.unwrap(),
            Some(Token::Delimiter(Delim::OpenObject))
        );
        assert_eq!(
            decoder.next_token().await.unwrap(),
            Some(Token::String("key".to_string()))
        );
        assert_eq!(
            decoder.next_token().await.unwrap(),
            Some(Token::Other("12".to_string()))
        );
        assert_eq!(
            decoder.next_token().await.unwrap(),
            Some(Token::Delimiter(Delim::CloseArray))
        );
        assert_eq!(decoder.next_token().await.unwrap(), None);
    }
}
