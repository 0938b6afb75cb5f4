//! HTTP Request Decoder.
//!
//! [`Request::decode_from`] reads from a blocking byte stream into a single growing buffer and
//! drives [`Request::advance`] over the unconsumed bytes after every read, until the request is
//! complete.
//!
//! ```not_rust
//! Initialized --request line--> ParsingHeaders --empty line--> ParsingBody --body--> Done
//! ```
use bytes::{Buf, Bytes, BytesMut};
use std::io;

use crate::common::{ParseResult, Stage};
use crate::h1::parser::{RequestLine, parse_reqline_chunk};
use crate::headers::Headers;
use crate::log::debug;

mod error;

pub use error::DecodeError;


/// Size of the first read.
pub const DEFAULT_INITIAL_READ_SIZE: usize = 8;

/// Upper bound of a single read.
pub const DEFAULT_MAX_READ_SIZE: usize = 64 * 1024;

/// Request decoding state.
///
/// Only moves forward, [`Done`] is terminal.
///
/// [`Done`]: ParserState::Done
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParserState {
    /// Waiting for the request line.
    #[default]
    Initialized,
    /// Request line parsed, waiting for header lines.
    ParsingHeaders,
    /// Header section ended, waiting for the body.
    ParsingBody,
    /// Request is complete.
    Done,
}

impl Stage for ParserState {
    fn name(&self) -> &'static str {
        match self {
            Self::Initialized => "request line",
            Self::ParsingHeaders => "headers",
            Self::ParsingBody => "body",
            Self::Done => "done",
        }
    }
}

/// Read size configuration for [`Request::decode_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Size of the first read.
    pub initial_read_size: usize,
    /// Upper bound of a single read.
    ///
    /// When a read makes no parsing progress, the next read asks for as many bytes as have been
    /// read so far, but never more than this.
    pub max_read_size: usize,
}

impl Default for DecodeConfig {
    #[inline]
    fn default() -> Self {
        Self {
            initial_read_size: DEFAULT_INITIAL_READ_SIZE,
            max_read_size: DEFAULT_MAX_READ_SIZE,
        }
    }
}

/// HTTP Request.
#[derive(Debug, Default)]
pub struct Request {
    request_line: RequestLine,
    headers: Headers,
    body: Bytes,
    state: ParserState,
}

impl Request {
    /// Create new empty [`Request`] in the [`Initialized`] state.
    ///
    /// [`Initialized`]: ParserState::Initialized
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed request line.
    ///
    /// Fields are empty before the request line is parsed.
    #[inline]
    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }

    /// Returns shared reference to the headers.
    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns mutable reference to the headers.
    #[inline]
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Returns the request body.
    ///
    /// Empty when the request have no `Content-Length`.
    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns current decoding state.
    #[inline]
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Returns `true` if the request is fully decoded.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }
}

// ===== Decoding =====

impl Request {
    /// Decode a request from a blocking reader, using [`DecodeConfig::default`].
    pub fn decode_from<R: io::Read>(reader: R) -> Result<Request, DecodeError> {
        Self::decode_with(reader, &DecodeConfig::default())
    }

    /// Decode a request from a blocking reader.
    ///
    /// Returns once the request is [`Done`]. Bytes the reader yields after the request are
    /// not read. Any read error, including end of stream, is a
    /// [`DecodeError::TransportReadFailure`].
    ///
    /// [`Done`]: ParserState::Done
    pub fn decode_with<R: io::Read>(
        mut reader: R,
        config: &DecodeConfig,
    ) -> Result<Request, DecodeError> {
        let mut request = Request::new();
        let mut buffer = BytesMut::with_capacity(config.initial_read_size);
        let mut read_size = config.initial_read_size.max(1);
        let mut total_read = 0;

        loop {
            let read = read_buf(&mut reader, &mut buffer, read_size)?;
            total_read += read;

            let consumed = request.advance(&buffer)?;
            buffer.advance(consumed);

            if request.is_done() {
                return Ok(request);
            }

            if consumed == 0 {
                let next = total_read.clamp(read_size, config.max_read_size.max(read_size));
                if next != read_size {
                    debug!("no progress after {total_read} bytes, read size {read_size} -> {next}");
                    read_size = next;
                }
            }
        }
    }

    /// Advance the parser over `bytes`, returning the number of bytes consumed.
    ///
    /// `bytes` must start right after the last consumed byte, and may contain bytes that were
    /// already offered but not consumed. Parsing continues from the current state until it is
    /// [`Done`] or more bytes are required, so calling it again with the same unconsumed bytes
    /// and nothing new is harmless.
    ///
    /// Returns [`DecodeError::AlreadyDone`] if called after the request is [`Done`].
    ///
    /// [`Done`]: ParserState::Done
    pub fn advance(&mut self, bytes: &[u8]) -> Result<usize, DecodeError> {
        if self.is_done() {
            return Err(DecodeError::AlreadyDone);
        }

        let mut consumed = 0;

        loop {
            let rest = &bytes[consumed..];

            match self.state {
                ParserState::Initialized => match parse_reqline_chunk(rest) {
                    ParseResult::Ok((reqline, len)) => {
                        self.request_line = reqline;
                        self.step(ParserState::Initialized, ParserState::ParsingHeaders);
                        consumed += len;
                    }
                    ParseResult::Err(err) => return Err(err.into()),
                    ParseResult::Pending => break,
                },
                ParserState::ParsingHeaders => match self.headers.parse(rest) {
                    ParseResult::Ok(header) => {
                        if header.done {
                            self.step(ParserState::ParsingHeaders, ParserState::ParsingBody);
                        }
                        consumed += header.len;
                    }
                    ParseResult::Err(err) => return Err(err.into()),
                    ParseResult::Pending => break,
                },
                ParserState::ParsingBody => match self.parse_body(rest)? {
                    Some(len) => {
                        self.step(ParserState::ParsingBody, ParserState::Done);
                        consumed += len;
                    }
                    None => break,
                },
                ParserState::Done => break,
            }
        }

        Ok(consumed)
    }

    /// Returns the number of body bytes consumed, or `None` if more bytes are required.
    fn parse_body(&mut self, bytes: &[u8]) -> Result<Option<usize>, DecodeError> {
        let Some(value) = self.headers.get("content-length") else {
            return Ok(Some(0));
        };

        let Ok(expected) = value.parse::<usize>() else {
            return Err(DecodeError::InvalidContentLength(value.to_owned()));
        };

        match bytes.len().cmp(&expected) {
            std::cmp::Ordering::Greater => Err(DecodeError::BodyLengthMismatch {
                expected,
                actual: bytes.len(),
            }),
            std::cmp::Ordering::Less => Ok(None),
            std::cmp::Ordering::Equal => {
                self.body = Bytes::copy_from_slice(bytes);
                Ok(Some(expected))
            }
        }
    }

    fn step(&mut self, from: ParserState, to: ParserState) {
        // only called from the matching `self.state` arm
        let result = self.state.step(from, to);
        debug_assert!(result.is_ok(), "{result:?}");
    }
}

/// Read at most `size` bytes, appending to `buffer`.
fn read_buf<R: io::Read>(
    reader: &mut R,
    buffer: &mut BytesMut,
    size: usize,
) -> Result<usize, DecodeError> {
    let len = buffer.len();
    buffer.resize(len + size, 0);

    let result = loop {
        match reader.read(&mut buffer[len..]) {
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            result => break result,
        }
    };

    match result {
        Ok(0) => {
            buffer.truncate(len);
            Err(DecodeError::TransportReadFailure(
                io::ErrorKind::UnexpectedEof.into(),
            ))
        }
        Ok(read) => {
            buffer.truncate(len + read);
            Ok(read)
        }
        Err(err) => {
            buffer.truncate(len);
            Err(DecodeError::TransportReadFailure(err))
        }
    }
}
