use std::io;

use crate::error::ErrorKind;
use crate::h1::parser::ParseError;
use crate::headers::HeaderError;

/// An error that can occur while decoding a [`Request`].
///
/// Decoding cannot be resumed after an error.
///
/// [`Request`]: super::Request
#[derive(Debug)]
pub enum DecodeError {
    /// Invalid request line.
    Reqline(ParseError),
    /// Invalid header line.
    Header(HeaderError),
    /// `Content-Length` is not a non-negative integer.
    InvalidContentLength(String),
    /// More body bytes than `Content-Length` declared.
    BodyLengthMismatch {
        /// Declared `Content-Length`.
        expected: usize,
        /// Bytes available after the header section.
        actual: usize,
    },
    /// Parsing was attempted on a request that is already done.
    AlreadyDone,
    /// Reading from the transport failed, including end of stream.
    TransportReadFailure(io::Error),
}

impl DecodeError {
    /// Returns the corresponding [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Reqline(ParseError::UnsupportedVersion) => ErrorKind::UnsupportedHttpVersion,
            Self::Reqline(_) => ErrorKind::MalformedRequestLine,
            Self::Header(_) => ErrorKind::InvalidHeaderGrammar,
            Self::InvalidContentLength(_) => ErrorKind::InvalidContentLength,
            Self::BodyLengthMismatch { .. } => ErrorKind::BodyLengthMismatch,
            Self::AlreadyDone => ErrorKind::AlreadyDone,
            Self::TransportReadFailure(_) => ErrorKind::TransportReadFailure,
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reqline(err) => Some(err),
            Self::Header(err) => Some(err),
            Self::TransportReadFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reqline(err) => write!(f, "malformed request line: {err}"),
            Self::Header(err) => std::fmt::Display::fmt(err, f),
            Self::InvalidContentLength(value) => write!(f, "invalid content-length, got={value:?}"),
            Self::BodyLengthMismatch { expected, actual } => {
                write!(f, "body is too long, expected={expected}, got={actual}")
            }
            Self::AlreadyDone => f.write_str("request is already done"),
            Self::TransportReadFailure(err) => write!(f, "transport read failure: {err}"),
        }
    }
}

impl From<ParseError> for DecodeError {
    #[inline]
    fn from(value: ParseError) -> Self {
        Self::Reqline(value)
    }
}

impl From<HeaderError> for DecodeError {
    #[inline]
    fn from(value: HeaderError) -> Self {
        Self::Header(value)
    }
}
