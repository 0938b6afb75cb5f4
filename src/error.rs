//! Crate level error.
use std::io;

use crate::request::DecodeError;
use crate::response::WriteError;

/// Category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Request line is not `METHOD SP TARGET SP VERSION`, or method or target is invalid.
    MalformedRequestLine,
    /// Header line does not follow header grammar.
    InvalidHeaderGrammar,
    /// `Content-Length` is not a non-negative integer.
    InvalidContentLength,
    /// Body is longer than `Content-Length`.
    BodyLengthMismatch,
    /// Request version is not `HTTP/1.1`.
    UnsupportedHttpVersion,
    /// Reading the request failed, including end of stream.
    TransportReadFailure,
    /// Response part written in the wrong stage.
    OutOfOrderWrite,
    /// Request decoding continued after it was done.
    AlreadyDone,
    /// Other IO error, e.g: writing the response or accepting a connection.
    Io,
}

/// Any error produced by this crate.
#[derive(Debug)]
pub enum Error {
    /// Request decoding error.
    Decode(DecodeError),
    /// Response encoding error.
    Write(WriteError),
    /// IO error outside decoding and encoding.
    Io(io::Error),
}

impl Error {
    /// Returns the corresponding [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode(err) => err.kind(),
            Self::Write(err) => err.kind(),
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Write(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => std::fmt::Display::fmt(err, f),
            Self::Write(err) => std::fmt::Display::fmt(err, f),
            Self::Io(err) => std::fmt::Display::fmt(err, f),
        }
    }
}

impl From<DecodeError> for Error {
    #[inline]
    fn from(value: DecodeError) -> Self {
        Self::Decode(value)
    }
}

impl From<WriteError> for Error {
    #[inline]
    fn from(value: WriteError) -> Self {
        Self::Write(value)
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
