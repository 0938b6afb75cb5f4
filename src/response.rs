//! HTTP Response Encoder.
//!
//! [`ResponseWriter`] writes a response in strict order:
//!
//! ```not_rust
//! StatusLine --write_status_line--> Headers --write_headers--> Body
//! ```
//!
//! In the [`Body`] stage the body is written either as is with [`write_body`], matching a
//! declared `Content-Length`, or with chunked transfer encoding:
//!
//! ```not_rust
//! write_chunked_body* -> write_chunked_body_done -> write_trailers
//! ```
//!
//! [`write_chunked_body_done`] only writes the `0\r\n` last chunk. The chunked body is finished by
//! [`write_trailers`], which writes the trailer fields, if any, and the final empty line. Pass
//! empty [`Headers`] when the response declared no `Trailer` header.
//!
//! Operations called in the wrong stage return [`WriteError::OutOfOrder`] before anything is
//! written.
//!
//! [`Body`]: WriterStage::Body
//! [`write_body`]: ResponseWriter::write_body
//! [`write_chunked_body_done`]: ResponseWriter::write_chunked_body_done
//! [`write_trailers`]: ResponseWriter::write_trailers
use bytes::BytesMut;
use std::io;

use crate::common::Stage;
use crate::headers::Headers;
use crate::http::StatusCode;
use crate::log::warning;

mod error;
mod write;

pub use error::WriteError;


/// Response writing stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WriterStage {
    /// Nothing written yet.
    #[default]
    StatusLine,
    /// Status line written.
    Headers,
    /// Header section written.
    Body,
}

impl Stage for WriterStage {
    fn name(&self) -> &'static str {
        match self {
            Self::StatusLine => "status line",
            Self::Headers => "headers",
            Self::Body => "body",
        }
    }
}

/// Returns conservative default response headers.
///
/// ```not_rust
/// Content-Length: 0
/// Connection: close
/// Content-Type: text/plain
/// ```
pub fn default_headers() -> Headers {
    let mut headers = Headers::new();
    headers.set("Content-Length", "0");
    headers.set("Connection", "close");
    headers.set("Content-Type", "text/plain");
    headers
}

/// HTTP Response Writer.
///
/// Bound to a single sink for a single response.
#[derive(Debug)]
pub struct ResponseWriter<W> {
    io: W,
    stage: WriterStage,
    trailer_declared: bool,
    buffer: BytesMut,
}

impl<W> ResponseWriter<W> {
    /// Create new [`ResponseWriter`] in the [`StatusLine`] stage.
    ///
    /// [`StatusLine`]: WriterStage::StatusLine
    #[inline]
    pub fn new(io: W) -> Self {
        Self {
            io,
            stage: WriterStage::StatusLine,
            trailer_declared: false,
            buffer: BytesMut::with_capacity(256),
        }
    }

    /// Returns current stage.
    #[inline]
    pub fn stage(&self) -> WriterStage {
        self.stage
    }

    /// Returns shared reference to the underlying sink.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.io
    }

    /// Returns mutable reference to the underlying sink.
    ///
    /// Writing to the sink directly bypasses stage ordering.
    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.io
    }

    /// Consume the writer, returning the underlying sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.io
    }
}

impl<W: io::Write> ResponseWriter<W> {
    /// Write the status line.
    ///
    /// Valid only in the [`StatusLine`] stage, moves to [`Headers`].
    ///
    /// [`StatusLine`]: WriterStage::StatusLine
    /// [`Headers`]: WriterStage::Headers
    pub fn write_status_line(&mut self, status: impl Into<StatusCode>) -> Result<(), WriteError> {
        self.stage.check(WriterStage::StatusLine)?;

        status.into().write_status_line(&mut self.buffer);
        self.flush_buffer()?;

        self.stage.step(WriterStage::StatusLine, WriterStage::Headers)?;
        Ok(())
    }

    /// Write the header section.
    ///
    /// Valid only in the [`Headers`] stage, moves to [`Body`].
    ///
    /// [`Headers`]: WriterStage::Headers
    /// [`Body`]: WriterStage::Body
    pub fn write_headers(&mut self, headers: &Headers) -> Result<(), WriteError> {
        self.stage.check(WriterStage::Headers)?;

        write::write_fields(headers, &mut self.buffer);
        self.flush_buffer()?;

        self.trailer_declared = headers.contains("trailer");
        self.stage.step(WriterStage::Headers, WriterStage::Body)?;
        Ok(())
    }

    /// Write body bytes as is, returning the number of bytes written.
    ///
    /// Valid only in the [`Body`] stage.
    ///
    /// [`Body`]: WriterStage::Body
    pub fn write_body(&mut self, body: &[u8]) -> Result<usize, WriteError> {
        self.stage.check(WriterStage::Body)?;
        self.io.write_all(body)?;
        Ok(body.len())
    }

    /// Write a single chunk, returning the number of bytes written including chunk framing.
    ///
    /// An empty `chunk` writes nothing, the last chunk is written by
    /// [`write_chunked_body_done`].
    ///
    /// Valid only in the [`Body`] stage, can be called repeatedly.
    ///
    /// [`Body`]: WriterStage::Body
    /// [`write_chunked_body_done`]: ResponseWriter::write_chunked_body_done
    pub fn write_chunked_body(&mut self, chunk: &[u8]) -> Result<usize, WriteError> {
        self.stage.check(WriterStage::Body)?;

        if chunk.is_empty() {
            return Ok(0);
        }

        write::write_chunk(chunk, &mut self.buffer);
        self.flush_buffer()
    }

    /// Write the zero size last chunk, `0\r\n`.
    ///
    /// Valid only in the [`Body`] stage.
    ///
    /// [`Body`]: WriterStage::Body
    pub fn write_chunked_body_done(&mut self) -> Result<usize, WriteError> {
        self.stage.check(WriterStage::Body)?;
        self.io.write_all(b"0\r\n")?;
        Ok(3)
    }

    /// Write trailer fields and the empty line completing a chunked body.
    ///
    /// Valid only in the [`Body`] stage.
    ///
    /// [`Body`]: WriterStage::Body
    pub fn write_trailers(&mut self, trailers: &Headers) -> Result<(), WriteError> {
        self.stage.check(WriterStage::Body)?;

        if !self.trailer_declared && !trailers.is_empty() {
            warning!("writing {} trailer fields without a `Trailer` header", trailers.len());
        }

        write::write_fields(trailers, &mut self.buffer);
        self.flush_buffer()?;
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<(), WriteError> {
        self.io.flush()?;
        Ok(())
    }

    fn flush_buffer(&mut self) -> Result<usize, WriteError> {
        let len = self.buffer.len();
        let result = self.io.write_all(&self.buffer);
        self.buffer.clear();
        result?;
        Ok(len)
    }
}
