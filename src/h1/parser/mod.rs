//! HTTP/1.1 Parser.
//!
//! [`parse_reqline_chunk`] works on chunked bytes, given any length of bytes, the parser will
//! find the next `\r\n` and parse the line before it. If `\r\n` is not found, then the parser
//! returns [`ParseResult::Pending`], where more bytes is required to complete parsing.
//!
//! [`ParseResult::Pending`]: crate::common::ParseResult::Pending
mod error;

pub use error::ParseError;

use crate::common::ParseResult;
use crate::matches;

#[cfg(test)]
mod test;

const VERSION: &[u8] = b"HTTP/1.1";

/// HTTP request line, e.g: `GET /index.html HTTP/1.1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestLine {
    /// Request method, uppercase letters only.
    pub method: String,
    /// Request target, always starts with `/`.
    pub target: String,
    /// HTTP version without the `HTTP/` prefix, e.g: `1.1`.
    pub version: String,
}

// ===== Request Line =====

/// Parse request line.
///
/// On success, returns the request line and the number of bytes consumed including `\r\n`.
///
/// This function performs a chunked parsing, see [module level documentation] for more details.
///
/// [module level documentation]: crate::h1::parser
pub fn parse_reqline_chunk(bytes: &[u8]) -> ParseResult<(RequestLine, usize), ParseError> {
    let Some(crlf) = matches::find_crlf(bytes) else {
        return ParseResult::Pending;
    };

    match parse_reqline(&bytes[..crlf]) {
        Ok(reqline) => ParseResult::Ok((reqline, crlf + 2)),
        Err(err) => ParseResult::Err(err),
    }
}

fn parse_reqline(line: &[u8]) -> Result<RequestLine, ParseError> {
    let mut parts = line.split(|&b| b == b' ');

    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::MalformedRequestLine);
    };

    if method.is_empty() || !method.iter().all(|&b| matches::is_method(b)) {
        return Err(ParseError::InvalidMethod);
    }

    let Some((b'/', path)) = target.split_first() else {
        return Err(ParseError::InvalidTarget);
    };
    if !path.iter().all(|&b| matches::is_target(b)) {
        return Err(ParseError::InvalidTarget);
    }

    if version != VERSION {
        return Err(ParseError::UnsupportedVersion);
    }

    Ok(RequestLine {
        method: ascii_string(method),
        target: ascii_string(target),
        version: ascii_string(&version[b"HTTP/".len()..]),
    })
}

/// `bytes` must already be validated as ASCII.
fn ascii_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
