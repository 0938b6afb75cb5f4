/// HTTP request line parsing error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Request line is not exactly three space separated parts.
    MalformedRequestLine,
    /// Method is empty or contains non uppercase letter.
    InvalidMethod,
    /// Request target does not start with `/` or contains invalid character.
    InvalidTarget,
    /// Version is not `HTTP/1.1`.
    UnsupportedVersion,
}

impl ParseError {
    /// Returns `true` for errors in the shape of the request line.
    ///
    /// Invalid method and target are malformed request line with a more precise reason.
    #[inline]
    pub const fn is_malformed(&self) -> bool {
        !matches!(self, Self::UnsupportedVersion)
    }
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MalformedRequestLine => f.write_str("request line must contain 3 parts"),
            Self::InvalidMethod => f.write_str("invalid method"),
            Self::InvalidTarget => f.write_str("invalid request target"),
            Self::UnsupportedVersion => f.write_str("unsupported version"),
        }
    }
}
