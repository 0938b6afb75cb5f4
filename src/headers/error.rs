//! Error types that can occur during header related operation.

/// A header line does not follow `field-name ":" OWS field-value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Line have no `:`.
    MissingSeparator,
    /// Line starts with `:`.
    EmptyName,
    /// Whitespace between field name and `:`.
    SpaceBeforeSeparator,
    /// Whitespace inside field name.
    WhitespaceInName,
    /// Field name contains non token character.
    InvalidName,
    /// Field value is not valid UTF-8.
    InvalidValue,
}

impl HeaderError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::MissingSeparator => "header must contain \":\"",
            Self::EmptyName => "header name cannot be empty",
            Self::SpaceBeforeSeparator => "illegal space before \":\"",
            Self::WhitespaceInName => "header name contains whitespace",
            Self::InvalidName => "header name contains invalid byte",
            Self::InvalidValue => "header value is not valid utf-8",
        }
    }
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid header grammar: {}", self.message())
    }
}
