use super::HeaderError;
use crate::matches;

/// Header Field.
///
/// Name is matched case-insensitively, and keeps the casing it was first inserted with. Parsed
/// names are always lowercase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderField {
    name: String,
    value: String,
}

impl HeaderField {
    pub(crate) fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_owned(),
            value: value.into(),
        }
    }

    /// Returns the header name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the header value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub(crate) fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Append `value` as another list element, unless the current value already contains it.
    pub(crate) fn merge(&mut self, value: &str) {
        if !self.value.contains(value) {
            self.value.push_str(", ");
            self.value.push_str(value);
        }
    }

    pub(crate) fn replace(&mut self, value: String) -> String {
        std::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }

    /// Parse a single header line, without the line terminator.
    ///
    /// Leading spaces of the name are ignored. The value is trimmed and lowercased.
    pub(crate) fn parse_line(line: &[u8]) -> Result<Self, HeaderError> {
        let Some(delim) = line.iter().position(|&b| b == b':') else {
            return Err(HeaderError::MissingSeparator);
        };

        let name = &line[..delim];

        if trim_space(name).contains(&b' ') {
            return Err(HeaderError::WhitespaceInName);
        }
        if delim == 0 {
            return Err(HeaderError::EmptyName);
        }
        if name.ends_with(b" ") {
            return Err(HeaderError::SpaceBeforeSeparator);
        }

        let name = trim_space_start(name);
        if !name.iter().all(|&b| matches::is_token(b)) {
            return Err(HeaderError::InvalidName);
        }

        let Ok(value) = std::str::from_utf8(trim_space(&line[delim + 1..])) else {
            return Err(HeaderError::InvalidValue);
        };

        // `name` only contains token bytes, which are ASCII
        let name = std::str::from_utf8(name).map_err(|_| HeaderError::InvalidName)?;

        Ok(Self::new(&name.to_ascii_lowercase(), value.to_lowercase()))
    }
}

fn trim_space_start(mut bytes: &[u8]) -> &[u8] {
    while let [b' ', rest @ ..] = bytes {
        bytes = rest;
    }
    bytes
}

fn trim_space(bytes: &[u8]) -> &[u8] {
    let mut bytes = trim_space_start(bytes);
    while let [rest @ .., b' '] = bytes {
        bytes = rest;
    }
    bytes
}
