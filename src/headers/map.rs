use super::{HeaderError, HeaderField, Iter};
use crate::common::ParseResult;
use crate::matches;

/// Result of a successful [`Headers::parse`] step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Consumed {
    /// Bytes consumed, including the line terminator.
    pub len: usize,
    /// `true` if the empty line ending the header section was consumed.
    pub done: bool,
}

/// Case-insensitive HTTP Headers.
///
/// Each name appears once. Setting an existing name merges the value into a comma separated
/// list instead of adding another field. Fields keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers {
    fields: Vec<HeaderField>,
}

impl Headers {
    /// Create new empty [`Headers`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns headers length.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over headers as name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.fields)
    }
}

// ===== Lookup =====

impl Headers {
    /// Returns `true` if the map contains a value for given header name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns the value corresponding to the given header name.
    ///
    /// ```rust
    /// use rawhttp::headers::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.set("Content-Type", "text/html");
    /// assert_eq!(headers.get("content-type"), Some("text/html"));
    /// assert_eq!(headers.get("CONTENT-TYPE"), Some("text/html"));
    /// ```
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.field(name).map(HeaderField::value)
    }

    fn field(&self, name: &str) -> Option<&HeaderField> {
        self.fields.iter().find(|field| field.is(name))
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut HeaderField> {
        self.fields.iter_mut().find(|field| field.is(name))
    }
}

// ===== Mutation =====

impl Headers {
    /// Insert a header, or merge into the existing one.
    ///
    /// If the name is already present, `value` is appended as `", " + value`, unless the
    /// existing value already contains `value` as a substring.
    ///
    /// ```rust
    /// use rawhttp::headers::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.set("Host", "a");
    /// headers.set("HOST", "b");
    /// headers.set("host", "a");
    /// assert_eq!(headers.get("host"), Some("a, b"));
    /// assert_eq!(headers.len(), 1);
    /// ```
    pub fn set(&mut self, name: &str, value: impl AsRef<str>) {
        let value = value.as_ref();
        match self.field_mut(name) {
            Some(field) => field.merge(value),
            None => self.fields.push(HeaderField::new(name, value)),
        }
    }

    /// Insert a header, overwriting any existing value.
    ///
    /// Returns the previous value if any.
    pub fn replace(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        match self.field_mut(name) {
            Some(field) => Some(field.replace(value)),
            None => {
                self.fields.push(HeaderField::new(name, value));
                None
            }
        }
    }

    /// Removes a header from the map, returning its value if the name was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.fields.iter().position(|field| field.is(name))?;
        Some(self.fields.remove(index).into_value())
    }

    /// Removes all headers.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

// ===== Parsing =====

impl Headers {
    /// Parse one header line from the start of `bytes`.
    ///
    /// - no `\r\n` found: [`ParseResult::Pending`], nothing is consumed
    /// - `\r\n` at the very start: end of header section, 2 bytes consumed
    /// - otherwise one `name: value` line is parsed and [`set`] into the map, the consumed
    ///   length includes the line terminator
    ///
    /// [`set`]: Headers::set
    pub fn parse(&mut self, bytes: &[u8]) -> ParseResult<Consumed, HeaderError> {
        let Some(crlf) = matches::find_crlf(bytes) else {
            return ParseResult::Pending;
        };

        if crlf == 0 {
            return ParseResult::Ok(Consumed { len: 2, done: true });
        }

        let field = match HeaderField::parse_line(&bytes[..crlf]) {
            Ok(ok) => ok,
            Err(err) => return ParseResult::Err(err),
        };
        self.set(field.name(), field.value());

        ParseResult::Ok(Consumed {
            len: crlf + 2,
            done: false,
        })
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.set(name.as_ref(), value);
        }
        headers
    }
}
