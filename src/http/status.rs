/// HTTP [Status Code][rfc].
///
/// Any code can be represented, only [`OK`], [`BAD_REQUEST`] and [`INTERNAL_SERVER_ERROR`] have
/// a canonical reason phrase.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
/// [`OK`]: StatusCode::OK
/// [`BAD_REQUEST`]: StatusCode::BAD_REQUEST
/// [`INTERNAL_SERVER_ERROR`]: StatusCode::INTERNAL_SERVER_ERROR
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl From<u16> for StatusCode {
    #[inline]
    fn from(value: u16) -> Self {
        Self(value)
    }
}

macro_rules! status_code {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            /// Returns the reason phrase of a known status code, e.g: `"OK"`.
            #[inline]
            pub const fn reason(&self) -> Option<&'static str> {
                match self.0 {
                    $(
                        $int => Some($msg),
                    )*
                    _ => None,
                }
            }

            /// Returns the full status line of a known status code without the line
            /// terminator, e.g: `"HTTP/1.1 200 OK"`.
            #[inline]
            pub const fn status_line(&self) -> Option<&'static str> {
                match self.0 {
                    $(
                        $int => Some(concat!("HTTP/1.1 ", stringify!($int), " ", $msg)),
                    )*
                    _ => None,
                }
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self($int);
            )*
        }
    };
}

status_code! {
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `400`. The server cannot or will not process the request due to something that is perceived to be
    /// a client error.
    400 BAD_REQUEST "Bad Request";
    /// `500`. The server has encountered a situation it does not know how to handle.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
}

impl StatusCode {
    /// Create status code from any integer.
    #[inline]
    pub const fn from_u16(code: u16) -> Self {
        Self(code)
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Write the status line, including `\r\n`.
    ///
    /// Unknown codes are written as `HTTP/1.1 <code> ` with an empty reason phrase.
    pub(crate) fn write_status_line(&self, buf: &mut bytes::BytesMut) {
        match self.status_line() {
            Some(line) => buf.extend_from_slice(line.as_bytes()),
            None => {
                buf.extend_from_slice(b"HTTP/1.1 ");
                buf.extend_from_slice(itoa::Buffer::new().format(self.0).as_bytes());
                buf.extend_from_slice(b" ");
            }
        }
        buf.extend_from_slice(b"\r\n");
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} {reason}", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.0).finish()
    }
}
