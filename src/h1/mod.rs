//! HTTP/1.1 Protocol.
//!
//! - [`parser`] contains HTTP/1.1 request line parser.
//!
//! Header lines are parsed by [`Headers::parse`], the full request is driven by [`Request`].
//!
//! [`Headers::parse`]: crate::headers::Headers::parse
//! [`Request`]: crate::request::Request

pub mod parser;
