//! Minimal HTTP/1.1 over raw TCP.
//!
//! - [`request`], incremental request decoder over any blocking byte stream
//! - [`headers`], case-insensitive header collection and header line parser
//! - [`response`], stage ordered response writer with chunked encoding and trailers
//! - [`server`], TCP accept loop serving one request per connection
//!
//! Enable the `log` feature to emit diagnostics through the `log` crate.
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod common;
pub mod error;
pub mod h1;
pub mod headers;
pub mod http;
pub mod request;
pub mod response;
pub mod server;

pub use error::{Error, ErrorKind};
pub use headers::Headers;
pub use http::StatusCode;
pub use request::Request;
pub use response::{ResponseWriter, default_headers};
pub use server::{Handler, Server, Shutdown};
