//! HTTP Protocol.
mod status;

pub use status::StatusCode;
