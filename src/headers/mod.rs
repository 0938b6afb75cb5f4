//! HTTP Header Collection.
//!
//! [`Headers`] stores one value per case-insensitive name. [`Headers::parse`] consumes one
//! header line at a time from a growing buffer, see its documentation for the exact contract.
mod error;
mod field;
mod iter;
mod map;

pub use error::HeaderError;
pub use field::HeaderField;
pub use iter::Iter;
pub use map::{Consumed, Headers};

#[cfg(test)]
mod test;
