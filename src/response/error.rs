use std::io;

use super::WriterStage;
use crate::common::OutOfOrder;
use crate::error::ErrorKind;

/// An error that can occur while writing a response.
#[derive(Debug)]
pub enum WriteError {
    /// Operation is not valid in the current stage, nothing was written.
    OutOfOrder(OutOfOrder<WriterStage>),
    /// Writing to the sink failed.
    Io(io::Error),
}

impl WriteError {
    /// Returns the corresponding [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfOrder(_) => ErrorKind::OutOfOrderWrite,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfOrder(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfOrder(err) => write!(f, "response {err}"),
            Self::Io(err) => write!(f, "failed to write response: {err}"),
        }
    }
}

impl From<OutOfOrder<WriterStage>> for WriteError {
    #[inline]
    fn from(value: OutOfOrder<WriterStage>) -> Self {
        Self::OutOfOrder(value)
    }
}

impl From<io::Error> for WriteError {
    #[inline]
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
