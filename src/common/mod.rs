//! Types shared by the request decoder and the response encoder.
use std::fmt;

/// Result of parsing a possibly incomplete chunk of bytes.
#[derive(Debug)]
pub enum ParseResult<T, E> {
    /// Bytes is not sufficient for parsing, more IO read is required.
    Pending,
    /// Parse success.
    Ok(T),
    /// Parse failed.
    Err(E),
}

impl<T, E> ParseResult<T, E> {
    /// Returns `true` if the parse result is [`Pending`].
    ///
    /// [`Pending`]: ParseResult::Pending
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

// ===== Stage =====

/// Forward-only state machine stage.
///
/// Variants are declared in lifecycle order, so `Ord` is the transition order. Both
/// [`ParserState`] and [`WriterStage`] go through [`Stage::check`] and [`Stage::step`], there
/// is no other way to move a stage.
///
/// [`ParserState`]: crate::request::ParserState
/// [`WriterStage`]: crate::response::WriterStage
pub trait Stage: Copy + Ord + fmt::Debug {
    /// Returns stage name, e.g: `"headers"`.
    fn name(&self) -> &'static str;

    /// Returns an error if `self` is not `expected`.
    #[inline]
    fn check(&self, expected: Self) -> Result<(), OutOfOrder<Self>> {
        if *self == expected {
            Ok(())
        } else {
            Err(OutOfOrder { expected, found: *self })
        }
    }

    /// Move from `from` to `to`.
    ///
    /// Nothing changes when the current stage is not `from`.
    ///
    /// # Panics
    ///
    /// In debug build, panics if `to` is not after `from`.
    #[inline]
    fn step(&mut self, from: Self, to: Self) -> Result<(), OutOfOrder<Self>> {
        debug_assert!(from < to, "backward transition {from:?} -> {to:?}");
        self.check(from)?;
        *self = to;
        Ok(())
    }
}

/// An operation was attempted in the wrong [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfOrder<S> {
    /// Stage the operation requires.
    pub expected: S,
    /// Stage the state machine is actually in.
    pub found: S,
}

impl<S: Stage> std::error::Error for OutOfOrder<S> {}

impl<S: Stage> fmt::Display for OutOfOrder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "out of order: expected {} stage, found {}",
            self.expected.name(),
            self.found.name()
        )
    }
}
