//! Logging facade.
//!
//! Macros forward to the `log` crate when the `log` feature is enabled, and expand to nothing
//! otherwise.

/// Lifecycle events, e.g: server stopped.
macro_rules! info {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::info!(target: "rawhttp", $($tt)*);
    };
}

/// Per connection and per request tracing.
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "rawhttp", $($tt)*);
    };
}

/// Recoverable misuse or a dropped connection.
macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!(target: "rawhttp", $($tt)*);
    };
}

/// Failures that end a connection or an accept attempt.
macro_rules! error {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::error!(target: "rawhttp", $($tt)*);
    };
}

pub(crate) use {debug, error, info, warning};
