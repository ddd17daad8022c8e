//! Core error types for trickle.
//!
//! User-defined parser error types should implement `From<trickle_core::Error>`
//! to integrate with trickle's end-of-stream handling.

use core::fmt;

/// Core trickle error type.
///
/// This enum captures errors that originate from trickle's own buffering and
/// end-of-stream logic. Parsers define their own error types and implement
/// `From<Error>` to fold these into their domain-specific errors.
///
/// # Example
///
/// ```ignore
/// use thiserror::Error;
///
/// #[derive(Error, Debug)]
/// pub enum MyParseError {
///     #[error("truncated frame, {} bytes buffered", partial.len())]
///     Truncated { partial: Vec<u8> },
///
///     #[error("bad header: {0}")]
///     BadHeader(String),
/// }
///
/// impl From<trickle_core::Error> for MyParseError {
///     fn from(err: trickle_core::Error) -> Self {
///         match err {
///             trickle_core::Error::Incomplete { partial } => MyParseError::Truncated { partial },
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The stream ended while a primitive was still waiting on bytes it will
    /// never receive.
    ///
    /// Carries whatever unconsumed residual had already been buffered, so a
    /// caller can log or salvage it. Never raised by an EOF-tolerant
    /// `read_until(.., eof = true)` call — that primitive resolves
    /// successfully on a non-empty residual instead.
    Incomplete {
        /// Bytes buffered but not enough to satisfy the primitive.
        partial: Vec<u8>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Incomplete { partial } => {
                write!(
                    f,
                    "stream ended with an incomplete frame: {} bytes buffered",
                    partial.len()
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Outcome of a [`crate::Harness::push`] or [`crate::Collector::send`] call.
///
/// `E` is the parser's own error type, which must implement
/// `From<Error>` so `?` can convert an [`Error::Incomplete`] raised inside a
/// primitive into the parser's domain error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushError<E> {
    /// A chunk (or EOF) was pushed after the harness had already reached a
    /// terminal state. The harness never re-examines the parser once this
    /// happens.
    AlreadyEof,
    /// The parser's future resolved with an error.
    Parser(E),
}

impl<E: fmt::Display> fmt::Display for PushError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::AlreadyEof => write!(f, "pushed data after the parser already finished"),
            PushError::Parser(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for PushError<E> {}
