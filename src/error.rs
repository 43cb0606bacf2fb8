//! Error types for the digest engine and hex codec.
//!
//! The reference MD5 designs this crate descends from silently ignore misuse
//! (updating a finished context, decoding garbage hex). Here every misuse is
//! a recoverable, explicitly-typed error instead.

use thiserror::Error;

/// Result type for digest and codec operations.
pub type Result<T> = std::result::Result<T, Md5Error>;

/// Errors raised by the digest engine and the hex codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Md5Error {
    /// `process` or `finish` was called on a context that is already finished.
    #[error("digest context is already finished")]
    AlreadyFinished,

    /// A digest or hex string was requested before `finish` was called.
    #[error("digest context is not finished yet")]
    NotFinished,

    /// A character outside `0-9a-fA-F` was found while decoding a hex string.
    #[error("invalid hex digit {byte:?} at index {index}")]
    InvalidHexDigit {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending character.
        byte: char,
    },

    /// A hex string to decode was not exactly the expected length.
    #[error("invalid hex string length {actual}, expected {expected}")]
    InvalidLength {
        /// The required length in characters.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
}

impl Md5Error {
    /// Creates an `InvalidHexDigit` error for the character at `index`.
    pub fn invalid_hex_digit(index: usize, byte: u8) -> Self {
        Md5Error::InvalidHexDigit {
            index,
            byte: byte as char,
        }
    }

    /// Creates an `InvalidLength` error.
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        Md5Error::InvalidLength { expected, actual }
    }
}
