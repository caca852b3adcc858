//! Error types for the binary codec.

use thiserror::Error;

/// Errors raised while reading or writing wire-format bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Input rejected before any structural parsing started.
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// A read ran past the end of the buffer.
    #[error("buffer underrun: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun {
        /// Bytes the read asked for.
        needed: usize,
        /// Bytes that were left.
        remaining: usize,
    },

    /// Input text was not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A length-prefixed string did not hold UTF-8.
    #[error("string field is not valid UTF-8")]
    InvalidUtf8,

    /// A boolean byte held something other than 0 or 1.
    #[error("invalid boolean byte: 0x{0:02x}")]
    InvalidBool(u8),

    /// A complete structure was decoded but bytes were left over.
    #[error("{0} trailing bytes after end of structure")]
    TrailingBytes(usize),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}
