use thiserror::Error;

use crate::codec::CodecError;
use crate::crypto::{KeyError, SignatureError};

/// Errors raised while decoding, signing or verifying transactions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("unknown transaction attribute usage: 0x{0:02x}")]
    UnknownAttributeUsage(u8),

    /// A signature did not verify against any unused listed key.
    #[error("signature {index} does not verify: {reason}")]
    VerificationFailed { index: usize, reason: String },

    /// A signature entry carries fewer signatures than its threshold.
    #[error("signature {index} has {present} of {required} required signatures")]
    InsufficientSignatures {
        index: usize,
        present: usize,
        required: usize,
    },
}
