//! # Protocol Configuration & Constants
//!
//! Every magic number the codecs and the key protector rely on lives here.
//! Most of them are frozen by wire compatibility with the remote ledger and
//! with keys that users already have on disk: changing one silently breaks
//! every hash, signature, or protected key produced before the change.
//!
//! The only tunable value object is [`ScryptParams`]. It is passed
//! explicitly to the key protector so callers can trade latency for
//! hardness per call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

/// Version byte prepended to the 20-byte program hash before base58check.
/// Mainnet addresses therefore always start with `A`.
pub const ADDRESS_VERSION: u8 = 0x17;

/// Length of an [`crate::crypto::Address`] in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Length of the address checksum used as KDF salt.
pub const ADDRESS_CHECKSUM_LENGTH: usize = 4;

/// `CHECKSIG` opcode terminating a single-key verification program.
pub const OPCODE_CHECKSIG: u8 = 0xac;

/// Largest push that is encoded as a bare length byte.
pub const OPCODE_PUSHBYTES75: u8 = 0x4b;

/// Push-data opcodes for longer payloads.
pub const OPCODE_PUSHDATA1: u8 = 0x4c;
pub const OPCODE_PUSHDATA2: u8 = 0x4d;
pub const OPCODE_PUSHDATA4: u8 = 0x4e;

// ---------------------------------------------------------------------------
// Signatures
// ---------------------------------------------------------------------------

/// Distinguishing identifier embedded in SM2 compact signatures.
pub const DEFAULT_SM2_ID: &str = "1234567812345678";

/// Envelope format tag for PGP-style signatures.
pub const PGP_FORMAT: &str = "pgp";

// ---------------------------------------------------------------------------
// Key protection
// ---------------------------------------------------------------------------

/// Magic prefix of a block-mode protected key.
pub const OEP_HEADER: [u8; 2] = [0x01, 0x42];

/// Flag byte following [`OEP_HEADER`].
pub const OEP_FLAG: u8 = 0xe0;

/// Offset of the address checksum inside a decoded block-mode key.
pub const OEP_CHECKSUM_OFFSET: usize = OEP_HEADER.len() + 1;

/// Offset of the ciphertext inside a decoded block-mode key.
pub const OEP_CIPHERTEXT_OFFSET: usize = OEP_CHECKSUM_OFFSET + ADDRESS_CHECKSUM_LENGTH;

/// scrypt CPU/memory cost (N).
pub const SCRYPT_COST: u32 = 4096;

/// scrypt block size (r).
pub const SCRYPT_BLOCK_SIZE: u32 = 8;

/// scrypt parallelization (p).
pub const SCRYPT_PARALLEL: u32 = 8;

/// Derived key length. Both protection modes slice exactly 64 bytes.
pub const SCRYPT_DERIVED_LENGTH: usize = 64;

/// AES block size in bytes.
pub const AES_BLOCK_LENGTH: usize = 16;

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Version byte written by [`crate::transaction::Transaction::new`].
pub const DEFAULT_TX_VERSION: u8 = 0x00;

/// Nonce width in bytes.
pub const TX_NONCE_LENGTH: usize = 4;

/// Digest length of the transaction hash.
pub const TX_HASH_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// ScryptParams
// ---------------------------------------------------------------------------

/// Rejected scrypt configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("scrypt cost must be a power of two greater than 1, got {0}")]
    InvalidCost(u32),

    #[error("scrypt block size and parallelization must be positive")]
    ZeroParameter,

    #[error("derived key size must be {SCRYPT_DERIVED_LENGTH} bytes, got {0}")]
    InvalidSize(usize),
}

/// scrypt configuration used by both key-protection modes.
///
/// The serde form matches the `scrypt` block of wallet files:
/// `{"n": 4096, "r": 8, "p": 8, "dkLen": 64}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParams {
    /// CPU/memory cost (N). Must be a power of two.
    #[serde(rename = "n")]
    pub cost: u32,

    /// Block size (r).
    #[serde(rename = "r")]
    pub block_size: u32,

    /// Parallelization (p).
    #[serde(rename = "p")]
    pub parallel: u32,

    /// Derived key length in bytes.
    #[serde(rename = "dkLen")]
    pub size: usize,
}

impl ScryptParams {
    pub const fn new(cost: u32, block_size: u32, parallel: u32) -> Self {
        Self {
            cost,
            block_size,
            parallel,
            size: SCRYPT_DERIVED_LENGTH,
        }
    }

    /// Checks the parameters against what the protection modes can use.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.cost < 2 || !self.cost.is_power_of_two() {
            return Err(ParamsError::InvalidCost(self.cost));
        }
        if self.block_size == 0 || self.parallel == 0 {
            return Err(ParamsError::ZeroParameter);
        }
        if self.size != SCRYPT_DERIVED_LENGTH {
            return Err(ParamsError::InvalidSize(self.size));
        }
        Ok(())
    }

    /// `log2(N)`, the form the `scrypt` crate takes.
    pub fn log_cost(&self) -> u8 {
        self.cost.trailing_zeros() as u8
    }
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self::new(SCRYPT_COST, SCRYPT_BLOCK_SIZE, SCRYPT_PARALLEL)
    }
}
