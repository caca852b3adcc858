//! Value types shared by the transaction codec.
//!
//! These are small and `Copy` so the codec can pass them around by value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::{ByteCursor, CodecError};
use crate::config::TX_HASH_LENGTH;
use crate::crypto::Address;

// ---------------------------------------------------------------------------
// TxType
// ---------------------------------------------------------------------------

/// Transaction type byte.
///
/// Bytes outside the known set are carried as [`TxType::Unrecognized`] so a
/// transaction from a newer ledger still decodes and re-encodes unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxType {
    BookKeeping,
    IssueAsset,
    BookKeeper,
    Claim,
    Enrollment,
    Vote,
    DataFile,
    PrivacyPayload,
    RegisterAsset,
    TransferAsset,
    Record,
    Deploy,
    Invoke,
    Unrecognized(u8),
}

impl TxType {
    /// Every named type, for exhaustive tests.
    pub const KNOWN: [TxType; 13] = [
        Self::BookKeeping,
        Self::IssueAsset,
        Self::BookKeeper,
        Self::Claim,
        Self::Enrollment,
        Self::Vote,
        Self::DataFile,
        Self::PrivacyPayload,
        Self::RegisterAsset,
        Self::TransferAsset,
        Self::Record,
        Self::Deploy,
        Self::Invoke,
    ];

    pub fn to_byte(self) -> u8 {
        match self {
            Self::BookKeeping => 0x00,
            Self::IssueAsset => 0x01,
            Self::BookKeeper => 0x02,
            Self::Claim => 0x03,
            Self::Enrollment => 0x04,
            Self::Vote => 0x05,
            Self::DataFile => 0x12,
            Self::PrivacyPayload => 0x20,
            Self::RegisterAsset => 0x40,
            Self::TransferAsset => 0x80,
            Self::Record => 0x81,
            Self::Deploy => 0xd0,
            Self::Invoke => 0xd1,
            Self::Unrecognized(b) => b,
        }
    }

    pub fn from_byte(b: u8) -> Self {
        match b {
            0x00 => Self::BookKeeping,
            0x01 => Self::IssueAsset,
            0x02 => Self::BookKeeper,
            0x03 => Self::Claim,
            0x04 => Self::Enrollment,
            0x05 => Self::Vote,
            0x12 => Self::DataFile,
            0x20 => Self::PrivacyPayload,
            0x40 => Self::RegisterAsset,
            0x80 => Self::TransferAsset,
            0x81 => Self::Record,
            0xd0 => Self::Deploy,
            0xd1 => Self::Invoke,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<u8> for TxType {
    fn from(b: u8) -> Self {
        Self::from_byte(b)
    }
}

impl From<TxType> for u8 {
    fn from(t: TxType) -> Self {
        t.to_byte()
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BookKeeping => write!(f, "BookKeeping"),
            Self::IssueAsset => write!(f, "IssueAsset"),
            Self::BookKeeper => write!(f, "BookKeeper"),
            Self::Claim => write!(f, "Claim"),
            Self::Enrollment => write!(f, "Enrollment"),
            Self::Vote => write!(f, "Vote"),
            Self::DataFile => write!(f, "DataFile"),
            Self::PrivacyPayload => write!(f, "PrivacyPayload"),
            Self::RegisterAsset => write!(f, "RegisterAsset"),
            Self::TransferAsset => write!(f, "TransferAsset"),
            Self::Record => write!(f, "Record"),
            Self::Deploy => write!(f, "Deploy"),
            Self::Invoke => write!(f, "Invoke"),
            Self::Unrecognized(b) => write!(f, "Unrecognized(0x{b:02x})"),
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed64
// ---------------------------------------------------------------------------

/// Unsigned 64-bit amount, 8 bytes little-endian on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed64(pub u64);

impl Fixed64 {
    pub const ZERO: Fixed64 = Fixed64(0);

    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0.to_le_bytes());
    }

    pub fn deserialize(cursor: &mut ByteCursor<'_>) -> Result<Self, CodecError> {
        Ok(Self(cursor.read_u64_le()?))
    }
}

impl From<u64> for Fixed64 {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl fmt::Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Fee
// ---------------------------------------------------------------------------

/// An amount paid by an address: `amount (8 LE) | payer (20)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fee {
    pub amount: Fixed64,
    pub payer: Address,
}

impl Fee {
    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        self.amount.serialize_into(buf);
        buf.extend_from_slice(self.payer.as_bytes());
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(28);
        self.serialize_into(&mut buf);
        buf
    }

    pub fn deserialize(cursor: &mut ByteCursor<'_>) -> Result<Self, CodecError> {
        let amount = Fixed64::deserialize(cursor)?;
        let payer = Address::new(cursor.read_array()?);
        Ok(Self { amount, payer })
    }
}

// ---------------------------------------------------------------------------
// TxHash
// ---------------------------------------------------------------------------

/// `SHA-256(SHA-256(unsigned bytes))` of a transaction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash(pub [u8; TX_HASH_LENGTH]);

impl TxHash {
    pub fn as_bytes(&self) -> &[u8; TX_HASH_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", self.to_hex())
    }
}
