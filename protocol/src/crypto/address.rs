//! # Addresses
//!
//! An address is the 20-byte `hash160` of a single-key verification program:
//!
//! ```text
//! program = push(serialized public key) || CHECKSIG
//! address = RIPEMD-160(SHA-256(program))
//! ```
//!
//! Its text form is base58check over `0x17 || address`. The key protector
//! salts its KDF with an [`AddressChecksum`], the first four bytes of the
//! double SHA-256 of that base58 *string*.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::hash::{double_sha256, hash160};
use super::keys::PublicKey;
use crate::config::{
    ADDRESS_CHECKSUM_LENGTH, ADDRESS_LENGTH, ADDRESS_VERSION, OPCODE_CHECKSIG, OPCODE_PUSHBYTES75,
    OPCODE_PUSHDATA1, OPCODE_PUSHDATA2, OPCODE_PUSHDATA4,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid base58check address: {0}")]
    InvalidBase58(String),

    #[error("invalid address version byte: 0x{0:02x}")]
    InvalidVersion(u8),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address, used as the payer of a fresh transaction.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let arr: [u8; ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| AddressError::InvalidLength {
                expected: ADDRESS_LENGTH,
                got: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Address owned by a single public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut program = Vec::with_capacity(40);
        push_bytes(&mut program, &public_key.serialize());
        program.push(OPCODE_CHECKSIG);
        Self(hash160(&program))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// base58check of `0x17 || address`.
    pub fn to_base58(&self) -> String {
        let mut data = Vec::with_capacity(ADDRESS_LENGTH + 1);
        data.push(ADDRESS_VERSION);
        data.extend_from_slice(&self.0);
        bs58::encode(data).with_check().into_string()
    }

    pub fn from_base58(s: &str) -> Result<Self, AddressError> {
        let data = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;
        let (version, body) = data
            .split_first()
            .ok_or_else(|| AddressError::InvalidBase58("empty payload".into()))?;
        if *version != ADDRESS_VERSION {
            return Err(AddressError::InvalidVersion(*version));
        }
        Self::from_slice(body)
    }

    /// KDF salt derived from this address.
    pub fn checksum(&self) -> AddressChecksum {
        let digest = double_sha256(self.to_base58().as_bytes());
        let mut out = [0u8; ADDRESS_CHECKSUM_LENGTH];
        out.copy_from_slice(&digest[..ADDRESS_CHECKSUM_LENGTH]);
        AddressChecksum(out)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base58(&s).map_err(serde::de::Error::custom)
    }
}

/// Appends a data push: a bare length byte up to 75 bytes, otherwise the
/// smallest PUSHDATA opcode that fits.
fn push_bytes(buf: &mut Vec<u8>, data: &[u8]) {
    let len = data.len();
    if len <= usize::from(OPCODE_PUSHBYTES75) {
        buf.push(len as u8);
    } else if len <= 0xff {
        buf.push(OPCODE_PUSHDATA1);
        buf.push(len as u8);
    } else if len <= 0xffff {
        buf.push(OPCODE_PUSHDATA2);
        buf.extend_from_slice(&(len as u16).to_le_bytes());
    } else {
        buf.push(OPCODE_PUSHDATA4);
        buf.extend_from_slice(&(len as u32).to_le_bytes());
    }
    buf.extend_from_slice(data);
}

// ---------------------------------------------------------------------------
// AddressChecksum
// ---------------------------------------------------------------------------

/// Four-byte address checksum, the salt of both key-protection modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressChecksum([u8; ADDRESS_CHECKSUM_LENGTH]);

impl AddressChecksum {
    pub const fn new(bytes: [u8; ADDRESS_CHECKSUM_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_CHECKSUM_LENGTH] {
        &self.0
    }

    /// Parses exactly eight hex characters.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        let arr: [u8; ADDRESS_CHECKSUM_LENGTH] =
            bytes.as_slice().try_into().map_err(|_| AddressError::InvalidLength {
                expected: ADDRESS_CHECKSUM_LENGTH,
                got: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<&Address> for AddressChecksum {
    fn from(address: &Address) -> Self {
        address.checksum()
    }
}

impl fmt::Display for AddressChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
