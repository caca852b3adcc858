//! # Hashing Utilities
//!
//! Digest functions used by the codecs and the key protector. The ledger
//! mixes three hash families:
//!
//! - **SHA-2** for transaction hashes (`double_sha256`), address checksums
//!   and most ECDSA schemes.
//! - **SHA-3** for the `SHA3-*withECDSA` schemes.
//! - **RIPEMD-160** for `hash160` (addresses) and `RIPEMD160withECDSA`.
//!
//! SM3 appears in the scheme table for SM2 keys but is not implemented
//! here; asking for it yields [`SchemeError::UnsupportedHashAlgorithm`].

use ripemd::Ripemd160;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::fmt;

use super::scheme::SchemeError;

/// Hash function selected by a [`super::SigningScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Ripemd160,
    /// SM2's native digest. Listed so the scheme table is total.
    Sm3,
}

impl HashAlgorithm {
    /// Digest `data`, or fail for algorithms this crate does not carry.
    pub fn digest(self, data: &[u8]) -> Result<Vec<u8>, SchemeError> {
        let out = match self {
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
            Self::Sha3_224 => Sha3_224::digest(data).to_vec(),
            Self::Sha3_256 => Sha3_256::digest(data).to_vec(),
            Self::Sha3_384 => Sha3_384::digest(data).to_vec(),
            Self::Sha3_512 => Sha3_512::digest(data).to_vec(),
            Self::Ripemd160 => Ripemd160::digest(data).to_vec(),
            Self::Sm3 => return Err(SchemeError::UnsupportedHashAlgorithm(self)),
        };
        Ok(out)
    }

    /// Output length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Sha224 | Self::Sha3_224 => 28,
            Self::Sha256 | Self::Sha3_256 | Self::Sm3 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
            Self::Ripemd160 => 20,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Ripemd160 => "RIPEMD-160",
            Self::Sm3 => "SM3",
        };
        f.write_str(name)
    }
}

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// `SHA-256(SHA-256(data))`. Transaction hashes and base58check checksums.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160 of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&Ripemd160::digest(data));
    out
}

/// `RIPEMD-160(SHA-256(data))`, the address hash.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}
