//! # Signing Schemes
//!
//! A signing scheme names a (signature algorithm, hash function) pair. The
//! set is closed and every property of a scheme comes from one static table,
//! [`SCHEMES`], indexed by the scheme's wire id. The table is checked at
//! compile time so a reordered or mistyped row fails the build instead of
//! mis-decoding signatures at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::hash::HashAlgorithm;
use super::keys::KeyType;

/// Errors about scheme lookup and scheme/key compatibility.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemeError {
    #[error("unknown signature scheme id: 0x{0:02x}")]
    UnknownScheme(u8),

    #[error("unknown signature scheme label: {0}")]
    UnknownSchemeLabel(String),

    #[error("signature scheme {scheme} cannot be used with a {algorithm} key")]
    UnsupportedScheme {
        scheme: SigningScheme,
        algorithm: KeyType,
    },

    #[error("unsupported hash algorithm: {0}")]
    UnsupportedHashAlgorithm(HashAlgorithm),
}

/// The closed set of signing schemes. Discriminants are the wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SigningScheme {
    EcdsaSha224 = 0,
    EcdsaSha256 = 1,
    EcdsaSha384 = 2,
    EcdsaSha512 = 3,
    EcdsaSha3_224 = 4,
    EcdsaSha3_256 = 5,
    EcdsaSha3_384 = 6,
    EcdsaSha3_512 = 7,
    EcdsaRipemd160 = 8,
    Sm2Sm3 = 9,
    EddsaSha512 = 10,
}

/// One row of the scheme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeInfo {
    pub scheme: SigningScheme,
    /// Long label, used in PGP envelopes.
    pub label: &'static str,
    /// Short label, used as a JWT `alg`.
    pub jwt_label: &'static str,
    pub hash: HashAlgorithm,
    /// Key algorithm the scheme requires.
    pub key_type: KeyType,
}

const fn row(
    scheme: SigningScheme,
    label: &'static str,
    jwt_label: &'static str,
    hash: HashAlgorithm,
    key_type: KeyType,
) -> SchemeInfo {
    SchemeInfo {
        scheme,
        label,
        jwt_label,
        hash,
        key_type,
    }
}

/// Scheme table, row `i` describes the scheme with wire id `i`.
pub const SCHEMES: [SchemeInfo; 11] = [
    row(SigningScheme::EcdsaSha224, "SHA224withECDSA", "ES224", HashAlgorithm::Sha224, KeyType::Ecdsa),
    row(SigningScheme::EcdsaSha256, "SHA256withECDSA", "ES256", HashAlgorithm::Sha256, KeyType::Ecdsa),
    row(SigningScheme::EcdsaSha384, "SHA384withECDSA", "ES384", HashAlgorithm::Sha384, KeyType::Ecdsa),
    row(SigningScheme::EcdsaSha512, "SHA512withECDSA", "ES512", HashAlgorithm::Sha512, KeyType::Ecdsa),
    row(SigningScheme::EcdsaSha3_224, "SHA3-224withECDSA", "ES3-224", HashAlgorithm::Sha3_224, KeyType::Ecdsa),
    row(SigningScheme::EcdsaSha3_256, "SHA3-256withECDSA", "ES3-256", HashAlgorithm::Sha3_256, KeyType::Ecdsa),
    row(SigningScheme::EcdsaSha3_384, "SHA3-384withECDSA", "ES3-384", HashAlgorithm::Sha3_384, KeyType::Ecdsa),
    row(SigningScheme::EcdsaSha3_512, "SHA3-512withECDSA", "ES3-512", HashAlgorithm::Sha3_512, KeyType::Ecdsa),
    row(SigningScheme::EcdsaRipemd160, "RIPEMD160withECDSA", "ER160", HashAlgorithm::Ripemd160, KeyType::Ecdsa),
    row(SigningScheme::Sm2Sm3, "SM3withSM2", "SM", HashAlgorithm::Sm3, KeyType::Sm2),
    row(SigningScheme::EddsaSha512, "SHA512withEdDSA", "EDS512", HashAlgorithm::Sha512, KeyType::Eddsa),
];

// Row i must describe the scheme whose discriminant is i.
const _: () = {
    let mut i = 0;
    while i < SCHEMES.len() {
        assert!(SCHEMES[i].scheme as usize == i);
        i += 1;
    }
};

impl SigningScheme {
    /// Every scheme, in wire-id order.
    pub const ALL: [SigningScheme; 11] = [
        Self::EcdsaSha224,
        Self::EcdsaSha256,
        Self::EcdsaSha384,
        Self::EcdsaSha512,
        Self::EcdsaSha3_224,
        Self::EcdsaSha3_256,
        Self::EcdsaSha3_384,
        Self::EcdsaSha3_512,
        Self::EcdsaRipemd160,
        Self::Sm2Sm3,
        Self::EddsaSha512,
    ];

    pub fn info(self) -> &'static SchemeInfo {
        &SCHEMES[self as usize]
    }

    /// Wire id written as the first byte of a compact signature.
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Result<Self, SchemeError> {
        SCHEMES
            .get(usize::from(id))
            .map(|info| info.scheme)
            .ok_or(SchemeError::UnknownScheme(id))
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn jwt_label(self) -> &'static str {
        self.info().jwt_label
    }

    /// Looks a scheme up by its long label.
    pub fn from_label(label: &str) -> Result<Self, SchemeError> {
        SCHEMES
            .iter()
            .find(|info| info.label == label)
            .map(|info| info.scheme)
            .ok_or_else(|| SchemeError::UnknownSchemeLabel(label.to_string()))
    }

    /// Looks a scheme up by its JWT label.
    pub fn from_jwt_label(label: &str) -> Result<Self, SchemeError> {
        SCHEMES
            .iter()
            .find(|info| info.jwt_label == label)
            .map(|info| info.scheme)
            .ok_or_else(|| SchemeError::UnknownSchemeLabel(label.to_string()))
    }

    pub fn hash_algorithm(self) -> HashAlgorithm {
        self.info().hash
    }

    /// Key algorithm a key must have to use this scheme.
    pub fn key_type(self) -> KeyType {
        self.info().key_type
    }
}

impl fmt::Display for SigningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SigningScheme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for SigningScheme {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::from_label(&label).map_err(serde::de::Error::custom)
    }
}
