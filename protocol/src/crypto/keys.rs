//! # Key Management
//!
//! Key descriptors, public keys and private keys.
//!
//! Every key carries a [`KeyDescriptor`] naming its algorithm and curve. The
//! descriptor decides which signing schemes the key may be used with and
//! which digest a scheme feeds the signer, so scheme/key mismatches are
//! caught here before any curve code runs.
//!
//! Signing and verification are implemented for the two curves the ledger
//! actually uses in practice: ECDSA over P-256 (`p256`) and Ed25519
//! (`ed25519-dalek`). Other descriptors can still be parsed, serialized and
//! protected at rest, but signing with them yields
//! [`KeyError::UnsupportedCurve`].
//!
//! Private key bytes are wiped on drop and never logged.

use ed25519_dalek::{Signer as _, Verifier as _};
use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use zeroize::Zeroizing;

use super::hash::HashAlgorithm;
use super::scheme::{SchemeError, SigningScheme};
use super::signatures::Signature;

/// Errors that can occur during key operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key type id: 0x{0:02x}")]
    UnknownKeyType(u8),

    #[error("unknown curve id: {0}")]
    UnknownCurve(u8),

    #[error("invalid private key bytes")]
    InvalidPrivateKey,

    #[error("invalid public key bytes")]
    InvalidPublicKey,

    #[error("signing is not supported for {algorithm} keys on {curve}")]
    UnsupportedCurve { algorithm: KeyType, curve: CurveLabel },

    #[error("signing failed")]
    SigningFailed,

    #[error(transparent)]
    Scheme(#[from] SchemeError),
}

// ---------------------------------------------------------------------------
// KeyType / CurveLabel
// ---------------------------------------------------------------------------

/// Asymmetric key algorithm. Discriminants are the wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum KeyType {
    #[serde(rename = "ECDSA")]
    Ecdsa = 0x12,
    #[serde(rename = "SM2")]
    Sm2 = 0x13,
    #[serde(rename = "EDDSA")]
    Eddsa = 0x14,
}

impl KeyType {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Result<Self, KeyError> {
        match id {
            0x12 => Ok(Self::Ecdsa),
            0x13 => Ok(Self::Sm2),
            0x14 => Ok(Self::Eddsa),
            other => Err(KeyError::UnknownKeyType(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ecdsa => "ECDSA",
            Self::Sm2 => "SM2",
            Self::Eddsa => "EDDSA",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Curve parameters of a key. Discriminants are the wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CurveLabel {
    #[serde(rename = "P-224")]
    P224 = 1,
    #[serde(rename = "P-256")]
    P256 = 2,
    #[serde(rename = "P-384")]
    P384 = 3,
    #[serde(rename = "P-521")]
    P521 = 4,
    #[serde(rename = "sm2p256v1")]
    Sm2P256V1 = 20,
    #[serde(rename = "ed25519")]
    Ed25519 = 25,
}

impl CurveLabel {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Result<Self, KeyError> {
        match id {
            1 => Ok(Self::P224),
            2 => Ok(Self::P256),
            3 => Ok(Self::P384),
            4 => Ok(Self::P521),
            20 => Ok(Self::Sm2P256V1),
            25 => Ok(Self::Ed25519),
            other => Err(KeyError::UnknownCurve(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::P224 => "P-224",
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
            Self::Sm2P256V1 => "sm2p256v1",
            Self::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for CurveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// KeyDescriptor
// ---------------------------------------------------------------------------

/// Algorithm-specific parameters of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyParameters {
    pub curve: CurveLabel,
}

/// Identifies a key's algorithm and curve.
///
/// JSON form: `{"algorithm":"ECDSA","parameters":{"curve":"P-256"}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyDescriptor {
    pub algorithm: KeyType,
    pub parameters: KeyParameters,
}

impl KeyDescriptor {
    pub fn new(algorithm: KeyType, curve: CurveLabel) -> Self {
        Self {
            algorithm,
            parameters: KeyParameters { curve },
        }
    }

    /// ECDSA over P-256, the historical default.
    ///
    /// Intended for tests and fixtures only. Production call sites should
    /// state the algorithm they mean instead of inheriting this one.
    pub fn insecure_default() -> Self {
        Self::new(KeyType::Ecdsa, CurveLabel::P256)
    }

    pub fn curve(&self) -> CurveLabel {
        self.parameters.curve
    }

    /// `true` iff `scheme` requires this descriptor's algorithm.
    pub fn supports(&self, scheme: SigningScheme) -> bool {
        scheme.key_type() == self.algorithm
    }

    /// Like [`supports`](Self::supports), as a precondition gate.
    pub fn ensure_supports(&self, scheme: SigningScheme) -> Result<(), SchemeError> {
        if self.supports(scheme) {
            Ok(())
        } else {
            Err(SchemeError::UnsupportedScheme {
                scheme,
                algorithm: self.algorithm,
            })
        }
    }

    /// Hash function `scheme` signs with.
    ///
    /// SM2 digests through SM3, which is not a generic hash here.
    pub fn hash_for(&self, scheme: SigningScheme) -> Result<HashAlgorithm, SchemeError> {
        match scheme.hash_algorithm() {
            HashAlgorithm::Sm3 => Err(SchemeError::UnsupportedHashAlgorithm(HashAlgorithm::Sm3)),
            hash => Ok(hash),
        }
    }

    /// Digest of `msg` under `scheme`'s hash function.
    pub fn compute_hash(&self, msg: &[u8], scheme: SigningScheme) -> Result<Vec<u8>, SchemeError> {
        self.hash_for(scheme)?.digest(msg)
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A public key and its descriptor.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    descriptor: KeyDescriptor,
    key: Vec<u8>,
}

impl PublicKey {
    pub fn new(key: Vec<u8>, descriptor: KeyDescriptor) -> Self {
        Self { descriptor, key }
    }

    pub fn descriptor(&self) -> &KeyDescriptor {
        &self.descriptor
    }

    /// Raw key bytes (compressed point for ECDSA).
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Wire form: the bare 33-byte point for ECDSA, otherwise
    /// `[key type][curve][key]`.
    pub fn serialize(&self) -> Vec<u8> {
        match self.descriptor.algorithm {
            KeyType::Ecdsa => self.key.clone(),
            _ => {
                let mut out = Vec::with_capacity(self.key.len() + 2);
                out.push(self.descriptor.algorithm.id());
                out.push(self.descriptor.curve().id());
                out.extend_from_slice(&self.key);
                out
            }
        }
    }

    /// Inverse of [`serialize`](Self::serialize). Exactly 33 bytes is read
    /// as an ECDSA P-256 point; anything else must carry the type prefix.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() == 33 {
            return Ok(Self::new(bytes.to_vec(), KeyDescriptor::insecure_default()));
        }
        if bytes.len() < 3 {
            return Err(KeyError::InvalidPublicKey);
        }
        let algorithm = KeyType::from_id(bytes[0])?;
        let curve = CurveLabel::from_id(bytes[1])?;
        Ok(Self::new(bytes[2..].to_vec(), KeyDescriptor::new(algorithm, curve)))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::deserialize(&bytes)
    }

    /// Checks `signature` over `msg`.
    ///
    /// Returns `Ok(false)` for a well-formed but wrong signature and an
    /// error when the key cannot verify under the signature's scheme at all.
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> Result<bool, KeyError> {
        let scheme = signature.scheme;
        self.descriptor.ensure_supports(scheme)?;
        let hash = self.descriptor.hash_for(scheme)?;

        match (self.descriptor.algorithm, self.descriptor.curve()) {
            (KeyType::Ecdsa, CurveLabel::P256) => {
                let digest = hash.digest(msg)?;
                let verifying_key = p256::ecdsa::VerifyingKey::from_sec1_bytes(&self.key)
                    .map_err(|_| KeyError::InvalidPublicKey)?;
                let Ok(sig) = p256::ecdsa::Signature::from_slice(&signature.value) else {
                    return Ok(false);
                };
                Ok(verifying_key.verify_prehash(&digest, &sig).is_ok())
            }
            (KeyType::Eddsa, CurveLabel::Ed25519) => {
                let key: [u8; 32] = self
                    .key
                    .as_slice()
                    .try_into()
                    .map_err(|_| KeyError::InvalidPublicKey)?;
                let verifying_key = ed25519_dalek::VerifyingKey::from_bytes(&key)
                    .map_err(|_| KeyError::InvalidPublicKey)?;
                let Ok(sig) = ed25519_dalek::Signature::from_slice(&signature.value) else {
                    return Ok(false);
                };
                Ok(verifying_key.verify(msg, &sig).is_ok())
            }
            (algorithm, curve) => Err(KeyError::UnsupportedCurve { algorithm, curve }),
        }
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("algorithm", &self.descriptor.algorithm)
            .field("curve", &self.descriptor.curve())
            .field("key", &hex::encode(&self.key))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// PrivateKey
// ---------------------------------------------------------------------------

/// A private key and its descriptor.
///
/// Does not implement `Serialize`: exporting key material goes through
/// [`PrivateKey::key`] or the key protector, deliberately.
#[derive(Clone)]
pub struct PrivateKey {
    descriptor: KeyDescriptor,
    key: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    /// Wraps raw key bytes, validating them for the curves this crate signs on.
    pub fn new(key: &[u8], descriptor: KeyDescriptor) -> Result<Self, KeyError> {
        match (descriptor.algorithm, descriptor.curve()) {
            (KeyType::Ecdsa, CurveLabel::P256) => {
                p256::ecdsa::SigningKey::from_slice(key).map_err(|_| KeyError::InvalidPrivateKey)?;
            }
            (KeyType::Eddsa, CurveLabel::Ed25519) => {
                if key.len() != ed25519_dalek::SECRET_KEY_LENGTH {
                    return Err(KeyError::InvalidPrivateKey);
                }
            }
            _ => {
                if key.is_empty() {
                    return Err(KeyError::InvalidPrivateKey);
                }
            }
        }
        Ok(Self {
            descriptor,
            key: Zeroizing::new(key.to_vec()),
        })
    }

    pub fn from_hex(s: &str, descriptor: KeyDescriptor) -> Result<Self, KeyError> {
        let bytes = Zeroizing::new(hex::decode(s).map_err(|_| KeyError::InvalidPrivateKey)?);
        Self::new(&bytes, descriptor)
    }

    /// Fresh key from the OS RNG.
    pub fn generate(descriptor: KeyDescriptor) -> Result<Self, KeyError> {
        let key = match (descriptor.algorithm, descriptor.curve()) {
            (KeyType::Ecdsa, CurveLabel::P256) => {
                p256::ecdsa::SigningKey::random(&mut OsRng).to_bytes().to_vec()
            }
            (KeyType::Eddsa, CurveLabel::Ed25519) => {
                ed25519_dalek::SigningKey::generate(&mut OsRng).to_bytes().to_vec()
            }
            (algorithm, curve) => return Err(KeyError::UnsupportedCurve { algorithm, curve }),
        };
        let key = Zeroizing::new(key);
        Self::new(&key, descriptor)
    }

    pub fn descriptor(&self) -> &KeyDescriptor {
        &self.descriptor
    }

    /// Raw secret bytes. Handle with care.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn public_key(&self) -> Result<PublicKey, KeyError> {
        let key = match (self.descriptor.algorithm, self.descriptor.curve()) {
            (KeyType::Ecdsa, CurveLabel::P256) => {
                let signing_key = self.p256_signing_key()?;
                signing_key
                    .verifying_key()
                    .to_encoded_point(true)
                    .as_bytes()
                    .to_vec()
            }
            (KeyType::Eddsa, CurveLabel::Ed25519) => {
                self.ed25519_signing_key()?.verifying_key().to_bytes().to_vec()
            }
            (algorithm, curve) => return Err(KeyError::UnsupportedCurve { algorithm, curve }),
        };
        Ok(PublicKey::new(key, self.descriptor))
    }

    /// Signs `msg` under `scheme`.
    ///
    /// ECDSA signs the scheme digest of `msg` and produces `r || s`.
    /// Ed25519 signs `msg` itself (SHA-512 is internal to the algorithm).
    pub fn sign(&self, msg: &[u8], scheme: SigningScheme) -> Result<Signature, KeyError> {
        self.descriptor.ensure_supports(scheme)?;
        let hash = self.descriptor.hash_for(scheme)?;

        let value = match (self.descriptor.algorithm, self.descriptor.curve()) {
            (KeyType::Ecdsa, CurveLabel::P256) => {
                let digest = hash.digest(msg)?;
                let sig: p256::ecdsa::Signature = self
                    .p256_signing_key()?
                    .sign_prehash(&digest)
                    .map_err(|_| KeyError::SigningFailed)?;
                sig.to_bytes().to_vec()
            }
            (KeyType::Eddsa, CurveLabel::Ed25519) => {
                self.ed25519_signing_key()?.sign(msg).to_bytes().to_vec()
            }
            (algorithm, curve) => return Err(KeyError::UnsupportedCurve { algorithm, curve }),
        };
        Ok(Signature::new(scheme, value))
    }

    fn p256_signing_key(&self) -> Result<p256::ecdsa::SigningKey, KeyError> {
        p256::ecdsa::SigningKey::from_slice(&self.key).map_err(|_| KeyError::InvalidPrivateKey)
    }

    fn ed25519_signing_key(&self) -> Result<ed25519_dalek::SigningKey, KeyError> {
        let bytes: &[u8; 32] = self
            .key
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(ed25519_dalek::SigningKey::from_bytes(bytes))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Secret bytes never appear in debug output.
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.descriptor.algorithm)
            .field("curve", &self.descriptor.curve())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_KEY: &str = "7c47df9664e7db85c1308c080f398400cb24283f5d922e76b478b5429e821b95";
    const PUBLIC_KEY: &str = "022f71daef10803ece19f96b2cdb348d22bf7871c178b41f35a4f3772a8359b7d2";

    fn ecdsa() -> KeyDescriptor {
        KeyDescriptor::new(KeyType::Ecdsa, CurveLabel::P256)
    }

    fn eddsa() -> KeyDescriptor {
        KeyDescriptor::new(KeyType::Eddsa, CurveLabel::Ed25519)
    }

    fn sm2() -> KeyDescriptor {
        KeyDescriptor::new(KeyType::Sm2, CurveLabel::Sm2P256V1)
    }

    #[test]
    fn supports_is_exhaustive_over_schemes() {
        for descriptor in [ecdsa(), eddsa(), sm2()] {
            for scheme in SigningScheme::ALL {
                let expected = scheme.key_type() == descriptor.algorithm;
                assert_eq!(
                    descriptor.supports(scheme),
                    expected,
                    "{} with {}",
                    descriptor.algorithm,
                    scheme
                );
                assert_eq!(descriptor.ensure_supports(scheme).is_ok(), expected);
            }
        }
    }

    #[test]
    fn ensure_supports_names_the_mismatch() {
        assert_eq!(
            eddsa().ensure_supports(SigningScheme::EcdsaSha256),
            Err(SchemeError::UnsupportedScheme {
                scheme: SigningScheme::EcdsaSha256,
                algorithm: KeyType::Eddsa,
            })
        );
    }

    #[test]
    fn hash_for_every_scheme() {
        let descriptor = ecdsa();
        assert_eq!(
            descriptor.hash_for(SigningScheme::EcdsaSha224).unwrap(),
            HashAlgorithm::Sha224
        );
        assert_eq!(
            descriptor.hash_for(SigningScheme::EcdsaSha3_512).unwrap(),
            HashAlgorithm::Sha3_512
        );
        assert_eq!(
            descriptor.hash_for(SigningScheme::EcdsaRipemd160).unwrap(),
            HashAlgorithm::Ripemd160
        );
        assert_eq!(
            descriptor.hash_for(SigningScheme::EddsaSha512).unwrap(),
            HashAlgorithm::Sha512
        );
        assert_eq!(
            descriptor.hash_for(SigningScheme::Sm2Sm3),
            Err(SchemeError::UnsupportedHashAlgorithm(HashAlgorithm::Sm3))
        );
    }

    #[test]
    fn compute_hash_uses_scheme_digest() {
        let digest = ecdsa()
            .compute_hash(b"", SigningScheme::EcdsaSha256)
            .unwrap();
        assert_eq!(
            hex::encode(digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn descriptor_json_form() {
        let json = serde_json::to_string(&ecdsa()).unwrap();
        assert_eq!(json, r#"{"algorithm":"ECDSA","parameters":{"curve":"P-256"}}"#);
        let back: KeyDescriptor =
            serde_json::from_str(r#"{"algorithm":"EDDSA","parameters":{"curve":"ed25519"}}"#).unwrap();
        assert_eq!(back, eddsa());
    }

    #[test]
    fn type_and_curve_ids() {
        assert_eq!(KeyType::from_id(0x12).unwrap(), KeyType::Ecdsa);
        assert_eq!(KeyType::from_id(0x14).unwrap(), KeyType::Eddsa);
        assert_eq!(KeyType::from_id(0x15), Err(KeyError::UnknownKeyType(0x15)));
        assert_eq!(CurveLabel::from_id(20).unwrap(), CurveLabel::Sm2P256V1);
        assert_eq!(CurveLabel::from_id(5), Err(KeyError::UnknownCurve(5)));
    }

    #[test]
    fn p256_public_key_derivation() {
        let private_key = PrivateKey::from_hex(PRIVATE_KEY, ecdsa()).unwrap();
        let public_key = private_key.public_key().unwrap();
        assert_eq!(public_key.to_hex(), PUBLIC_KEY);
    }

    #[test]
    fn ecdsa_public_key_wire_form_is_bare_point() {
        let public_key = PublicKey::from_hex(PUBLIC_KEY).unwrap();
        assert_eq!(public_key.descriptor(), &ecdsa());
        assert_eq!(public_key.serialize().len(), 33);
    }

    #[test]
    fn prefixed_public_key_wire_form() {
        let key = PrivateKey::generate(eddsa()).unwrap().public_key().unwrap();
        let bytes = key.serialize();
        assert_eq!(bytes.len(), 34);
        assert_eq!(bytes[0], 0x14);
        assert_eq!(bytes[1], 25);
        assert_eq!(PublicKey::deserialize(&bytes).unwrap(), key);
    }

    #[test]
    fn short_public_key_rejected() {
        assert_eq!(PublicKey::deserialize(&[0x12, 0x02]), Err(KeyError::InvalidPublicKey));
    }

    #[test]
    fn invalid_private_key_rejected() {
        assert_eq!(
            PrivateKey::new(&[0u8; 32], ecdsa()).unwrap_err(),
            KeyError::InvalidPrivateKey
        );
        assert_eq!(
            PrivateKey::new(&[1u8; 31], eddsa()).unwrap_err(),
            KeyError::InvalidPrivateKey
        );
    }

    #[test]
    fn ecdsa_sign_verify_under_every_ecdsa_scheme() {
        let private_key = PrivateKey::from_hex(PRIVATE_KEY, ecdsa()).unwrap();
        let public_key = private_key.public_key().unwrap();
        let msg = b"transfer 10 ONT";

        for scheme in SigningScheme::ALL.into_iter().filter(|s| s.key_type() == KeyType::Ecdsa) {
            let sig = private_key.sign(msg, scheme).unwrap();
            assert_eq!(sig.scheme, scheme);
            assert_eq!(sig.value.len(), 64);
            assert!(public_key.verify(msg, &sig).unwrap(), "{scheme}");
            assert!(!public_key.verify(b"transfer 11 ONT", &sig).unwrap(), "{scheme}");
        }
    }

    #[test]
    fn ed25519_sign_verify() {
        let private_key = PrivateKey::generate(eddsa()).unwrap();
        let public_key = private_key.public_key().unwrap();
        let sig = private_key.sign(b"hello", SigningScheme::EddsaSha512).unwrap();
        assert!(public_key.verify(b"hello", &sig).unwrap());
        assert!(!public_key.verify(b"hellO", &sig).unwrap());
    }

    #[test]
    fn signing_with_mismatched_scheme_fails_fast() {
        let private_key = PrivateKey::from_hex(PRIVATE_KEY, ecdsa()).unwrap();
        let err = private_key.sign(b"x", SigningScheme::EddsaSha512).unwrap_err();
        assert_eq!(
            err,
            KeyError::Scheme(SchemeError::UnsupportedScheme {
                scheme: SigningScheme::EddsaSha512,
                algorithm: KeyType::Ecdsa,
            })
        );
    }

    #[test]
    fn sm2_signing_is_unsupported() {
        let private_key = PrivateKey::new(&[7u8; 32], sm2()).unwrap();
        assert_eq!(
            private_key.sign(b"x", SigningScheme::Sm2Sm3).unwrap_err(),
            KeyError::Scheme(SchemeError::UnsupportedHashAlgorithm(HashAlgorithm::Sm3))
        );
    }

    #[test]
    fn truncated_signature_does_not_verify() {
        let private_key = PrivateKey::from_hex(PRIVATE_KEY, ecdsa()).unwrap();
        let public_key = private_key.public_key().unwrap();
        let mut sig = private_key.sign(b"msg", SigningScheme::EcdsaSha256).unwrap();
        sig.value.truncate(10);
        assert!(!public_key.verify(b"msg", &sig).unwrap());
    }

    #[test]
    fn debug_output_redacts_secret() {
        let private_key = PrivateKey::from_hex(PRIVATE_KEY, ecdsa()).unwrap();
        let debug = format!("{private_key:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(PRIVATE_KEY));
    }
}
