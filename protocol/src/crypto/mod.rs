//! # Cryptographic Layer
//!
//! Everything between raw key bytes and the transaction codec:
//!
//! - **hash**: SHA-2, SHA-3 and RIPEMD-160 digests, `hash160`, `double_sha256`.
//! - **scheme**: the static signing-scheme table.
//! - **keys**: key descriptors and public/private keys (P-256, Ed25519).
//! - **address**: 20-byte addresses, base58check form, address checksums.
//! - **signatures**: compact, JWT and PGP signature codecs.
//! - **protection**: scrypt + AES protection of private keys at rest.
//!
//! Curve arithmetic and hash internals come from RustCrypto and dalek
//! crates. This module only fixes how they are invoked and what bytes go
//! in and out.

pub mod address;
pub mod hash;
pub mod keys;
pub mod protection;
pub mod scheme;
pub mod signatures;

pub use address::{Address, AddressChecksum, AddressError};
pub use hash::{double_sha256, hash160, sha256, HashAlgorithm};
pub use keys::{CurveLabel, KeyDescriptor, KeyError, KeyParameters, KeyType, PrivateKey, PublicKey};
pub use protection::{KeyProtector, ProtectionError};
pub use scheme::{SchemeError, SchemeInfo, SigningScheme, SCHEMES};
pub use signatures::{PgpSignature, Signature, SignatureError};
