//! # Private Key Protection
//!
//! Password-based encryption of raw private-key bytes at rest. Two historical
//! variants exist and both must keep producing byte-identical output, since
//! users have keys on disk in either form.
//!
//! Both start from the same derivation:
//!
//! ```text
//! salt    = address checksum of the key's public key (4 bytes)
//! derived = scrypt(NFC(password), salt, N, r, p, 64)
//! ```
//!
//! ## Stream mode
//!
//! AES-256-CTR (32-bit big-endian counter) with IV `derived[0..16]` and key
//! `derived[32..64]`, output as standard base64. There is no header and no
//! MAC: a wrong password "decrypts" to garbage, which
//! [`KeyProtector::check_decrypted`] detects by recomputing the address
//! checksum from the recovered key.
//!
//! ## Block mode
//!
//! The key is masked with `derived[0..32]`, then AES-256-ECB encrypted under
//! `derived[32..64]`. The output is base58check of
//!
//! ```text
//! [0x01 0x42][0xe0][address checksum: 4][ciphertext]
//! ```
//!
//! so the salt travels with the ciphertext.
//!
//! Derived key material and decrypted keys are held in zeroizing buffers.
//! Nothing in this module logs key bytes or passwords.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use ctr::cipher::{KeyIvInit, StreamCipher};
use thiserror::Error;
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use super::address::{Address, AddressChecksum, AddressError};
use super::keys::{KeyDescriptor, KeyError, PrivateKey, PublicKey};
use crate::config::{
    ScryptParams, ADDRESS_CHECKSUM_LENGTH, AES_BLOCK_LENGTH, OEP_CHECKSUM_OFFSET,
    OEP_CIPHERTEXT_OFFSET, OEP_FLAG, OEP_HEADER, SCRYPT_DERIVED_LENGTH,
};

type Aes256Ctr = ctr::Ctr32BE<Aes256>;

/// Length of the XOR mask / largest key block mode protects.
const MASK_LENGTH: usize = 32;

/// Errors raised while protecting or recovering a key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtectionError {
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// The recovered key does not belong to the expected address.
    #[error("password error: recovered key does not match")]
    PasswordError,

    #[error("key derivation failed: {0}")]
    Kdf(String),

    #[error("cipher error: {0}")]
    Cipher(String),

    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Encrypts and decrypts private keys under a password.
///
/// Holds only its scrypt parameters, so it is cheap to clone and safe to
/// share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyProtector {
    params: ScryptParams,
}

impl KeyProtector {
    pub fn new(params: ScryptParams) -> Result<Self, ProtectionError> {
        params
            .validate()
            .map_err(|e| ProtectionError::InvalidParams(e.to_string()))?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ScryptParams {
        &self.params
    }

    /// `scrypt(NFC(password), salt)`, always 64 bytes.
    fn derive(
        &self,
        password: &str,
        salt: &AddressChecksum,
    ) -> Result<Zeroizing<[u8; SCRYPT_DERIVED_LENGTH]>, ProtectionError> {
        let params = scrypt::Params::new(
            self.params.log_cost(),
            self.params.block_size,
            self.params.parallel,
            SCRYPT_DERIVED_LENGTH,
        )
        .map_err(|e| ProtectionError::InvalidParams(e.to_string()))?;

        let normalized: Zeroizing<String> = Zeroizing::new(password.nfc().collect());
        let mut derived = Zeroizing::new([0u8; SCRYPT_DERIVED_LENGTH]);
        scrypt::scrypt(
            normalized.as_bytes(),
            salt.as_bytes(),
            &params,
            &mut derived[..],
        )
        .map_err(|e| ProtectionError::Kdf(e.to_string()))?;

        debug!(
            salt = %salt,
            n = self.params.cost,
            r = self.params.block_size,
            p = self.params.parallel,
            "derived key protection secret"
        );
        Ok(derived)
    }

    // -----------------------------------------------------------------------
    // Stream mode
    // -----------------------------------------------------------------------

    /// Encrypts `private_key` in stream mode, salted by `public_key`'s address.
    pub fn encrypt(
        &self,
        private_key: &[u8],
        public_key: &PublicKey,
        password: &str,
    ) -> Result<String, ProtectionError> {
        let salt = Address::from_public_key(public_key).checksum();
        let derived = self.derive(password, &salt)?;

        let mut buf = Zeroizing::new(private_key.to_vec());
        apply_ctr(&derived, &mut buf)?;
        Ok(STANDARD.encode(&buf[..]))
    }

    /// Inverse of [`encrypt`](Self::encrypt). Succeeds for any password;
    /// follow with [`check_decrypted`](Self::check_decrypted).
    pub fn decrypt(
        &self,
        encrypted: &str,
        salt: &AddressChecksum,
        password: &str,
    ) -> Result<Zeroizing<Vec<u8>>, ProtectionError> {
        let mut buf = Zeroizing::new(
            STANDARD
                .decode(encrypted)
                .map_err(|e| ProtectionError::InvalidEncoding(e.to_string()))?,
        );
        let derived = self.derive(password, salt)?;
        apply_ctr(&derived, &mut buf)?;
        Ok(buf)
    }

    /// Confirms that `public_key` (derived from a decrypted key) hashes to
    /// the address whose checksum was used as salt.
    pub fn check_decrypted(
        salt: &AddressChecksum,
        public_key: &PublicKey,
    ) -> Result<(), ProtectionError> {
        let actual = Address::from_public_key(public_key).checksum();
        if actual != *salt {
            warn!(expected = %salt, "decrypted key does not match address checksum");
            return Err(ProtectionError::PasswordError);
        }
        Ok(())
    }

    /// Stream-mode decrypt, rebuild the key under `descriptor`, and check it.
    pub fn recover_private_key(
        &self,
        encrypted: &str,
        salt: &AddressChecksum,
        password: &str,
        descriptor: KeyDescriptor,
    ) -> Result<PrivateKey, ProtectionError> {
        let raw = self.decrypt(encrypted, salt, password)?;
        let private_key = rebuild(&raw, descriptor)?;
        Self::check_decrypted(salt, &private_key.public_key()?)?;
        Ok(private_key)
    }

    // -----------------------------------------------------------------------
    // Block mode
    // -----------------------------------------------------------------------

    /// Encrypts `private_key` in block mode. The key must be 16 or 32 bytes.
    pub fn encrypt_ecb(
        &self,
        private_key: &[u8],
        public_key: &PublicKey,
        password: &str,
    ) -> Result<String, ProtectionError> {
        check_block_length(private_key.len())?;
        let salt = Address::from_public_key(public_key).checksum();
        let derived = self.derive(password, &salt)?;

        let mut buf = Zeroizing::new(private_key.to_vec());
        xor_mask(&mut buf, &derived[..MASK_LENGTH]);
        let cipher = block_cipher(&derived)?;
        for chunk in buf.chunks_exact_mut(AES_BLOCK_LENGTH) {
            cipher.encrypt_block(aes::Block::from_mut_slice(chunk));
        }

        let mut envelope = Vec::with_capacity(OEP_CIPHERTEXT_OFFSET + buf.len());
        envelope.extend_from_slice(&OEP_HEADER);
        envelope.push(OEP_FLAG);
        envelope.extend_from_slice(salt.as_bytes());
        envelope.extend_from_slice(&buf);
        Ok(bs58::encode(envelope).with_check().into_string())
    }

    /// Inverse of [`encrypt_ecb`](Self::encrypt_ecb). The salt is read
    /// from the envelope.
    pub fn decrypt_ecb(
        &self,
        encrypted: &str,
        password: &str,
    ) -> Result<Zeroizing<Vec<u8>>, ProtectionError> {
        let (salt, ciphertext) = open_envelope(encrypted)?;
        check_block_length(ciphertext.len())?;
        let derived = self.derive(password, &salt)?;

        let mut buf = Zeroizing::new(ciphertext);
        let cipher = block_cipher(&derived)?;
        for chunk in buf.chunks_exact_mut(AES_BLOCK_LENGTH) {
            cipher.decrypt_block(aes::Block::from_mut_slice(chunk));
        }
        xor_mask(&mut buf, &derived[..MASK_LENGTH]);
        Ok(buf)
    }

    /// Block-mode counterpart of [`check_decrypted`](Self::check_decrypted),
    /// taking the salt out of the envelope.
    pub fn check_ecb_decrypted(
        encrypted: &str,
        public_key: &PublicKey,
    ) -> Result<(), ProtectionError> {
        let (salt, _) = open_envelope(encrypted)?;
        Self::check_decrypted(&salt, public_key)
    }

    /// Block-mode decrypt, rebuild the key under `descriptor`, and check it.
    pub fn recover_private_key_ecb(
        &self,
        encrypted: &str,
        password: &str,
        descriptor: KeyDescriptor,
    ) -> Result<PrivateKey, ProtectionError> {
        let raw = self.decrypt_ecb(encrypted, password)?;
        let private_key = rebuild(&raw, descriptor)?;
        Self::check_ecb_decrypted(encrypted, &private_key.public_key()?)?;
        Ok(private_key)
    }
}

fn apply_ctr(derived: &[u8; SCRYPT_DERIVED_LENGTH], buf: &mut [u8]) -> Result<(), ProtectionError> {
    let mut cipher = Aes256Ctr::new_from_slices(&derived[32..64], &derived[..16])
        .map_err(|e| ProtectionError::Cipher(e.to_string()))?;
    cipher.apply_keystream(buf);
    Ok(())
}

fn block_cipher(derived: &[u8; SCRYPT_DERIVED_LENGTH]) -> Result<Aes256, ProtectionError> {
    Aes256::new_from_slice(&derived[32..64]).map_err(|e| ProtectionError::Cipher(e.to_string()))
}

fn xor_mask(buf: &mut [u8], mask: &[u8]) {
    for (byte, m) in buf.iter_mut().zip(mask) {
        *byte ^= m;
    }
}

fn check_block_length(len: usize) -> Result<(), ProtectionError> {
    if len == 0 || len % AES_BLOCK_LENGTH != 0 || len > MASK_LENGTH {
        return Err(ProtectionError::InvalidParams(format!(
            "block mode needs 16 or 32 key bytes, got {len}"
        )));
    }
    Ok(())
}

/// Splits a block-mode envelope into its salt and ciphertext.
fn open_envelope(encrypted: &str) -> Result<(AddressChecksum, Vec<u8>), ProtectionError> {
    let data = bs58::decode(encrypted)
        .with_check(None)
        .into_vec()
        .map_err(|e| ProtectionError::InvalidEncoding(e.to_string()))?;
    if data.len() < OEP_CIPHERTEXT_OFFSET {
        return Err(ProtectionError::InvalidEncoding(format!(
            "protected key too short: {} bytes",
            data.len()
        )));
    }
    if data[..OEP_HEADER.len()] != OEP_HEADER || data[OEP_HEADER.len()] != OEP_FLAG {
        return Err(ProtectionError::InvalidEncoding(
            "missing protected key header".into(),
        ));
    }

    let mut salt = [0u8; ADDRESS_CHECKSUM_LENGTH];
    salt.copy_from_slice(&data[OEP_CHECKSUM_OFFSET..OEP_CIPHERTEXT_OFFSET]);
    Ok((AddressChecksum::new(salt), data[OEP_CIPHERTEXT_OFFSET..].to_vec()))
}

/// Garbage from a wrong password may not even be a valid scalar; report
/// that as a password error rather than a key error.
fn rebuild(raw: &[u8], descriptor: KeyDescriptor) -> Result<PrivateKey, ProtectionError> {
    match PrivateKey::new(raw, descriptor) {
        Ok(key) => Ok(key),
        Err(KeyError::InvalidPrivateKey) => {
            warn!("decrypted bytes are not a valid private key");
            Err(ProtectionError::PasswordError)
        }
        Err(other) => Err(other.into()),
    }
}
