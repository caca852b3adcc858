//! Transaction signing.
//!
//! Every signer signs the 32 bytes of [`Transaction::hash`], which covers
//! only the unsigned part, so signatures can be added in any order without
//! invalidating the ones already present. A signature is appended only
//! after it has been produced: a failed sign leaves the transaction as it
//! was.

use tracing::debug;

use super::builder::Transaction;
use super::error::TransactionError;
use super::tx_signature::TxSignature;
use crate::crypto::{PrivateKey, PublicKey, SignatureError, SigningScheme};

/// Signs `tx` as a single signer and appends a `1-of-1` entry.
pub fn sign_transaction(
    tx: &mut Transaction,
    private_key: &PrivateKey,
    scheme: SigningScheme,
) -> Result<(), TransactionError> {
    let hash = tx.hash();
    let public_key = private_key.public_key()?;
    let signature = private_key.sign(hash.as_bytes(), scheme)?;

    tx.signatures.push(TxSignature::single(public_key, signature));
    debug!(%hash, %scheme, "signed transaction");
    Ok(())
}

/// Adds one signature of an `m`-of-`public_keys` multi-signature.
///
/// Merges into the existing entry for the same key list, or starts a new
/// one. The signer's public key must be in `public_keys`.
pub fn add_multi_sign(
    tx: &mut Transaction,
    m: u8,
    public_keys: &[PublicKey],
    private_key: &PrivateKey,
    scheme: SigningScheme,
) -> Result<(), TransactionError> {
    if m == 0 || usize::from(m) > public_keys.len() {
        return Err(SignatureError::InvalidParams(format!(
            "threshold {m} is not within 1..={}",
            public_keys.len()
        ))
        .into());
    }
    let signer = private_key.public_key()?;
    if !public_keys.contains(&signer) {
        return Err(SignatureError::InvalidParams(
            "signer is not one of the listed public keys".into(),
        )
        .into());
    }

    let hash = tx.hash();
    let signature = private_key.sign(hash.as_bytes(), scheme)?;

    match tx
        .signatures
        .iter_mut()
        .find(|entry| entry.public_keys == public_keys)
    {
        Some(entry) => entry.signatures.push(signature),
        None => tx.signatures.push(TxSignature {
            public_keys: public_keys.to_vec(),
            m,
            signatures: vec![signature],
        }),
    }
    debug!(%hash, m, n = public_keys.len(), "added multi-signature");
    Ok(())
}
