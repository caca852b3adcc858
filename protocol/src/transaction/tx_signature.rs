//! Signature entries attached to a transaction.
//!
//! ```text
//! varlen n | n x var_bytes(public key) | u8 m | varlen k | k x var_bytes(compact signature)
//! ```
//!
//! `m` is the threshold: a single-signer entry is `n = 1, m = 1, k = 1`.

use crate::codec::{write_var_bytes, write_var_len, ByteCursor};
use crate::crypto::{PublicKey, Signature};

use super::error::TransactionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxSignature {
    pub public_keys: Vec<PublicKey>,
    /// Number of valid signatures required.
    pub m: u8,
    pub signatures: Vec<Signature>,
}

impl TxSignature {
    /// Entry for a single signer.
    pub fn single(public_key: PublicKey, signature: Signature) -> Self {
        Self {
            public_keys: vec![public_key],
            m: 1,
            signatures: vec![signature],
        }
    }

    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        write_var_len(buf, self.public_keys.len() as u64);
        for key in &self.public_keys {
            write_var_bytes(buf, &key.serialize());
        }
        buf.push(self.m);
        write_var_len(buf, self.signatures.len() as u64);
        for sig in &self.signatures {
            write_var_bytes(buf, &sig.to_compact());
        }
    }

    pub fn deserialize(cursor: &mut ByteCursor<'_>) -> Result<Self, TransactionError> {
        // Counts come off the wire, so nothing is preallocated from them.
        let key_count = cursor.read_var_len()?;
        let mut public_keys = Vec::new();
        for _ in 0..key_count {
            public_keys.push(PublicKey::deserialize(cursor.read_var_bytes()?)?);
        }

        let m = cursor.read_u8()?;

        let sig_count = cursor.read_var_len()?;
        let mut signatures = Vec::new();
        for _ in 0..sig_count {
            signatures.push(Signature::from_compact(cursor.read_var_bytes()?)?);
        }

        Ok(Self {
            public_keys,
            m,
            signatures,
        })
    }
}
