//! Signature verification for decoded transactions.
//!
//! A transaction verifies when every [`TxSignature`](super::TxSignature)
//! entry holds at least `m` signatures and each of them is valid, over the
//! transaction hash, for a distinct key listed in that entry. An unsigned
//! transaction verifies trivially; whether it *needs* signatures is a
//! ledger rule, not a codec one.

use tracing::{debug, warn};

use super::builder::Transaction;
use super::error::TransactionError;

pub fn verify_transaction(tx: &Transaction) -> Result<(), TransactionError> {
    let hash = tx.hash();
    let msg = hash.as_bytes();

    for (index, entry) in tx.signatures.iter().enumerate() {
        let required = usize::from(entry.m);
        if required == 0 {
            return Err(TransactionError::VerificationFailed {
                index,
                reason: "threshold is zero".into(),
            });
        }
        if entry.signatures.len() < required {
            return Err(TransactionError::InsufficientSignatures {
                index,
                present: entry.signatures.len(),
                required,
            });
        }

        let mut used = vec![false; entry.public_keys.len()];
        for sig in &entry.signatures {
            // A key that cannot verify under this scheme simply does not match.
            let matched = entry.public_keys.iter().enumerate().find(|(i, key)| {
                !used[*i] && matches!(key.verify(msg, sig), Ok(true))
            });
            match matched {
                Some((i, _)) => used[i] = true,
                None => {
                    warn!(%hash, index, scheme = %sig.scheme, "transaction signature does not verify");
                    return Err(TransactionError::VerificationFailed {
                        index,
                        reason: format!("no unused listed key accepts the {} signature", sig.scheme),
                    });
                }
            }
        }
    }

    debug!(%hash, entries = tx.signatures.len(), "transaction signatures verified");
    Ok(())
}
