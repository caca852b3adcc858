//! # Transaction Module
//!
//! The canonical binary form of ledger transactions, and signing on top of
//! it.
//!
//! ## Architecture
//!
//! ```text
//! types.rs       : TxType, Fixed64, Fee, TxHash
//! payload.rs     : InvokeCode / DeployCode and the type-based dispatch
//! attribute.rs   : TransactionAttribute (usage byte + data)
//! tx_signature.rs: TxSignature (keys, threshold, compact signatures)
//! builder.rs     : Transaction, its codec and hash, TransactionBuilder
//! signing.rs     : single-signer and m-of-n signing
//! verification.rs: signature verification against the hash
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: [`Transaction::new`] or [`TransactionBuilder`].
//! 2. **Sign**: [`sign_transaction`] / [`add_multi_sign`] append entries.
//! 3. **Encode**: [`Transaction::serialize`] / [`Transaction::to_hex`].
//! 4. **Decode**: [`Transaction::deserialize`] consumes the whole input.
//! 5. **Verify**: [`verify_transaction`].

pub mod attribute;
pub mod builder;
pub mod error;
pub mod payload;
pub mod signing;
pub mod tx_signature;
pub mod types;
pub mod verification;

pub use attribute::TransactionAttribute;
pub use builder::{Transaction, TransactionBuilder};
pub use error::TransactionError;
pub use payload::{DeployCode, InvokeCode, Payload};
pub use signing::{add_multi_sign, sign_transaction};
pub use tx_signature::TxSignature;
pub use types::{Fee, Fixed64, TxHash, TxType};
pub use verification::verify_transaction;
