// Copyright (c) 2026 ont-core contributors. MIT License.
// See LICENSE for details.

//! # ont-core
//!
//! The cryptographic and wire-format core of the ONT client SDK. Three jobs:
//!
//! 1. Encode and decode signed transactions in the ledger's canonical binary
//!    form, and compute their hashes.
//! 2. Encode and decode signatures as compact bytes, JWT segments, or
//!    PGP-style JSON envelopes.
//! 3. Protect private keys at rest with a password (scrypt + AES), in both
//!    historical formats.
//!
//! ## Architecture
//!
//! - **config**: Wire constants and [`config::ScryptParams`].
//! - **codec**: [`codec::ByteCursor`] and varlen writers.
//! - **crypto**: Hashes, the scheme table, keys, addresses, signature
//!   codecs, key protection.
//! - **transaction**: Transaction structure, codec, signing, verification.
//! - **logging**: Stock `tracing` subscriber setup.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ont_core::crypto::{KeyDescriptor, PrivateKey, SigningScheme};
//! use ont_core::transaction::{sign_transaction, verify_transaction, InvokeCode, TransactionBuilder};
//!
//! let key = PrivateKey::generate(KeyDescriptor::insecure_default()).unwrap();
//! let mut tx = TransactionBuilder::new()
//!     .gas_price(500)
//!     .gas_limit(20_000)
//!     .payload(InvokeCode::new(vec![0x00, 0xc1]))
//!     .build();
//! sign_transaction(&mut tx, &key, SigningScheme::EcdsaSha256).unwrap();
//! verify_transaction(&tx).unwrap();
//! println!("{}", tx.to_hex());
//! ```
//!
//! Everything is synchronous and free of shared state.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod logging;
pub mod transaction;
