//! The transaction structure, its wire codec, and a builder.
//!
//! ```text
//! version (1) | type (1) | nonce (4) | gasPrice (8 LE) | gasLimit (8 LE)
//! | payer (20) | payload | varlen attrCount | attrs        <- unsigned part
//! | varlen sigCount | sigs
//! ```
//!
//! The hash covers only the unsigned part, so adding signatures never
//! changes it and every signer signs the same 32 bytes.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use super::attribute::TransactionAttribute;
use super::error::TransactionError;
use super::payload::Payload;
use super::tx_signature::TxSignature;
use super::types::{Fixed64, TxHash, TxType};
use crate::codec::{decode_hex, write_var_len, ByteCursor};
use crate::config::{DEFAULT_TX_VERSION, TX_NONCE_LENGTH};
use crate::crypto::hash::double_sha256;
use crate::crypto::Address;

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u8,
    pub tx_type: TxType,
    /// Random bytes that make otherwise identical transactions distinct.
    pub nonce: [u8; TX_NONCE_LENGTH],
    pub gas_price: Fixed64,
    pub gas_limit: Fixed64,
    pub payer: Address,
    pub payload: Payload,
    pub attributes: Vec<TransactionAttribute>,
    pub signatures: Vec<TxSignature>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Transaction {
    /// An unsigned `Invoke` transaction with an empty payload, zero gas, the
    /// zero payer and a fresh random nonce.
    pub fn new() -> Self {
        let mut nonce = [0u8; TX_NONCE_LENGTH];
        OsRng.fill_bytes(&mut nonce);
        Self {
            version: DEFAULT_TX_VERSION,
            tx_type: TxType::Invoke,
            nonce,
            gas_price: Fixed64::ZERO,
            gas_limit: Fixed64::ZERO,
            payer: Address::ZERO,
            payload: Payload::default(),
            attributes: Vec::new(),
            signatures: Vec::new(),
        }
    }

    /// Replaces the payload and sets the type that decodes back to it.
    pub fn set_payload(&mut self, payload: impl Into<Payload>) {
        let payload = payload.into();
        self.tx_type = payload.tx_type();
        self.payload = payload;
    }

    pub fn is_signed(&self) -> bool {
        !self.signatures.is_empty()
    }

    /// Bytes covered by [`hash`](Self::hash).
    pub fn serialize_unsigned(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64);
        buf.push(self.version);
        buf.push(self.tx_type.to_byte());
        buf.extend_from_slice(&self.nonce);
        self.gas_price.serialize_into(&mut buf);
        self.gas_limit.serialize_into(&mut buf);
        buf.extend_from_slice(self.payer.as_bytes());
        self.payload.serialize_into(&mut buf);
        write_var_len(&mut buf, self.attributes.len() as u64);
        for attr in &self.attributes {
            attr.serialize_into(&mut buf);
        }
        buf
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = self.serialize_unsigned();
        write_var_len(&mut buf, self.signatures.len() as u64);
        for sig in &self.signatures {
            sig.serialize_into(&mut buf);
        }
        buf
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    /// Decodes a complete transaction. Bytes left after the signature list
    /// are an error.
    pub fn deserialize(data: &[u8]) -> Result<Self, TransactionError> {
        let mut cursor = ByteCursor::new(data);

        let version = cursor.read_u8()?;
        let tx_type = TxType::from_byte(cursor.read_u8()?);
        let nonce = cursor.read_array()?;
        let gas_price = Fixed64::deserialize(&mut cursor)?;
        let gas_limit = Fixed64::deserialize(&mut cursor)?;
        let payer = Address::new(cursor.read_array()?);
        let payload = Payload::deserialize_for(tx_type, &mut cursor)?;

        let attr_count = cursor.read_var_len()?;
        let mut attributes = Vec::new();
        for _ in 0..attr_count {
            attributes.push(TransactionAttribute::deserialize(&mut cursor)?);
        }

        let sig_count = cursor.read_var_len()?;
        let mut signatures = Vec::new();
        for _ in 0..sig_count {
            signatures.push(TxSignature::deserialize(&mut cursor)?);
        }

        cursor.finish()?;

        debug!(
            %tx_type,
            attributes = attributes.len(),
            signatures = signatures.len(),
            "decoded transaction"
        );

        Ok(Self {
            version,
            tx_type,
            nonce,
            gas_price,
            gas_limit,
            payer,
            payload,
            attributes,
            signatures,
        })
    }

    pub fn from_hex(s: &str) -> Result<Self, TransactionError> {
        Self::deserialize(&decode_hex(s)?)
    }

    /// `SHA-256(SHA-256(serialize_unsigned()))`.
    pub fn hash(&self) -> TxHash {
        TxHash(double_sha256(&self.serialize_unsigned()))
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent construction of an unsigned [`Transaction`].
///
/// Starts from [`Transaction::new`], so anything not set keeps its default,
/// including the random nonce.
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self {
            tx: Transaction::new(),
        }
    }

    pub fn version(mut self, version: u8) -> Self {
        self.tx.version = version;
        self
    }

    /// Overrides the type byte. Usually implied by [`payload`](Self::payload).
    pub fn tx_type(mut self, tx_type: TxType) -> Self {
        self.tx.tx_type = tx_type;
        self
    }

    pub fn nonce(mut self, nonce: [u8; TX_NONCE_LENGTH]) -> Self {
        self.tx.nonce = nonce;
        self
    }

    pub fn gas_price(mut self, gas_price: u64) -> Self {
        self.tx.gas_price = Fixed64(gas_price);
        self
    }

    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.tx.gas_limit = Fixed64(gas_limit);
        self
    }

    pub fn payer(mut self, payer: Address) -> Self {
        self.tx.payer = payer;
        self
    }

    pub fn payload(mut self, payload: impl Into<Payload>) -> Self {
        self.tx.set_payload(payload);
        self
    }

    pub fn attribute(mut self, attribute: TransactionAttribute) -> Self {
        self.tx.attributes.push(attribute);
        self
    }

    pub fn build(self) -> Transaction {
        self.tx
    }
}
