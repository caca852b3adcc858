//! Transaction payloads.
//!
//! The payload shape is decided by the transaction type, in exactly one
//! place: [`Payload::deserialize_for`]. `Deploy` carries a [`DeployCode`];
//! every other type, including unrecognized ones, carries an [`InvokeCode`].

use crate::codec::{write_var_bytes, write_var_string, ByteCursor, CodecError};

use super::types::TxType;

/// Code to invoke: `var_bytes(code)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvokeCode {
    pub code: Vec<u8>,
}

impl InvokeCode {
    pub fn new(code: Vec<u8>) -> Self {
        Self { code }
    }

    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        write_var_bytes(buf, &self.code);
    }

    pub fn deserialize(cursor: &mut ByteCursor<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            code: cursor.read_var_bytes()?.to_vec(),
        })
    }
}

/// Contract deployment.
///
/// Wire form: `var_bytes(code) | bool need_storage | var_string name |
/// version | author | email | description`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeployCode {
    pub code: Vec<u8>,
    pub need_storage: bool,
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl DeployCode {
    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        write_var_bytes(buf, &self.code);
        buf.push(u8::from(self.need_storage));
        write_var_string(buf, &self.name);
        write_var_string(buf, &self.version);
        write_var_string(buf, &self.author);
        write_var_string(buf, &self.email);
        write_var_string(buf, &self.description);
    }

    pub fn deserialize(cursor: &mut ByteCursor<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            code: cursor.read_var_bytes()?.to_vec(),
            need_storage: cursor.read_bool()?,
            name: cursor.read_var_string()?,
            version: cursor.read_var_string()?,
            author: cursor.read_var_string()?,
            email: cursor.read_var_string()?,
            description: cursor.read_var_string()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Invoke(InvokeCode),
    Deploy(DeployCode),
}

impl Default for Payload {
    /// An empty invocation.
    fn default() -> Self {
        Self::Invoke(InvokeCode::default())
    }
}

impl Payload {
    /// Transaction type this payload is normally carried under.
    pub fn tx_type(&self) -> TxType {
        match self {
            Self::Invoke(_) => TxType::Invoke,
            Self::Deploy(_) => TxType::Deploy,
        }
    }

    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        match self {
            Self::Invoke(p) => p.serialize_into(buf),
            Self::Deploy(p) => p.serialize_into(buf),
        }
    }

    /// Reads the payload shape that `tx_type` implies.
    pub fn deserialize_for(tx_type: TxType, cursor: &mut ByteCursor<'_>) -> Result<Self, CodecError> {
        match tx_type {
            TxType::Deploy => Ok(Self::Deploy(DeployCode::deserialize(cursor)?)),
            _ => Ok(Self::Invoke(InvokeCode::deserialize(cursor)?)),
        }
    }
}

impl From<InvokeCode> for Payload {
    fn from(p: InvokeCode) -> Self {
        Self::Invoke(p)
    }
}

impl From<DeployCode> for Payload {
    fn from(p: DeployCode) -> Self {
        Self::Deploy(p)
    }
}
