//! Transaction attributes: `usage (1) | data`.
//!
//! | usage | name           | data                |
//! |-------|----------------|---------------------|
//! | 0x00  | Nonce          | `var_bytes`         |
//! | 0x20  | Script         | 20-byte address     |
//! | 0x81  | DescriptionUrl | `var_bytes`         |
//! | 0x90  | Description    | `var_bytes`         |

use crate::codec::{write_var_bytes, ByteCursor};
use crate::crypto::Address;

use super::error::TransactionError;

pub const USAGE_NONCE: u8 = 0x00;
pub const USAGE_SCRIPT: u8 = 0x20;
pub const USAGE_DESCRIPTION_URL: u8 = 0x81;
pub const USAGE_DESCRIPTION: u8 = 0x90;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionAttribute {
    Nonce(Vec<u8>),
    /// An extra address whose signature the transaction requires.
    Script(Address),
    DescriptionUrl(Vec<u8>),
    Description(Vec<u8>),
}

impl TransactionAttribute {
    pub fn usage(&self) -> u8 {
        match self {
            Self::Nonce(_) => USAGE_NONCE,
            Self::Script(_) => USAGE_SCRIPT,
            Self::DescriptionUrl(_) => USAGE_DESCRIPTION_URL,
            Self::Description(_) => USAGE_DESCRIPTION,
        }
    }

    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.push(self.usage());
        match self {
            Self::Script(address) => buf.extend_from_slice(address.as_bytes()),
            Self::Nonce(data) | Self::DescriptionUrl(data) | Self::Description(data) => {
                write_var_bytes(buf, data)
            }
        }
    }

    pub fn deserialize(cursor: &mut ByteCursor<'_>) -> Result<Self, TransactionError> {
        let usage = cursor.read_u8()?;
        let attribute = match usage {
            USAGE_SCRIPT => Self::Script(Address::new(cursor.read_array()?)),
            USAGE_NONCE => Self::Nonce(cursor.read_var_bytes()?.to_vec()),
            USAGE_DESCRIPTION_URL => Self::DescriptionUrl(cursor.read_var_bytes()?.to_vec()),
            USAGE_DESCRIPTION => Self::Description(cursor.read_var_bytes()?.to_vec()),
            other => return Err(TransactionError::UnknownAttributeUsage(other)),
        };
        Ok(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;

    #[test]
    fn script_attribute_is_fixed_width() {
        let address = Address::from_hex("34ae80f2bb7c0ff0bb96a081241cbc8702111395").unwrap();
        let mut buf = Vec::new();
        TransactionAttribute::Script(address).serialize_into(&mut buf);
        assert_eq!(hex::encode(&buf), "2034ae80f2bb7c0ff0bb96a081241cbc8702111395");
    }

    #[test]
    fn var_bytes_attributes() {
        for attr in [
            TransactionAttribute::Nonce(vec![1, 2, 3]),
            TransactionAttribute::DescriptionUrl(b"https://ont.io".to_vec()),
            TransactionAttribute::Description(b"hello".to_vec()),
        ] {
            let mut buf = Vec::new();
            attr.serialize_into(&mut buf);
            assert_eq!(buf[0], attr.usage());
            let mut cursor = ByteCursor::new(&buf);
            assert_eq!(TransactionAttribute::deserialize(&mut cursor).unwrap(), attr);
            assert!(cursor.is_empty());
        }
    }

    #[test]
    fn description_layout() {
        let mut buf = Vec::new();
        TransactionAttribute::Description(b"hello".to_vec()).serialize_into(&mut buf);
        assert_eq!(hex::encode(&buf), "900568656c6c6f");
    }

    #[test]
    fn unknown_usage_rejected() {
        let mut cursor = ByteCursor::new(&[0x42, 0x00]);
        assert_eq!(
            TransactionAttribute::deserialize(&mut cursor),
            Err(TransactionError::UnknownAttributeUsage(0x42))
        );
    }

    #[test]
    fn short_script_underruns() {
        let mut cursor = ByteCursor::new(&[0x20, 0x01, 0x02]);
        assert!(matches!(
            TransactionAttribute::deserialize(&mut cursor),
            Err(TransactionError::Codec(CodecError::BufferUnderrun { .. }))
        ));
    }
}
