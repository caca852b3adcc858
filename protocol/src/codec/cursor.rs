//! Sequential reader over a borrowed byte buffer, plus the matching writer
//! helpers.
//!
//! A [`ByteCursor`] owns its position and is handed to field decoders by
//! `&mut`, so two decoders can never observe the same offset. There is no
//! seeking and no peeking: a decoder that needs a byte consumes it.

use super::error::CodecError;

/// Sequential reader over wire-format bytes.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Reads the next `n` bytes and advances past them.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::BufferUnderrun {
                needed: n,
                remaining,
            });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read(1)?[0])
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Reads a single `0x00`/`0x01` byte.
    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        match self.read_u8()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            other => Err(CodecError::InvalidBool(other)),
        }
    }

    /// Reads a varlen count prefix.
    pub fn read_var_len(&mut self) -> Result<u64, CodecError> {
        match self.read_u8()? {
            0xfd => Ok(u64::from(self.read_u16_le()?)),
            0xfe => Ok(u64::from(self.read_u32_le()?)),
            0xff => self.read_u64_le(),
            small => Ok(u64::from(small)),
        }
    }

    /// Reads a varlen prefix and then that many bytes.
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        let len = self.read_var_len()?;
        // A length that does not fit in usize can never be satisfied.
        let len = usize::try_from(len).map_err(|_| CodecError::BufferUnderrun {
            needed: usize::MAX,
            remaining: self.remaining(),
        })?;
        self.read(len)
    }

    /// Reads a varlen-prefixed UTF-8 string.
    pub fn read_var_string(&mut self) -> Result<String, CodecError> {
        let bytes = self.read_var_bytes()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }

    /// `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Everything not yet consumed, without advancing.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Fails with [`CodecError::TrailingBytes`] unless the buffer is exhausted.
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }
}

/// Appends a varlen count using the smallest width.
pub fn write_var_len(buf: &mut Vec<u8>, value: u64) {
    if value < 0xfd {
        buf.push(value as u8);
    } else if value <= u64::from(u16::MAX) {
        buf.push(0xfd);
        buf.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= u64::from(u32::MAX) {
        buf.push(0xfe);
        buf.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        buf.push(0xff);
        buf.extend_from_slice(&value.to_le_bytes());
    }
}

/// Appends a varlen prefix followed by `data`.
pub fn write_var_bytes(buf: &mut Vec<u8>, data: &[u8]) {
    write_var_len(buf, data.len() as u64);
    buf.extend_from_slice(data);
}

/// Appends a varlen-prefixed UTF-8 string.
pub fn write_var_string(buf: &mut Vec<u8>, s: &str) {
    write_var_bytes(buf, s.as_bytes());
}

/// Decodes hex text, accepting either case.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_advances_position() {
        let data = [1, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_u8().unwrap(), 3);
        assert_eq!(cursor.remaining(), 2);
        assert!(!cursor.is_empty());
        assert_eq!(cursor.read(2).unwrap(), &[4, 5]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn short_read_is_underrun() {
        let data = [0xaa, 0xbb];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(
            cursor.read(3),
            Err(CodecError::BufferUnderrun {
                needed: 3,
                remaining: 2
            })
        );
        // A failed read does not move the cursor.
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn zero_length_read_on_empty_buffer() {
        let mut cursor = ByteCursor::new(&[]);
        assert!(cursor.is_empty());
        assert_eq!(cursor.read(0).unwrap(), &[] as &[u8]);
        assert!(cursor.read_u8().is_err());
    }

    #[test]
    fn var_len_widths() {
        for value in [0u64, 1, 0xfc, 0xfd, 0xffff, 0x1_0000, 0xffff_ffff, 0x1_0000_0000] {
            let mut buf = Vec::new();
            write_var_len(&mut buf, value);
            let expected_width = match value {
                v if v < 0xfd => 1,
                v if v <= 0xffff => 3,
                v if v <= 0xffff_ffff => 5,
                _ => 9,
            };
            assert_eq!(buf.len(), expected_width, "width for {value:#x}");

            let mut cursor = ByteCursor::new(&buf);
            assert_eq!(cursor.read_var_len().unwrap(), value);
            assert!(cursor.is_empty());
        }
    }

    #[test]
    fn small_counts_are_one_byte() {
        let mut buf = Vec::new();
        write_var_len(&mut buf, 3);
        assert_eq!(buf, vec![0x03]);
    }

    #[test]
    fn var_bytes_and_strings() {
        let mut buf = Vec::new();
        write_var_bytes(&mut buf, &[0xde, 0xad]);
        write_var_string(&mut buf, "ont");
        assert_eq!(hex::encode(&buf), "02dead036f6e74");

        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_var_bytes().unwrap(), &[0xde, 0xad]);
        assert_eq!(cursor.read_var_string().unwrap(), "ont");
        assert!(cursor.finish().is_ok());
    }

    #[test]
    fn var_bytes_length_past_end() {
        let data = [0x05, 0x01, 0x02];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(
            cursor.read_var_bytes(),
            Err(CodecError::BufferUnderrun {
                needed: 5,
                remaining: 2
            })
        );
    }

    #[test]
    fn invalid_utf8_string() {
        let data = [0x02, 0xff, 0xfe];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_var_string(), Err(CodecError::InvalidUtf8));
    }

    #[test]
    fn bool_bytes() {
        let data = [0x00, 0x01, 0x02];
        let mut cursor = ByteCursor::new(&data);
        assert!(!cursor.read_bool().unwrap());
        assert!(cursor.read_bool().unwrap());
        assert_eq!(cursor.read_bool(), Err(CodecError::InvalidBool(0x02)));
    }

    #[test]
    fn little_endian_integers() {
        let data = hex::decode("f401000000000000").unwrap();
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u64_le().unwrap(), 500);
    }

    #[test]
    fn finish_reports_trailing_bytes() {
        let data = [1, 2, 3];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_u8().unwrap();
        assert_eq!(cursor.finish(), Err(CodecError::TrailingBytes(2)));
    }

    #[test]
    fn decode_hex_rejects_garbage() {
        assert!(matches!(decode_hex("zz"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(decode_hex("abc"), Err(CodecError::InvalidHex(_))));
        assert_eq!(decode_hex("ABcd").unwrap(), vec![0xab, 0xcd]);
    }
}
