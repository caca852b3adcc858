//! # Binary Codec Primitives
//!
//! The ledger's wire format is a plain concatenation of fixed-width fields
//! and length-prefixed fields. Nothing is self-describing beyond the varlen
//! prefixes, so every decoder in the crate walks a shared [`ByteCursor`]
//! front to back and consumes exactly the bytes it owns.
//!
//! ## Varlen encoding
//!
//! ```text
//! value < 0xfd          -> [value]
//! value <= 0xffff       -> [0xfd][u16 LE]
//! value <= 0xffff_ffff  -> [0xfe][u32 LE]
//! otherwise             -> [0xff][u64 LE]
//! ```
//!
//! Writers always pick the smallest width, so list counts below 0xfd are a
//! single byte on the wire.

pub mod cursor;
pub mod error;

pub use cursor::{
    decode_hex, write_var_bytes, write_var_len, write_var_string, ByteCursor,
};
pub use error::CodecError;
