//! # Signature Codecs
//!
//! A [`Signature`] is a scheme plus the raw signature value. It travels in
//! three interchangeable forms:
//!
//! ## Compact
//!
//! ```text
//! [scheme id: 1][SM2 only: "1234567812345678" 0x00][value]
//! ```
//!
//! This is what transactions carry and what `serialize_hex` produces.
//!
//! ## JWT
//!
//! The value alone, base64url without padding. The scheme and key id live
//! in the token header, so the decoder is handed them by the caller.
//!
//! ## PGP envelope
//!
//! A JSON object:
//!
//! ```json
//! {"PublicKeyId":"did:ont:...#keys-1","Format":"pgp","Algorithm":"SHA256withECDSA","Value":"AQ..."}
//! ```
//!
//! `Value` is standard base64 of the *compact* form, so the scheme id is
//! present twice. The decoder resolves the scheme from `Algorithm` and takes
//! only the value out of the compact bytes.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::keys::KeyError;
use super::scheme::{SchemeError, SigningScheme};
use crate::config::{DEFAULT_SM2_ID, PGP_FORMAT};

/// base64url that accepts input with or without padding.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors raised while encoding or decoding signatures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    #[error("invalid signature encoding: {0}")]
    InvalidEncoding(String),

    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error(transparent)]
    Key(#[from] KeyError),
}

/// A signature value tagged with its scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub scheme: SigningScheme,
    pub value: Vec<u8>,
    /// Identifier of the signing key, when the envelope named one.
    pub public_key_id: Option<String>,
}

/// PGP-style JSON envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PgpSignature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_id: Option<String>,
    pub format: String,
    pub algorithm: String,
    pub value: String,
}

impl Signature {
    pub fn new(scheme: SigningScheme, value: Vec<u8>) -> Self {
        Self {
            scheme,
            value,
            public_key_id: None,
        }
    }

    pub fn with_public_key_id(mut self, id: impl Into<String>) -> Self {
        self.public_key_id = Some(id.into());
        self
    }

    // -----------------------------------------------------------------------
    // Compact
    // -----------------------------------------------------------------------

    pub fn to_compact(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.value.len() + 18);
        out.push(self.scheme.id());
        if self.scheme == SigningScheme::Sm2Sm3 {
            out.extend_from_slice(DEFAULT_SM2_ID.as_bytes());
            out.push(0x00);
        }
        out.extend_from_slice(&self.value);
        out
    }

    /// Parses the compact form.
    pub fn from_compact(data: &[u8]) -> Result<Self, SignatureError> {
        if data.len() < 2 {
            return Err(SignatureError::InvalidParams(format!(
                "compact signature needs at least 2 bytes, got {}",
                data.len()
            )));
        }
        let scheme = SigningScheme::from_id(data[0])?;
        let mut value = &data[1..];

        if scheme == SigningScheme::Sm2Sm3 {
            let end = value.iter().position(|&b| b == 0x00).ok_or_else(|| {
                SignatureError::MalformedSignature("SM2 user id is not terminated".into())
            })?;
            value = &value[end + 1..];
            if value.is_empty() {
                return Err(SignatureError::MalformedSignature(
                    "SM2 signature has no value after the user id".into(),
                ));
            }
        }

        tracing::trace!(%scheme, len = value.len(), "decoded compact signature");
        Ok(Self::new(scheme, value.to_vec()))
    }

    /// Hex of the compact form.
    pub fn serialize_hex(&self) -> String {
        hex::encode(self.to_compact())
    }

    pub fn deserialize_hex(s: &str) -> Result<Self, SignatureError> {
        let data = hex::decode(s).map_err(|e| SignatureError::InvalidEncoding(e.to_string()))?;
        Self::from_compact(&data)
    }

    // -----------------------------------------------------------------------
    // JWT
    // -----------------------------------------------------------------------

    pub fn to_jwt(&self) -> String {
        URL_SAFE_NO_PAD.encode(&self.value)
    }

    pub fn from_jwt(
        encoded: &str,
        scheme: SigningScheme,
        public_key_id: Option<String>,
    ) -> Result<Self, SignatureError> {
        let value = URL_SAFE_LENIENT
            .decode(encoded)
            .map_err(|e| SignatureError::InvalidEncoding(e.to_string()))?;
        Ok(Self {
            scheme,
            value,
            public_key_id,
        })
    }

    // -----------------------------------------------------------------------
    // PGP
    // -----------------------------------------------------------------------

    pub fn to_pgp_envelope(&self) -> PgpSignature {
        PgpSignature {
            public_key_id: self.public_key_id.clone(),
            format: PGP_FORMAT.to_string(),
            algorithm: self.scheme.label().to_string(),
            value: STANDARD.encode(self.to_compact()),
        }
    }

    pub fn from_pgp_envelope(envelope: &PgpSignature) -> Result<Self, SignatureError> {
        if envelope.format != PGP_FORMAT {
            return Err(SignatureError::InvalidParams(format!(
                "unsupported signature format: {}",
                envelope.format
            )));
        }
        let scheme = SigningScheme::from_label(&envelope.algorithm)?;
        let compact = STANDARD
            .decode(&envelope.value)
            .map_err(|e| SignatureError::InvalidEncoding(e.to_string()))?;
        let parsed = Self::from_compact(&compact)?;
        Ok(Self {
            scheme,
            value: parsed.value,
            public_key_id: envelope.public_key_id.clone(),
        })
    }

    /// JSON text of the PGP envelope.
    pub fn to_pgp(&self) -> Result<String, SignatureError> {
        serde_json::to_string(&self.to_pgp_envelope())
            .map_err(|e| SignatureError::InvalidEncoding(e.to_string()))
    }

    pub fn from_pgp(json: &str) -> Result<Self, SignatureError> {
        let envelope: PgpSignature =
            serde_json::from_str(json).map_err(|e| SignatureError::InvalidEncoding(e.to_string()))?;
        Self::from_pgp_envelope(&envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_value() -> Vec<u8> {
        (0u8..64).collect()
    }

    #[test]
    fn compact_round_trip_for_every_scheme() {
        for scheme in SigningScheme::ALL {
            let sig = Signature::new(scheme, sample_value());
            let compact = sig.to_compact();
            assert_eq!(compact[0], scheme.id());
            assert_eq!(Signature::from_compact(&compact).unwrap(), sig, "{scheme}");
        }
    }

    #[test]
    fn compact_hex_form() {
        let sig = Signature::new(SigningScheme::EcdsaSha256, vec![0xab, 0xcd]);
        assert_eq!(sig.serialize_hex(), "01abcd");
        assert_eq!(Signature::deserialize_hex("01abcd").unwrap(), sig);
    }

    #[test]
    fn sm2_compact_embeds_user_id() {
        let sig = Signature::new(SigningScheme::Sm2Sm3, vec![0x11, 0x22]);
        assert_eq!(
            sig.serialize_hex(),
            format!("09{}001122", hex::encode(DEFAULT_SM2_ID))
        );
    }

    #[test]
    fn too_short_is_invalid_params() {
        assert!(matches!(
            Signature::from_compact(&[0x01]),
            Err(SignatureError::InvalidParams(_))
        ));
        assert!(matches!(
            Signature::from_compact(&[]),
            Err(SignatureError::InvalidParams(_))
        ));
    }

    #[test]
    fn unknown_scheme_id() {
        assert_eq!(
            Signature::from_compact(&[0x0b, 0x00, 0x01]),
            Err(SignatureError::Scheme(SchemeError::UnknownScheme(0x0b)))
        );
    }

    #[test]
    fn sm2_without_terminator_is_malformed() {
        let mut data = vec![0x09];
        data.extend_from_slice(DEFAULT_SM2_ID.as_bytes());
        assert!(matches!(
            Signature::from_compact(&data),
            Err(SignatureError::MalformedSignature(_))
        ));
    }

    #[test]
    fn sm2_with_empty_value_is_malformed() {
        let mut data = vec![0x09];
        data.extend_from_slice(DEFAULT_SM2_ID.as_bytes());
        data.push(0x00);
        assert!(matches!(
            Signature::from_compact(&data),
            Err(SignatureError::MalformedSignature(_))
        ));
    }

    #[test]
    fn jwt_round_trip() {
        let sig = Signature::new(SigningScheme::EcdsaSha256, sample_value());
        let jwt = sig.to_jwt();
        assert!(!jwt.contains('='));
        assert!(!jwt.contains('+') && !jwt.contains('/'));
        let back = Signature::from_jwt(&jwt, SigningScheme::EcdsaSha256, None).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn jwt_tolerates_padding() {
        let back = Signature::from_jwt("_-8=", SigningScheme::EddsaSha512, Some("k1".into())).unwrap();
        assert_eq!(back.value, vec![0xff, 0xef]);
        assert_eq!(back.public_key_id.as_deref(), Some("k1"));
        let unpadded = Signature::from_jwt("_-8", SigningScheme::EddsaSha512, None).unwrap();
        assert_eq!(unpadded.value, back.value);
    }

    #[test]
    fn jwt_rejects_garbage() {
        assert!(matches!(
            Signature::from_jwt("@@@", SigningScheme::EcdsaSha256, None),
            Err(SignatureError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn pgp_envelope_shape() {
        let sig = Signature::new(SigningScheme::EcdsaSha256, vec![0xab, 0xcd])
            .with_public_key_id("did:ont:test#keys-1");
        let json = sig.to_pgp().unwrap();
        assert_eq!(
            json,
            r#"{"PublicKeyId":"did:ont:test#keys-1","Format":"pgp","Algorithm":"SHA256withECDSA","Value":"AavN"}"#
        );
    }

    #[test]
    fn pgp_round_trip_keeps_key_id() {
        let sig = Signature::new(SigningScheme::Sm2Sm3, sample_value()).with_public_key_id("key-7");
        let back = Signature::from_pgp(&sig.to_pgp().unwrap()).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn pgp_without_key_id_omits_field() {
        let sig = Signature::new(SigningScheme::EddsaSha512, vec![1, 2, 3]);
        let json = sig.to_pgp().unwrap();
        assert!(!json.contains("PublicKeyId"));
        assert_eq!(Signature::from_pgp(&json).unwrap(), sig);
    }

    #[test]
    fn pgp_rejects_other_formats() {
        let json = r#"{"Format":"jws","Algorithm":"SHA256withECDSA","Value":"AavN"}"#;
        assert!(matches!(
            Signature::from_pgp(json),
            Err(SignatureError::InvalidParams(_))
        ));
    }

    #[test]
    fn pgp_unknown_algorithm_label() {
        let json = r#"{"Format":"pgp","Algorithm":"MD5withRSA","Value":"AavN"}"#;
        assert_eq!(
            Signature::from_pgp(json),
            Err(SignatureError::Scheme(SchemeError::UnknownSchemeLabel(
                "MD5withRSA".into()
            )))
        );
    }
}
