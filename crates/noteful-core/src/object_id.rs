//! Record identifiers.
//!
//! Every persisted record is keyed by a 24-character hexadecimal token:
//! 12 bytes encoded as hex, the first 4 being a big-endian unix timestamp
//! and the remaining 8 random. The timestamp prefix keeps freshly generated
//! ids roughly insertion-ordered.
//!
//! Parsing doubles as the shape predicate: any string that is not exactly
//! 24 hex characters is rejected before storage is ever consulted.

use std::fmt;
use std::str::FromStr;

use hex::FromHex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of raw bytes in an identifier.
const RAW_LEN: usize = 12;

/// Number of characters in the hex form.
pub const HEX_LEN: usize = 2 * RAW_LEN;

/// Opaque record identifier, rendered as a 24-character hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; RAW_LEN]);

/// A candidate id string failed the shape check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed id: expected {HEX_LEN} hex characters")]
pub struct ParseObjectIdError;

impl ObjectId {
    /// Generate a fresh identifier: 4-byte unix timestamp + 8 random bytes.
    pub fn generate() -> Self {
        let mut raw = [0u8; RAW_LEN];
        let secs = chrono::Utc::now().timestamp() as u32;
        raw[..4].copy_from_slice(&secs.to_be_bytes());
        raw[4..].copy_from_slice(&rand::random::<[u8; 8]>());
        Self(raw)
    }

    /// Parse a candidate string, accepting exactly 24 hex characters.
    pub fn parse_str(s: &str) -> Result<Self, ParseObjectIdError> {
        if s.len() != HEX_LEN {
            return Err(ParseObjectIdError);
        }
        <[u8; RAW_LEN]>::from_hex(s)
            .map(Self)
            .map_err(|_| ParseObjectIdError)
    }

    /// Whether a candidate string is shape-valid, independent of existence.
    pub fn is_valid(s: &str) -> bool {
        Self::parse_str(s).is_ok()
    }

    /// Lowercase hex form, as stored and serialized.
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_shape_valid() {
        let id = ObjectId::generate();
        let hex = id.to_hex();
        assert_eq!(hex.len(), HEX_LEN);
        assert!(ObjectId::is_valid(&hex));
    }

    #[test]
    fn test_parse_round_trip() {
        let id = ObjectId::generate();
        let parsed = ObjectId::parse_str(&id.to_hex()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_accepts_uppercase_hex() {
        let id = ObjectId::parse_str("5C1F9C98F7B3A20004C9A1E2").unwrap();
        assert_eq!(id.to_hex(), "5c1f9c98f7b3a20004c9a1e2");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!ObjectId::is_valid(""));
        assert!(!ObjectId::is_valid("abc123"));
        assert!(!ObjectId::is_valid("5c1f9c98f7b3a20004c9a1e2ff")); // 26 chars
    }

    #[test]
    fn test_rejects_non_hex_alphabet() {
        assert!(!ObjectId::is_valid("zzzzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!ObjectId::is_valid("5c1f9c98f7b3a20004c9a1g2"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ObjectId::generate();
        let b = ObjectId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let id = ObjectId::parse_str("5c1f9c98f7b3a20004c9a1e2").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5c1f9c98f7b3a20004c9a1e2\"");

        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        let err = serde_json::from_str::<ObjectId>("\"not-an-id\"");
        assert!(err.is_err());
    }
}
