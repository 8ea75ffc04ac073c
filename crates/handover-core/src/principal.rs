//! # Principal Identity Value
//!
//! [`Principal`] is the opaque caller identity compared by the ownership
//! registry. It is a 20-byte fingerprint, rendered as `0x`-prefixed
//! lowercase hex, with total equality and a distinguished all-zeros
//! sentinel meaning "no principal".
//!
//! The registry never authenticates principals; it only compares them for
//! equality. Authentication is the host's job. What this type guarantees is
//! that "is this the sentinel" is a pure value check, never a null check.

use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::ValidationError;

/// An opaque caller identity: a 20-byte fingerprint with value equality.
///
/// The all-zeros value is reserved as [`Principal::SENTINEL`], the "no
/// principal" marker. An owner slot holding the sentinel denotes the
/// renounced state; a nominee slot holding it denotes "no pending
/// nomination". No real caller ever presents the sentinel, so comparing a
/// caller against a sentinel-valued slot always fails closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Principal([u8; Principal::LEN]);

impl Principal {
    /// Width of a principal fingerprint in bytes.
    pub const LEN: usize = 20;

    /// The reserved "no principal" value (all zeros).
    pub const SENTINEL: Principal = Principal([0u8; Principal::LEN]);

    /// Construct a principal from raw fingerprint bytes.
    pub const fn from_bytes(bytes: [u8; Principal::LEN]) -> Self {
        Self(bytes)
    }

    /// Derive a principal from arbitrary key material: SHA-256 of the
    /// material, truncated to the first 20 bytes.
    pub fn fingerprint(material: &[u8]) -> Self {
        let digest = Sha256::digest(material);
        let mut bytes = [0u8; Principal::LEN];
        bytes.copy_from_slice(&digest[..Principal::LEN]);
        Self(bytes)
    }

    /// Parse a principal from hex text, with or without a `0x`/`0X` prefix.
    ///
    /// Exactly 40 hex digits are required; case is ignored.
    pub fn from_hex(text: &str) -> Result<Self, ValidationError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);

        if digits.len() != Principal::LEN * 2 {
            return Err(ValidationError::InvalidPrincipalLength {
                value: text.to_string(),
                len: digits.len(),
            });
        }

        let mut bytes = [0u8; Principal::LEN];
        for (i, chunk) in digits.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_nibble(chunk[0]);
            let lo = hex_nibble(chunk[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => bytes[i] = (hi << 4) | lo,
                _ => {
                    return Err(ValidationError::InvalidPrincipalHex {
                        value: text.to_string(),
                    })
                }
            }
        }
        Ok(Self(bytes))
    }

    /// Whether this is the reserved "no principal" value.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Access the raw fingerprint bytes.
    pub fn as_bytes(&self) -> &[u8; Principal::LEN] {
        &self.0
    }
}

fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x")?;
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Principal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Principal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Deserializes as a plain string, then routes through `from_hex` so that
// invalid values are rejected at deserialization time.
impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}
