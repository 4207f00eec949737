use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const ID_PREFIX: &str = "CC-";
const CODE_LEN: usize = 8;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Short human-readable certificate code, e.g. `CC-1A2B3C4D`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CertificateId {
    value: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdParseError {
    #[error("Identifier must start with \"CC-\"")]
    MissingPrefix,

    #[error("Invalid length: expected 8 hex characters after prefix, got {0}")]
    InvalidLength(usize),

    #[error("Invalid hex character: {0}")]
    InvalidHexCharacter(char),
}

pub type Result<T> = std::result::Result<T, IdParseError>;

/// 32-bit FNV-1a over a sequence of byte chunks, hashed as if concatenated
pub fn fnv1a_32(chunks: &[&[u8]]) -> u32 {
    chunks
        .iter()
        .flat_map(|chunk| chunk.iter())
        .fold(FNV_OFFSET_BASIS, |hash, &byte| {
            (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
        })
}

impl CertificateId {
    /// Derive an identifier from the student, course and a millisecond timestamp.
    ///
    /// The same triple always yields the same identifier; uniqueness across
    /// certificates comes only from the timestamp changing between calls.
    pub fn generate(student: &str, course: &str, timestamp_millis: i64) -> Self {
        let timestamp = timestamp_millis.to_string();
        let hash = fnv1a_32(&[student.as_bytes(), course.as_bytes(), timestamp.as_bytes()]);
        Self::from_hash(hash)
    }

    pub fn from_hash(hash: u32) -> Self {
        Self {
            value: format!("{ID_PREFIX}{}", hex::encode_upper(hash.to_be_bytes())),
        }
    }

    /// Parse a formatted identifier, accepting only the canonical uppercase form
    pub fn parse(identifier: &str) -> Result<Self> {
        let code = identifier
            .strip_prefix(ID_PREFIX)
            .ok_or(IdParseError::MissingPrefix)?;

        if let Some(ch) = code
            .chars()
            .find(|ch| !matches!(ch, '0'..='9' | 'A'..='F'))
        {
            return Err(IdParseError::InvalidHexCharacter(ch));
        }

        if code.len() != CODE_LEN {
            return Err(IdParseError::InvalidLength(code.len()));
        }

        Ok(Self {
            value: identifier.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for CertificateId {
    type Err = IdParseError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for CertificateId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for CertificateId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CertificateId::parse(&s).map_err(serde::de::Error::custom)
    }
}
