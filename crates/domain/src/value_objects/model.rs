//! Ped model identifiers
//!
//! The host engine addresses every ped model by a 32-bit hash of its
//! lowercase name. Character documents may store a skin either as the raw
//! hash or as the model name, so both forms are accepted and resolved lazily.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Model name of the female freemode ped.
pub const FEMALE_FREEMODE_MODEL: &str = "mp_f_freemode_01";

/// Model name of the male freemode ped.
pub const MALE_FREEMODE_MODEL: &str = "mp_m_freemode_01";

/// Numeric model identifier as understood by the host engine.
///
/// Serializes as an unsigned integer. Deserialization also accepts the
/// signed 32-bit form (two's complement) and whole-valued floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModelHash(u32);

impl ModelHash {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Hash a model name the way the engine does.
    ///
    /// Jenkins one-at-a-time over the ASCII-lowercased bytes, so
    /// `"MP_M_FREEMODE_01"` and `"mp_m_freemode_01"` resolve to the same model.
    pub fn from_name(name: &str) -> Self {
        let mut hash: u32 = 0;
        for byte in name.bytes() {
            hash = hash.wrapping_add(u32::from(byte.to_ascii_lowercase()));
            hash = hash.wrapping_add(hash << 10);
            hash ^= hash >> 6;
        }
        hash = hash.wrapping_add(hash << 3);
        hash ^= hash >> 11;
        hash = hash.wrapping_add(hash << 15);
        Self(hash)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Accept anything in `i32::MIN..=u32::MAX`; negatives are signed hashes.
    fn from_integer(value: i64) -> Option<Self> {
        if value < 0 {
            i32::try_from(value).ok().map(|signed| Self(signed as u32))
        } else {
            u32::try_from(value).ok().map(Self)
        }
    }
}

impl<'de> Deserialize<'de> for ModelHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ModelHashVisitor)
    }
}

struct ModelHashVisitor;

impl<'de> Visitor<'de> for ModelHashVisitor {
    type Value = ModelHash;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a signed or unsigned 32-bit model hash")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<ModelHash, E> {
        ModelHash::from_integer(value)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<ModelHash, E> {
        i64::try_from(value)
            .ok()
            .and_then(ModelHash::from_integer)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<ModelHash, E> {
        let in_range = value >= f64::from(i32::MIN) && value <= f64::from(u32::MAX);
        if value.is_finite() && value.fract() == 0.0 && in_range {
            self.visit_i64(value as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }
}

impl fmt::Display for ModelHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

impl From<u32> for ModelHash {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A model reference as stored in a character document or passed by callers.
///
/// Numbers are taken as precomputed hashes, strings as model names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelRef {
    Hash(ModelHash),
    Name(String),
}

impl ModelRef {
    /// Resolve to the numeric identifier, hashing names on the way.
    pub fn resolve(&self) -> ModelHash {
        match self {
            Self::Hash(hash) => *hash,
            Self::Name(name) => ModelHash::from_name(name),
        }
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(hash) => write!(f, "{}", hash),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for ModelRef {
    type Err = DomainError;

    /// Decimal and `0x`-prefixed hex strings parse as hashes, anything else as a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Model reference cannot be empty"));
        }

        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            return u32::from_str_radix(hex, 16)
                .map(|value| Self::Hash(ModelHash::new(value)))
                .map_err(|e| DomainError::parse(format!("Invalid model hash '{}': {}", trimmed, e)));
        }

        if let Ok(value) = trimmed.parse::<u32>() {
            return Ok(Self::Hash(ModelHash::new(value)));
        }

        Ok(Self::Name(trimmed.to_string()))
    }
}

impl From<ModelHash> for ModelRef {
    fn from(value: ModelHash) -> Self {
        Self::Hash(value)
    }
}

impl From<u32> for ModelRef {
    fn from(value: u32) -> Self {
        Self::Hash(ModelHash::new(value))
    }
}

impl From<&str> for ModelRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for ModelRef {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}
