//! Body sex of a character, selecting the freemode base model and base clothes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Character body sex.
///
/// Stored in character documents as the integer `0` (female) or `1` (male).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sex {
    Female,
    Male,
}

impl TryFrom<u8> for Sex {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Female),
            1 => Ok(Self::Male),
            _ => Err(DomainError::parse(format!("Unknown sex value: {}", value))),
        }
    }
}

impl From<Sex> for u8 {
    fn from(value: Sex) -> Self {
        match value {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
        }
    }
}
