//! Unified error types for the domain layer
//!
//! Provides a common error type for domain parsing and validation,
//! so adapters never have to fall back to String errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for conversion failures.
    ///
    /// Use this in `FromStr`/`TryFrom` implementations when the input
    /// doesn't match any known variant or format:
    ///
    /// ```ignore
    /// impl TryFrom<u8> for Sex {
    ///     type Error = DomainError;
    ///     fn try_from(value: u8) -> Result<Self, Self::Error> {
    ///         match value {
    ///             0 => Ok(Self::Female),
    ///             _ => Err(DomainError::parse(format!("Unknown sex value: {}", value))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
