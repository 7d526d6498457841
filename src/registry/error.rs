//! Registry error types
//!
//! Error types for format registry lookups.

use std::fmt;

/// What a failed lookup was searching for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Lookup by format name
    Name(String),
    /// Lookup by format identifier
    Id(String),
    /// Default format resolution with an empty registry
    Default,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Name(name) => write!(f, "no media format for: {}", name),
            Lookup::Id(id) => write!(f, "no media format type: {}", id),
            Lookup::Default => write!(f, "no default media format"),
        }
    }
}

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No format matched the lookup
    #[error("{0}")]
    NotFound(Lookup),
}

impl RegistryError {
    /// Check if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}

/// Result alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
