//! Error types for rlcsim.

use thiserror::Error;

/// Errors raised while building circuit parameters or running an analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An input was non-numeric or outside its physical domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The requested analysis has no meaning for the circuit topology.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Whether this is an [`Error::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter { .. })
    }

    /// Whether this is an [`Error::UnsupportedOperation`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedOperation(_))
    }
}

/// Result type for rlcsim operations.
pub type Result<T> = std::result::Result<T, Error>;
