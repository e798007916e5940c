//! Error type reported by adapter construction and adapter operations

use crate::types::{Algorithm, Operation};
use thiserror::Error;

/// Failure raised by a backend or one of its adapters
///
/// A round-trip mismatch is not an error; it is reported as a failed verdict
/// by the harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The backend could not produce an adapter for this algorithm
    #[error("cannot construct {algorithm} adapter: {reason}")]
    Construction {
        algorithm: Algorithm,
        reason: String,
    },

    /// A keypair/encapsulate/decapsulate/sign/verify call failed
    #[error("{algorithm} {operation} failed: {reason}")]
    Crypto {
        algorithm: Algorithm,
        operation: Operation,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AdapterError>;

impl AdapterError {
    pub fn construction(algorithm: Algorithm, reason: impl Into<String>) -> Self {
        AdapterError::Construction {
            algorithm,
            reason: reason.into(),
        }
    }

    pub fn crypto(algorithm: Algorithm, operation: Operation, reason: impl Into<String>) -> Self {
        AdapterError::Crypto {
            algorithm,
            operation,
            reason: reason.into(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            AdapterError::Construction { algorithm, .. } | AdapterError::Crypto { algorithm, .. } => {
                *algorithm
            }
        }
    }
}
