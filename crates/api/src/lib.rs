//! Public API traits and types for the pqcheck harness
//!
//! This crate defines the seam between the harness and whatever actually performs
//! the cryptography: the closed catalog of algorithms under test, the two adapter
//! contracts (KEM and signature), the backend factory that builds adapters, and
//! the error type every adapter operation reports.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{AdapterError, Result};
pub use types::*;

pub use traits::{Backend, KemAdapter, SignatureAdapter};

// Re-export trait modules for direct access
pub use traits::{backend, kem, signature};
