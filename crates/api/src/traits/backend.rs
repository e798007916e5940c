//! Backend factory trait

use super::{KemAdapter, SignatureAdapter};
use crate::types::Algorithm;
use crate::Result;

/// Source of adapters for the algorithms in the catalog.
///
/// Each call builds a new adapter; the harness constructs exactly one per
/// algorithm per run. Asking for an adapter of the wrong kind (a signature
/// adapter for a KEM, or the reverse) is an
/// [`AdapterError::Construction`](crate::AdapterError::Construction).
pub trait Backend {
    /// Short human-readable description, e.g. `native` or the binary directory.
    fn describe(&self) -> String;

    fn kem(&self, algorithm: Algorithm) -> Result<Box<dyn KemAdapter>>;

    fn signature(&self, algorithm: Algorithm) -> Result<Box<dyn SignatureAdapter>>;
}
