//! In-process backend built on the `pqcrypto` family of crates

mod kem;
mod sign;

pub use kem::{NativeMlKem1024, NativeMlKem512, NativeMlKem768};
pub use sign::{
    NativeFalcon1024, NativeFalcon512, NativeMlDsa44, NativeMlDsa65, NativeMlDsa87,
};

use pqcheck_api::{
    AdapterError, Algorithm, AlgorithmKind, Backend, KemAdapter, Result, SignatureAdapter,
};

/// Version reported by the native backend to the provenance check
///
/// This is the crate version; the linked `pqcrypto-*` builds are fixed by the
/// workspace lockfile rather than reported at runtime.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend whose adapters call statically linked implementations.
///
/// Construction never touches the filesystem, so it cannot fail for a catalog
/// algorithm of the right kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl NativeBackend {
    pub fn version(&self) -> &'static str {
        VERSION
    }
}

impl Backend for NativeBackend {
    fn describe(&self) -> String {
        format!("native {}", VERSION)
    }

    fn kem(&self, algorithm: Algorithm) -> Result<Box<dyn KemAdapter>> {
        match algorithm {
            Algorithm::MlKem512 => Ok(Box::new(NativeMlKem512)),
            Algorithm::MlKem768 => Ok(Box::new(NativeMlKem768)),
            Algorithm::MlKem1024 => Ok(Box::new(NativeMlKem1024)),
            other => Err(wrong_kind(other, AlgorithmKind::Kem)),
        }
    }

    fn signature(&self, algorithm: Algorithm) -> Result<Box<dyn SignatureAdapter>> {
        match algorithm {
            Algorithm::MlDsa44 => Ok(Box::new(NativeMlDsa44)),
            Algorithm::MlDsa65 => Ok(Box::new(NativeMlDsa65)),
            Algorithm::MlDsa87 => Ok(Box::new(NativeMlDsa87)),
            Algorithm::Falcon512 => Ok(Box::new(NativeFalcon512)),
            Algorithm::Falcon1024 => Ok(Box::new(NativeFalcon1024)),
            other => Err(wrong_kind(other, AlgorithmKind::Signature)),
        }
    }
}

pub(crate) fn wrong_kind(algorithm: Algorithm, requested: AlgorithmKind) -> AdapterError {
    AdapterError::construction(
        algorithm,
        format!("{} is a {} algorithm, not a {}", algorithm, algorithm.kind(), requested),
    )
}
