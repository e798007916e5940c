//! # pqcheck
//!
//! A conformance harness for post-quantum KEMs and signature schemes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqcheck = "0.0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqcheck-api`]: Algorithm catalog, adapter traits and errors
//! - [`pqcheck-backend`]: Native (pqcrypto) and executable backends, provenance check
//! - [`pqcheck-harness`]: Artifact store, round-trip verifiers and orchestrator

pub use pqcheck_api as api;
pub use pqcheck_backend as backend;
pub use pqcheck_harness as harness;

/// Common imports for pqcheck users
pub mod prelude {
    pub use crate::api::{
        AdapterError, Algorithm, AlgorithmKind, Backend, KemAdapter, KeyPair, Operation,
        SignatureAdapter, CATALOG,
    };

    pub use crate::backend::{ExecutableBackend, NativeBackend};

    pub use crate::harness::{
        ArtifactStore, EventSink, FailurePolicy, HarnessConfig, HarnessError, Orchestrator,
        ProgressEvent, RunSummary, TestResult, TracingSink,
    };
}
