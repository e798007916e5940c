//! Adapter backends for the pqcheck harness
//!
//! Two backends are provided:
//!
//! - [`NativeBackend`]: links the PQClean implementations shipped by the
//!   `pqcrypto-*` crates and runs every operation in-process.
//! - [`ExecutableBackend`]: drives one external executable per algorithm from a
//!   shared binary directory, exchanging hex-encoded values over stdin/stdout.
//!
//! The [`provenance`] module checks that a backend is the one the harness
//! expects before a run is trusted.

pub mod executable;
pub mod native;
pub mod provenance;

pub use executable::ExecutableBackend;
pub use native::NativeBackend;
pub use provenance::{ProvenanceError, ProvenanceReport};
