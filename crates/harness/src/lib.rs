//! Round-trip conformance harness for post-quantum KEMs and signatures
//!
//! The [`Orchestrator`] walks the algorithm catalog, builds each adapter through
//! a [`Backend`](pqcheck_api::Backend), runs the matching verifier and records
//! every intermediate value in an [`ArtifactStore`]. Progress is reported as
//! [`ProgressEvent`]s; [`TracingSink`] turns them into log records.

pub mod artifact;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod orchestrator;
pub mod verifier;

pub use artifact::{ArtifactStore, Content, ContentType};
pub use config::{BackendSelection, HarnessConfig};
pub use error::{ArtifactError, ConfigError, HarnessError, Result, VerifyError};
pub use event::{EventSink, Phase, ProgressEvent, TracingSink};
pub use orchestrator::{FailurePolicy, Orchestrator, RunSummary};
pub use verifier::{verify_kem, verify_signature, Status, TestResult, MESSAGE};
