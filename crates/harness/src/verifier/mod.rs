//! Round-trip verifiers
//!
//! One state machine per adapter kind. Each drives a single adapter through its
//! whole lifecycle, persists every intermediate value, and returns either a
//! verdict or the error that stopped it.

pub mod kem;
pub mod signature;

pub use kem::verify_kem;
pub use signature::verify_signature;

use pqcheck_api::Algorithm;

use crate::event::{EventSink, Phase, ProgressEvent};

/// Input fed to every algorithm
pub const MESSAGE: &str = "This is a secret message for PQC testing!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failed,
}

/// Verdict for one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub algorithm: Algorithm,
    pub status: Status,
    pub detail: Option<String>,
}

impl TestResult {
    pub fn success(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            status: Status::Success,
            detail: None,
        }
    }

    pub fn failed(algorithm: Algorithm, detail: impl Into<String>) -> Self {
        Self {
            algorithm,
            status: Status::Failed,
            detail: Some(detail.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

pub(crate) fn enter(sink: &mut dyn EventSink, algorithm: Algorithm, phase: Phase) {
    sink.record(&ProgressEvent::Phase { algorithm, phase });
}
