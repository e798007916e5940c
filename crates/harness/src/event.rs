//! Structured progress events
//!
//! Verifiers and the orchestrator report what they are doing as
//! [`ProgressEvent`] records handed to an [`EventSink`]. The binary routes them
//! to `tracing`; tests collect them in a `Vec` and assert on the sequence.

use std::path::PathBuf;

use pqcheck_api::{Algorithm, AlgorithmKind};
use tracing::{debug, info, warn};

use crate::verifier::{Status, TestResult};

/// Lifecycle phase of one round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    KeyGenerated,
    Encapsulated,
    Decapsulated,
    Signed,
    Verified,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    RunStarted {
        algorithms: usize,
        samples_dir: PathBuf,
        backend: String,
    },
    AlgorithmStarted {
        algorithm: Algorithm,
        kind: AlgorithmKind,
    },
    Phase {
        algorithm: Algorithm,
        phase: Phase,
    },
    /// Sizes of the material produced by one run; `payload_len` is the
    /// ciphertext (KEM) or signed message (signature) length.
    KeyMaterial {
        algorithm: Algorithm,
        public_key_len: usize,
        secret_key_len: usize,
        payload_len: usize,
    },
    AlgorithmFinished {
        result: TestResult,
    },
    RunFinished {
        exercised: usize,
        passed: usize,
        failed: usize,
    },
}

/// Receiver of progress events
pub trait EventSink {
    fn record(&mut self, event: &ProgressEvent);
}

impl EventSink for Vec<ProgressEvent> {
    fn record(&mut self, event: &ProgressEvent) {
        self.push(event.clone());
    }
}

impl EventSink for () {
    fn record(&mut self, _event: &ProgressEvent) {}
}

/// Forwards every event to `tracing` with structured fields
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: &ProgressEvent) {
        match event {
            ProgressEvent::RunStarted {
                algorithms,
                samples_dir,
                backend,
            } => info!(
                algorithms,
                samples_dir = %samples_dir.display(),
                backend = %backend,
                "starting conformance run"
            ),
            ProgressEvent::AlgorithmStarted { algorithm, kind } => {
                info!(algorithm = %algorithm, kind = %kind, "testing algorithm")
            }
            ProgressEvent::Phase { algorithm, phase } => {
                debug!(algorithm = %algorithm, phase = ?phase, "phase reached")
            }
            ProgressEvent::KeyMaterial {
                algorithm,
                public_key_len,
                secret_key_len,
                payload_len,
            } => info!(
                algorithm = %algorithm,
                public_key_len,
                secret_key_len,
                payload_len,
                "key material generated"
            ),
            ProgressEvent::AlgorithmFinished { result } => match result.status {
                Status::Success => info!(algorithm = %result.algorithm, "round trip succeeded"),
                Status::Failed => warn!(
                    algorithm = %result.algorithm,
                    detail = result.detail.as_deref().unwrap_or(""),
                    "round trip failed"
                ),
            },
            ProgressEvent::RunFinished {
                exercised,
                passed,
                failed,
            } => info!(
                exercised,
                passed,
                failed,
                "all {} algorithms tested",
                exercised
            ),
        }
    }
}
