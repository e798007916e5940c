//! Drives every catalog algorithm through its round-trip verifier.

use pqcheck_api::{AdapterError, Algorithm, AlgorithmKind, Backend, CATALOG};
use serde::Deserialize;
use tracing::warn;

use crate::artifact::ArtifactStore;
use crate::error::{HarnessError, Result, VerifyError};
use crate::event::{EventSink, ProgressEvent};
use crate::verifier::{verify_kem, verify_signature, TestResult, MESSAGE};

/// What happens when an adapter fails to construct or errors mid-run
///
/// Artifact store failures abort the run under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record a `Failed` result for the algorithm and move on
    #[default]
    Isolate,
    /// Stop at the first adapter error
    Abort,
}

/// Ordered results of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub results: Vec<TestResult>,
}

impl RunSummary {
    pub fn exercised(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.exercised() - self.passed()
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&TestResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }
}

/// Walks the catalog against one backend and tallies results.
pub struct Orchestrator<'b> {
    backend: &'b dyn Backend,
    store: ArtifactStore,
    catalog: Vec<Algorithm>,
    policy: FailurePolicy,
    message: String,
}

impl<'b> Orchestrator<'b> {
    pub fn new(backend: &'b dyn Backend, store: ArtifactStore) -> Self {
        Self {
            backend,
            store,
            catalog: CATALOG.to_vec(),
            policy: FailurePolicy::default(),
            message: MESSAGE.to_owned(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the catalog, e.g. to exercise a subset
    pub fn with_catalog(mut self, catalog: impl Into<Vec<Algorithm>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    pub fn run(&self, sink: &mut dyn EventSink) -> Result<RunSummary> {
        sink.record(&ProgressEvent::RunStarted {
            algorithms: self.catalog.len(),
            samples_dir: self.store.root().to_path_buf(),
            backend: self.backend.describe(),
        });

        let mut summary = RunSummary::default();
        for &algorithm in &self.catalog {
            sink.record(&ProgressEvent::AlgorithmStarted {
                algorithm,
                kind: algorithm.kind(),
            });

            let result = match self.exercise(algorithm, sink) {
                Ok(result) => result,
                Err(VerifyError::Artifact(err)) => return Err(HarnessError::Artifact(err)),
                Err(VerifyError::Adapter(err)) => self.on_adapter_error(algorithm, err)?,
            };

            sink.record(&ProgressEvent::AlgorithmFinished {
                result: result.clone(),
            });
            summary.results.push(result);
        }

        sink.record(&ProgressEvent::RunFinished {
            exercised: summary.exercised(),
            passed: summary.passed(),
            failed: summary.failed(),
        });
        Ok(summary)
    }

    fn exercise(
        &self,
        algorithm: Algorithm,
        sink: &mut dyn EventSink,
    ) -> std::result::Result<TestResult, VerifyError> {
        match algorithm.kind() {
            AlgorithmKind::Kem => {
                let adapter = self.backend.kem(algorithm)?;
                verify_kem(adapter.as_ref(), &self.store, &self.message, sink)
            }
            AlgorithmKind::Signature => {
                let adapter = self.backend.signature(algorithm)?;
                verify_signature(adapter.as_ref(), &self.store, &self.message, sink)
            }
        }
    }

    fn on_adapter_error(&self, algorithm: Algorithm, err: AdapterError) -> Result<TestResult> {
        match self.policy {
            FailurePolicy::Abort => Err(HarnessError::Adapter(err)),
            FailurePolicy::Isolate => {
                warn!(algorithm = %algorithm, error = %err, "adapter error isolated");
                Ok(TestResult::failed(algorithm, err.to_string()))
            }
        }
    }
}
