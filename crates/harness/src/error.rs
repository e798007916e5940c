// crates/harness/src/error.rs
//! Structured error types for the harness

use std::path::PathBuf;

use pqcheck_api::AdapterError;
use thiserror::Error;

/// Filesystem failure while persisting an artifact; never recoverable
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a verifier stopped before reaching a verdict
///
/// The verifier only reports; whether the run continues is decided by the
/// orchestrator's failure policy.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Why a whole run was aborted
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("adapter failure aborted the run: {0}")]
    Adapter(#[source] AdapterError),

    #[error("artifact store failure aborted the run: {0}")]
    Artifact(#[source] ArtifactError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
