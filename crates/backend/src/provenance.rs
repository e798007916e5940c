//! Provenance check for a backend
//!
//! Before a run is trusted, the harness can confirm that the backend it is about
//! to certify is the expected build: every catalog algorithm must be provided,
//! and every component must report the expected version string.
//!
//! The two origins anchor trust differently. Executables are probed one by
//! one with `--version`. The native backend has nothing to probe: its
//! implementations are the `pqcrypto-*` crates pinned in this workspace's
//! manifests and lockfile, so its version is the version of this crate, and
//! the check confirms the harness binary was built from the expected release.

use std::path::{Path, PathBuf};

use pqcheck_api::{AdapterError, Algorithm, CATALOG};
use thiserror::Error;
use tracing::{debug, info};

use crate::executable::ExecutableBackend;
use crate::native::VERSION;

/// What a successful check established
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceReport {
    /// Where the implementations were resolved from
    pub origin: String,
    pub version: String,
    pub algorithms: Vec<Algorithm>,
}

#[derive(Debug, Error)]
pub enum ProvenanceError {
    #[error("backend directory {} is not a directory", .0.display())]
    BinDir(PathBuf),

    #[error("missing backend executables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("{subject}: expected version {expected}, got {actual}")]
    Version {
        subject: String,
        expected: String,
        actual: String,
    },

    #[error("version probe failed: {0}")]
    Probe(#[from] AdapterError),
}

pub type Result<T> = std::result::Result<T, ProvenanceError>;

/// Check the statically linked backend against `expected_version`.
pub fn check_native(expected_version: &str) -> Result<ProvenanceReport> {
    require_version("native backend", expected_version, VERSION)?;
    info!(version = VERSION, "native backend provenance confirmed");
    Ok(ProvenanceReport {
        origin: "statically linked pqcrypto".into(),
        version: VERSION.into(),
        algorithms: CATALOG.to_vec(),
    })
}

/// Check a binary directory: it must be a real directory holding one executable
/// per catalog algorithm, each reporting `expected_version`.
pub fn check_executables(bin_dir: &Path, expected_version: &str) -> Result<ProvenanceReport> {
    let resolved = bin_dir
        .canonicalize()
        .map_err(|_| ProvenanceError::BinDir(bin_dir.to_path_buf()))?;
    if !resolved.is_dir() {
        return Err(ProvenanceError::BinDir(resolved));
    }

    let backend = ExecutableBackend::new(resolved.clone());
    let missing: Vec<_> = CATALOG
        .iter()
        .filter(|alg| !backend.executable_path(**alg).is_file())
        .map(|alg| alg.slug())
        .collect();
    if !missing.is_empty() {
        return Err(ProvenanceError::Missing(missing));
    }

    for alg in CATALOG {
        let actual = backend.version(alg)?;
        debug!(algorithm = %alg, version = %actual, "probed backend executable");
        require_version(alg.slug(), expected_version, &actual)?;
    }

    info!(dir = %resolved.display(), version = expected_version, "executable backend provenance confirmed");
    Ok(ProvenanceReport {
        origin: resolved.display().to_string(),
        version: expected_version.into(),
        algorithms: CATALOG.to_vec(),
    })
}

fn require_version(subject: &str, expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ProvenanceError::Version {
            subject: subject.into(),
            expected: expected.into(),
            actual: actual.into(),
        })
    }
}
