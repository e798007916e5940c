// crates/harness/src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use pqcheck_api::Backend;
use pqcheck_backend::provenance::{self, ProvenanceReport};
use pqcheck_backend::{ExecutableBackend, NativeBackend, ProvenanceError};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::orchestrator::FailurePolicy;

/// Which adapter backend a run certifies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendSelection {
    /// pqcrypto implementations linked into the harness
    #[default]
    Native,
    /// One executable per algorithm under `<cache_root>/bin`
    Executable,
}

/// Harness configuration, read from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub cache_root: PathBuf,
    pub backend: BackendSelection,
    pub failure_policy: FailurePolicy,
    pub expected_version: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cache_root: PathBuf::from("cache"),
            backend: BackendSelection::Native,
            failure_policy: FailurePolicy::Isolate,
            expected_version: "0.0.1".into(),
        }
    }
}

// Builder methods
impl HarnessConfig {
    pub fn with_cache_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.cache_root = root.into();
        self
    }

    pub fn with_backend(mut self, backend: BackendSelection) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_expected_version(mut self, version: impl Into<String>) -> Self {
        self.expected_version = version.into();
        self
    }
}

impl HarnessConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Shared backend-binary directory
    pub fn bin_dir(&self) -> PathBuf {
        self.cache_root.join("bin")
    }

    /// Root of the per-algorithm artifact tree
    pub fn samples_dir(&self) -> PathBuf {
        self.cache_root.join("samples")
    }

    pub fn build_backend(&self) -> Box<dyn Backend> {
        match self.backend {
            BackendSelection::Native => Box::new(NativeBackend),
            BackendSelection::Executable => Box::new(ExecutableBackend::new(self.bin_dir())),
        }
    }

    /// Run the provenance check matching the selected backend.
    pub fn check_provenance(&self) -> Result<ProvenanceReport, ProvenanceError> {
        match self.backend {
            BackendSelection::Native => provenance::check_native(&self.expected_version),
            BackendSelection::Executable => {
                provenance::check_executables(&self.bin_dir(), &self.expected_version)
            }
        }
    }
}
