//! Backend that drives external executables from a shared binary directory
//!
//! Each algorithm maps to `<bin_dir>/<slug>` (plus the platform executable
//! suffix), e.g. `cache/bin/ml-kem-768`. The wire protocol lives in `process.rs`.

mod process;

use std::path::{Path, PathBuf};

use pqcheck_api::{
    AdapterError, Algorithm, AlgorithmKind, Backend, KemAdapter, KeyPair, Operation, Result,
    SharedSecret, SignatureAdapter,
};
use zeroize::Zeroizing;

use crate::native::wrong_kind;
use process::Executable;

/// Backend rooted at a directory of per-algorithm executables
#[derive(Debug, Clone)]
pub struct ExecutableBackend {
    bin_dir: PathBuf,
}

impl ExecutableBackend {
    pub fn new(bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
        }
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Where the executable for `algorithm` is expected to live
    pub fn executable_path(&self, algorithm: Algorithm) -> PathBuf {
        self.bin_dir
            .join(format!("{}{}", algorithm.slug(), std::env::consts::EXE_SUFFIX))
    }

    /// Version string printed by the algorithm's executable
    pub fn version(&self, algorithm: Algorithm) -> Result<String> {
        self.resolve(algorithm)?.version()
    }

    fn resolve(&self, algorithm: Algorithm) -> Result<Executable> {
        if !self.bin_dir.is_dir() {
            return Err(AdapterError::construction(
                algorithm,
                format!("backend directory {} does not exist", self.bin_dir.display()),
            ));
        }
        let path = self.executable_path(algorithm);
        if !path.is_file() {
            return Err(AdapterError::construction(
                algorithm,
                format!("backend executable {} not found", path.display()),
            ));
        }
        if !is_executable(&path) {
            return Err(AdapterError::construction(
                algorithm,
                format!("backend executable {} is not executable", path.display()),
            ));
        }
        Ok(Executable::new(algorithm, path))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

impl Backend for ExecutableBackend {
    fn describe(&self) -> String {
        format!("executables in {}", self.bin_dir.display())
    }

    fn kem(&self, algorithm: Algorithm) -> Result<Box<dyn KemAdapter>> {
        if algorithm.kind() != AlgorithmKind::Kem {
            return Err(wrong_kind(algorithm, AlgorithmKind::Kem));
        }
        Ok(Box::new(ExecutableKem(self.resolve(algorithm)?)))
    }

    fn signature(&self, algorithm: Algorithm) -> Result<Box<dyn SignatureAdapter>> {
        if algorithm.kind() != AlgorithmKind::Signature {
            return Err(wrong_kind(algorithm, AlgorithmKind::Signature));
        }
        Ok(Box::new(ExecutableSignature(self.resolve(algorithm)?)))
    }
}

/// KEM adapter speaking the executable protocol
#[derive(Debug, Clone)]
pub struct ExecutableKem(Executable);

impl ExecutableKem {
    pub fn path(&self) -> &Path {
        self.0.path()
    }
}

impl KemAdapter for ExecutableKem {
    fn algorithm(&self) -> Algorithm {
        self.0.algorithm()
    }

    fn keypair(&self) -> Result<KeyPair> {
        let [pk, sk] = take::<2>(self.0.invoke(Operation::Keypair, &[], 2)?);
        Ok(KeyPair::new(pk, sk))
    }

    fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, SharedSecret)> {
        let [ct, ss] = take::<2>(self.0.invoke(Operation::Encapsulate, &[public_key], 2)?);
        Ok((ct, Zeroizing::new(ss)))
    }

    fn decapsulate(&self, ciphertext: &[u8], secret_key: &[u8]) -> Result<SharedSecret> {
        let [ss] = take::<1>(self.0.invoke(
            Operation::Decapsulate,
            &[ciphertext, secret_key],
            1,
        )?);
        Ok(Zeroizing::new(ss))
    }
}

/// Signature adapter speaking the executable protocol
#[derive(Debug, Clone)]
pub struct ExecutableSignature(Executable);

impl ExecutableSignature {
    pub fn path(&self) -> &Path {
        self.0.path()
    }
}

impl SignatureAdapter for ExecutableSignature {
    fn algorithm(&self) -> Algorithm {
        self.0.algorithm()
    }

    fn keypair(&self) -> Result<KeyPair> {
        let [pk, sk] = take::<2>(self.0.invoke(Operation::Keypair, &[], 2)?);
        Ok(KeyPair::new(pk, sk))
    }

    fn sign(&self, message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
        let [signed] = take::<1>(self.0.invoke(Operation::Sign, &[message, secret_key], 1)?);
        Ok(signed)
    }

    fn verify(&self, signed_message: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        let [message] = take::<1>(self.0.invoke(
            Operation::Verify,
            &[signed_message, public_key],
            1,
        )?);
        Ok(message)
    }
}

// `invoke` has already checked the count
fn take<const N: usize>(values: Vec<Vec<u8>>) -> [Vec<u8>; N] {
    let mut iter = values.into_iter();
    std::array::from_fn(|_| iter.next().unwrap_or_default())
}
