//! Catalog and value types shared by adapters and the harness
//!
//! The algorithm set is closed: the harness certifies exactly the eight
//! parameter sets listed in [`CATALOG`], and dispatch happens on
//! [`Algorithm::kind`] rather than on anything discovered at runtime.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use zeroize::Zeroizing;

/// Shared secret bytes, wiped when dropped
pub type SharedSecret = Zeroizing<Vec<u8>>;

/// Which adapter contract an algorithm is driven through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Key encapsulation mechanism: keypair / encapsulate / decapsulate
    Kem,
    /// Signature scheme with message recovery: keypair / sign / verify
    Signature,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Kem => f.write_str("KEM"),
            AlgorithmKind::Signature => f.write_str("signature"),
        }
    }
}

/// One parameter set under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    MlKem512,
    MlKem768,
    MlKem1024,
    MlDsa44,
    MlDsa65,
    MlDsa87,
    Falcon512,
    Falcon1024,
}

/// Every algorithm the harness exercises, in run order (KEMs first)
pub const CATALOG: [Algorithm; 8] = [
    Algorithm::MlKem512,
    Algorithm::MlKem768,
    Algorithm::MlKem1024,
    Algorithm::MlDsa44,
    Algorithm::MlDsa65,
    Algorithm::MlDsa87,
    Algorithm::Falcon512,
    Algorithm::Falcon1024,
];

impl Algorithm {
    /// Display name, also used as the artifact directory name
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::MlKem512 => "ML-KEM-512",
            Algorithm::MlKem768 => "ML-KEM-768",
            Algorithm::MlKem1024 => "ML-KEM-1024",
            Algorithm::MlDsa44 => "ML-DSA-44",
            Algorithm::MlDsa65 => "ML-DSA-65",
            Algorithm::MlDsa87 => "ML-DSA-87",
            Algorithm::Falcon512 => "Falcon-512",
            Algorithm::Falcon1024 => "Falcon-1024",
        }
    }

    /// Lowercase identifier used for backend executables
    pub const fn slug(self) -> &'static str {
        match self {
            Algorithm::MlKem512 => "ml-kem-512",
            Algorithm::MlKem768 => "ml-kem-768",
            Algorithm::MlKem1024 => "ml-kem-1024",
            Algorithm::MlDsa44 => "ml-dsa-44",
            Algorithm::MlDsa65 => "ml-dsa-65",
            Algorithm::MlDsa87 => "ml-dsa-87",
            Algorithm::Falcon512 => "falcon-512",
            Algorithm::Falcon1024 => "falcon-1024",
        }
    }

    pub const fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::MlKem512 | Algorithm::MlKem768 | Algorithm::MlKem1024 => AlgorithmKind::Kem,
            _ => AlgorithmKind::Signature,
        }
    }

    /// Look up an algorithm by display name or slug
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG
            .iter()
            .copied()
            .find(|alg| alg.name() == name || alg.slug() == name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Adapter operation, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Keypair,
    Encapsulate,
    Decapsulate,
    Sign,
    Verify,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Keypair => "keypair",
            Operation::Encapsulate => "encapsulate",
            Operation::Decapsulate => "decapsulate",
            Operation::Sign => "sign",
            Operation::Verify => "verify",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public and secret key bytes produced by one `keypair()` call
///
/// The secret half is zeroed when the pair is dropped. Nothing in the harness
/// reuses a key pair across algorithms or runs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public_key: Vec<u8>,
    secret_key: Vec<u8>,
}

impl KeyPair {
    pub fn new(public_key: impl Into<Vec<u8>>, secret_key: impl Into<Vec<u8>>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key_len", &self.public_key.len())
            .field("secret_key", &format_args!("[REDACTED; {}]", self.secret_key.len()))
            .finish()
    }
}
