// File: crates/api/src/traits/kem.rs

//! Trait definition for Key Encapsulation Mechanism adapters
//!
//! An adapter wraps one concrete parameter set of an external backend. Keys and
//! ciphertexts cross the boundary as raw bytes so that the harness can persist
//! exactly what the backend produced.

use crate::types::{Algorithm, KeyPair, SharedSecret};
use crate::Result;

/// Uniform KEM surface driven by the round-trip verifier.
///
/// Implementations must not retry: any backend failure is returned to the
/// caller as an [`AdapterError::Crypto`](crate::AdapterError::Crypto).
pub trait KemAdapter {
    /// The parameter set this adapter drives.
    fn algorithm(&self) -> Algorithm;

    /// Generate a fresh key pair.
    fn keypair(&self) -> Result<KeyPair>;

    /// Encapsulate against `public_key`, returning `(ciphertext, shared_secret)`.
    fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, SharedSecret)>;

    /// Recover the shared secret carried by `ciphertext`.
    fn decapsulate(&self, ciphertext: &[u8], secret_key: &[u8]) -> Result<SharedSecret>;
}

impl<T: KemAdapter + ?Sized> KemAdapter for Box<T> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn keypair(&self) -> Result<KeyPair> {
        (**self).keypair()
    }

    fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, SharedSecret)> {
        (**self).encapsulate(public_key)
    }

    fn decapsulate(&self, ciphertext: &[u8], secret_key: &[u8]) -> Result<SharedSecret> {
        (**self).decapsulate(ciphertext, secret_key)
    }
}
