//! Signature adapter trait
//!
//! The harness works with *attached* signatures: `sign` returns an opaque
//! signed message and `verify` opens it, handing back the message it carries.
//! A round trip succeeds when the recovered bytes equal the input exactly.

use crate::types::{Algorithm, KeyPair};
use crate::Result;

/// Uniform signature surface driven by the round-trip verifier
pub trait SignatureAdapter {
    /// The parameter set this adapter drives
    fn algorithm(&self) -> Algorithm;

    /// Generate a fresh key pair
    fn keypair(&self) -> Result<KeyPair>;

    /// Produce a signed message embedding `message`
    fn sign(&self, message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>>;

    /// Check `signed_message` and return the message it carries
    ///
    /// An invalid signature is an error, never an empty or partial message.
    fn verify(&self, signed_message: &[u8], public_key: &[u8]) -> Result<Vec<u8>>;
}

impl<T: SignatureAdapter + ?Sized> SignatureAdapter for Box<T> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn keypair(&self) -> Result<KeyPair> {
        (**self).keypair()
    }

    fn sign(&self, message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
        (**self).sign(message, secret_key)
    }

    fn verify(&self, signed_message: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        (**self).verify(signed_message, public_key)
    }
}
