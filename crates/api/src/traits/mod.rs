//! Adapter contracts and the backend factory that produces them

pub mod backend;
pub mod kem;
pub mod signature;

pub use backend::Backend;
pub use kem::KemAdapter;
pub use signature::SignatureAdapter;
