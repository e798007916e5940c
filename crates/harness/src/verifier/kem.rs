//! KEM round trip: `Init → KeyGenerated → Encapsulated → Decapsulated → Verified`
//!
//! A shared-secret mismatch is a `Failed` verdict, not an error. Adapter and
//! artifact failures are handed back to the caller untouched.

use pqcheck_api::KemAdapter;
use subtle::ConstantTimeEq;

use crate::artifact::{ArtifactStore, Content, ContentType};
use crate::error::VerifyError;
use crate::event::{EventSink, Phase, ProgressEvent};
use crate::verifier::{enter, TestResult};

pub fn verify_kem(
    adapter: &dyn KemAdapter,
    store: &ArtifactStore,
    message: &str,
    sink: &mut dyn EventSink,
) -> Result<TestResult, VerifyError> {
    let algorithm = adapter.algorithm();
    let name = algorithm.name();
    enter(sink, algorithm, Phase::Init);
    store.write(name, ContentType::Message, Content::Text(message))?;

    let keypair = adapter.keypair()?;
    store.write(name, ContentType::PublicKey, Content::Binary(keypair.public_key()))?;
    store.write(name, ContentType::SecretKey, Content::Binary(keypair.secret_key()))?;
    enter(sink, algorithm, Phase::KeyGenerated);

    let (ciphertext, ss1) = adapter.encapsulate(keypair.public_key())?;
    store.write(name, ContentType::Ciphertext, Content::Binary(&ciphertext))?;
    store.write(name, ContentType::SharedSecret1, Content::Binary(&ss1))?;
    enter(sink, algorithm, Phase::Encapsulated);
    sink.record(&ProgressEvent::KeyMaterial {
        algorithm,
        public_key_len: keypair.public_key().len(),
        secret_key_len: keypair.secret_key().len(),
        payload_len: ciphertext.len(),
    });

    let ss2 = adapter.decapsulate(&ciphertext, keypair.secret_key())?;
    store.write(name, ContentType::SharedSecret2, Content::Binary(&ss2))?;
    enter(sink, algorithm, Phase::Decapsulated);

    let matched: bool = ss1.as_slice().ct_eq(ss2.as_slice()).into();
    enter(sink, algorithm, Phase::Verified);

    Ok(if matched {
        TestResult::success(algorithm)
    } else {
        TestResult::failed(algorithm, "shared secrets differ")
    })
}
