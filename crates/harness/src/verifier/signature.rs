//! Signature round trip: `Init → KeyGenerated → Signed → Verified | Failed`

use pqcheck_api::SignatureAdapter;

use crate::artifact::{ArtifactStore, Content, ContentType};
use crate::error::VerifyError;
use crate::event::{EventSink, Phase, ProgressEvent};
use crate::verifier::{enter, TestResult};

/// Sign `message`, open the signed blob again and compare the recovered bytes.
///
/// A verification error from the adapter is returned as
/// [`VerifyError::Adapter`]; a successful `verify` that recovers different
/// bytes is a `Failed` verdict.
pub fn verify_signature(
    adapter: &dyn SignatureAdapter,
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

    let signed = adapter.sign(message.as_bytes(), keypair.secret_key())?;
    store.write(name, ContentType::EncryptedMessage, Content::Binary(&signed))?;
    enter(sink, algorithm, Phase::Signed);
    sink.record(&ProgressEvent::KeyMaterial {
        algorithm,
        public_key_len: keypair.public_key().len(),
        secret_key_len: keypair.secret_key().len(),
        payload_len: signed.len(),
    });

    let recovered = adapter.verify(&signed, keypair.public_key())?;
    store.write(name, ContentType::DecryptedMessage, Content::Binary(&recovered))?;

    if recovered == message.as_bytes() {
        enter(sink, algorithm, Phase::Verified);
        Ok(TestResult::success(algorithm))
    } else {
        enter(sink, algorithm, Phase::Failed);
        Ok(TestResult::failed(algorithm, "recovered message differs"))
    }
}
