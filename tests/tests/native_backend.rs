use pqcheck_api::{Algorithm, Backend, CATALOG};
use pqcheck_backend::native::{NativeBackend, VERSION};
use pqcheck_harness::{ArtifactStore, ContentType, HarnessConfig, Orchestrator, ProgressEvent};
use std::fs;
use tempfile::TempDir;

#[test]
fn native_backend_passes_every_algorithm() {
    let tmp = TempDir::new().unwrap();
    let store = ArtifactStore::new(tmp.path());
    let mut events = Vec::new();

    let summary = Orchestrator::new(&NativeBackend, store.clone()).run(&mut events).unwrap();

    assert_eq!(summary.exercised(), 8);
    assert_eq!(summary.passed(), 8, "{:?}", summary.results);
    let order: Vec<Algorithm> = summary.results.iter().map(|r| r.algorithm).collect();
    assert_eq!(order, CATALOG.to_vec());

    // FIPS 203 sizes for ML-KEM-768
    assert!(events.contains(&ProgressEvent::KeyMaterial {
        algorithm: Algorithm::MlKem768,
        public_key_len: 1184,
        secret_key_len: 2400,
        payload_len: 1088,
    }));
    let ss1 = fs::read(store.binary_path("ML-KEM-768", ContentType::SharedSecret1)).unwrap();
    let ss2 = fs::read(store.binary_path("ML-KEM-768", ContentType::SharedSecret2)).unwrap();
    assert_eq!(ss1.len(), 32);
    assert_eq!(ss1, ss2);
}

#[test]
fn native_signature_recovers_message() {
    let backend = NativeBackend;
    let adapter = backend.signature(Algorithm::MlDsa65).ok().unwrap();
    let keys = adapter.keypair().unwrap();
    let signed = adapter.sign(b"attack at dawn", keys.secret_key()).unwrap();
    assert_eq!(adapter.verify(&signed, keys.public_key()).unwrap(), b"attack at dawn");
}

#[test]
fn default_config_provenance_matches_native_build() {
    let report = HarnessConfig::default().check_provenance().unwrap();
    assert_eq!(report.version, VERSION);
}
