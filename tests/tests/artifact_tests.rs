use pqcheck_api::{Algorithm, CATALOG};
use pqcheck_harness::{ArtifactStore, ContentType, Orchestrator};
use pqcheck_tests::artifact_files;
use pqcheck_tests::stub::StubBackend;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn hex_files_decode_to_their_binary_twins() {
    let tmp = TempDir::new().unwrap();
    let store = ArtifactStore::new(tmp.path());
    Orchestrator::new(&StubBackend::new(), store.clone()).run(&mut ()).unwrap();

    for algorithm in CATALOG {
        let dir = store.algorithm_dir(algorithm.name());
        let (_, bin) = artifact_files(&dir);
        assert!(!bin.is_empty(), "{algorithm}");
        for name in bin {
            let stem = name.trim_end_matches(".bin");
            let raw = fs::read(dir.join("bin").join(&name)).unwrap();
            let txt = fs::read_to_string(dir.join(format!("{stem}.txt"))).unwrap();
            assert_eq!(hex::decode(&txt).unwrap(), raw, "{algorithm}/{stem}");
        }
    }
}

#[test]
fn rerun_overwrites_previous_artifacts() {
    let tmp = TempDir::new().unwrap();
    let store = ArtifactStore::new(tmp.path());
    let backend = StubBackend::new();

    Orchestrator::new(&backend, store.clone())
        .with_message("first run")
        .run(&mut ())
        .unwrap();
    let second = Orchestrator::new(&backend, store.clone())
        .with_message("second")
        .run(&mut ())
        .unwrap();
    assert_eq!(second.passed(), 8);

    let message = fs::read_to_string(store.text_path("ML-DSA-87", ContentType::Message)).unwrap();
    assert_eq!(message, "second");
    let recovered = fs::read(store.binary_path("ML-DSA-87", ContentType::DecryptedMessage)).unwrap();
    assert_eq!(recovered, b"second");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn signature_recovers_any_message(message in ".{0,64}") {
        let tmp = TempDir::new().unwrap();
        let store = ArtifactStore::new(tmp.path());
        let summary = Orchestrator::new(&StubBackend::new(), store.clone())
            .with_catalog([Algorithm::MlDsa44])
            .with_message(message.clone())
            .run(&mut ())
            .unwrap();

        prop_assert!(summary.results[0].is_success());
        let recovered = fs::read(store.binary_path("ML-DSA-44", ContentType::DecryptedMessage)).unwrap();
        prop_assert_eq!(recovered, message.into_bytes());
    }
}
