#![cfg(unix)]

use pqcheck_api::{AdapterError, Algorithm, Backend, Operation};
use pqcheck_backend::provenance::{check_executables, ProvenanceError};
use pqcheck_backend::ExecutableBackend;
use pqcheck_harness::{
    ArtifactStore, BackendSelection, ContentType, HarnessConfig, Orchestrator, Status, MESSAGE,
};
use pqcheck_tests::script::{
    exclusive, failing_body, install, install_catalog, rejecting_body, script_body,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn scripted_backend_passes_full_catalog() {
    let _guard = exclusive();
    let tmp = TempDir::new().unwrap();
    let config = HarnessConfig::default()
        .with_cache_root(tmp.path())
        .with_backend(BackendSelection::Executable);
    install_catalog(&config.bin_dir(), "0.0.1").unwrap();

    let backend = config.build_backend();
    let store = ArtifactStore::new(config.samples_dir());
    let summary = Orchestrator::new(backend.as_ref(), store.clone()).run(&mut ()).unwrap();

    assert_eq!(summary.passed(), 8, "{:?}", summary.results);
    let ct = fs::read(store.binary_path("ML-KEM-768", ContentType::Ciphertext)).unwrap();
    assert_eq!(ct, b"CT");
    let signed = fs::read(store.binary_path("Falcon-512", ContentType::EncryptedMessage)).unwrap();
    assert_eq!(signed, [b"SIG:", MESSAGE.as_bytes()].concat());

    let report = config.check_provenance().unwrap();
    assert_eq!(report.version, "0.0.1");
    assert_eq!(report.algorithms.len(), 8);
}

#[test]
fn failing_executable_reports_stderr() {
    let _guard = exclusive();
    let tmp = TempDir::new().unwrap();
    let bin_dir = tmp.path().join("bin");
    install(&bin_dir, Algorithm::MlDsa87, &failing_body("0.0.1", Operation::Sign)).unwrap();
    install(&bin_dir, Algorithm::MlKem512, &script_body("0.0.1")).unwrap();

    let backend = ExecutableBackend::new(&bin_dir);
    let store = ArtifactStore::new(tmp.path().join("samples"));
    let summary = Orchestrator::new(&backend, store)
        .with_catalog([Algorithm::MlKem512, Algorithm::MlDsa87])
        .run(&mut ())
        .unwrap();

    assert_eq!(summary.get(Algorithm::MlKem512).unwrap().status, Status::Success);
    let failed = summary.get(Algorithm::MlDsa87).unwrap();
    assert_eq!(failed.status, Status::Failed);
    assert!(failed.detail.as_deref().unwrap().contains("sign exploded"));

    let adapter = backend.signature(Algorithm::MlDsa87).ok().unwrap();
    let err = adapter.sign(b"m", b"SK").unwrap_err();
    assert!(matches!(err, AdapterError::Crypto { operation: Operation::Sign, .. }));
}

#[test]
fn early_exit_keeps_backend_diagnostic() {
    let _guard = exclusive();
    let tmp = TempDir::new().unwrap();
    let body = rejecting_body("0.0.1", Operation::Sign, "secret key rejected");
    install(tmp.path(), Algorithm::MlDsa44, &body).unwrap();

    let adapter = ExecutableBackend::new(tmp.path())
        .signature(Algorithm::MlDsa44)
        .ok()
        .unwrap();
    // larger than a pipe buffer, so the write cannot complete before the exit
    let err = adapter.sign(&vec![7u8; 200_000], b"SK").unwrap_err();
    match err {
        AdapterError::Crypto { operation, reason, .. } => {
            assert_eq!(operation, Operation::Sign);
            assert_eq!(reason, "secret key rejected");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_hex_output_is_a_crypto_error() {
    let _guard = exclusive();
    let tmp = TempDir::new().unwrap();
    let body = "#!/bin/sh\necho 'not hex at all'\n";
    install(tmp.path(), Algorithm::MlKem1024, body).unwrap();

    let kem = ExecutableBackend::new(tmp.path()).kem(Algorithm::MlKem1024).ok().unwrap();
    let err = kem.keypair().unwrap_err();
    assert!(err.to_string().contains("not hex"), "{err}");
}

#[test]
fn provenance_flags_missing_and_stale_executables() {
    let _guard = exclusive();
    let tmp = TempDir::new().unwrap();
    let bin_dir = tmp.path().join("bin");
    install_catalog(&bin_dir, "0.0.1").unwrap();
    fs::remove_file(bin_dir.join("ml-dsa-44")).unwrap();

    match check_executables(&bin_dir, "0.0.1").unwrap_err() {
        ProvenanceError::Missing(names) => assert_eq!(names, vec!["ml-dsa-44"]),
        other => panic!("unexpected error: {other}"),
    }

    install(&bin_dir, Algorithm::MlDsa44, &script_body("0.0.0")).unwrap();
    match check_executables(&bin_dir, "0.0.1").unwrap_err() {
        ProvenanceError::Version { subject, actual, .. } => {
            assert_eq!(subject, "ml-dsa-44");
            assert_eq!(actual, "0.0.0");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_bin_dir_fails_every_algorithm_under_isolation() {
    let _guard = exclusive();
    let tmp = TempDir::new().unwrap();
    let config = HarnessConfig::default()
        .with_cache_root(tmp.path())
        .with_backend(BackendSelection::Executable);

    let backend = config.build_backend();
    let summary = Orchestrator::new(backend.as_ref(), ArtifactStore::new(config.samples_dir()))
        .with_policy(config.failure_policy)
        .run(&mut ())
        .unwrap();

    assert_eq!(summary.failed(), 8);
    assert!(summary
        .results
        .iter()
        .all(|r| r.detail.as_deref().unwrap().contains("does not exist")));
    assert!(matches!(
        config.check_provenance().unwrap_err(),
        ProvenanceError::BinDir(_)
    ));
}
