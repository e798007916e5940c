use pqcheck_api::{AdapterError, Algorithm, Operation, CATALOG};
use pqcheck_harness::{
    ArtifactStore, ContentType, FailurePolicy, HarnessError, Orchestrator, ProgressEvent, Status,
};
use pqcheck_tests::artifact_files;
use pqcheck_tests::stub::StubBackend;
use tempfile::TempDir;

#[test]
fn verify_fault_fails_only_that_algorithm() {
    let tmp = TempDir::new().unwrap();
    let store = ArtifactStore::new(tmp.path());
    let backend = StubBackend::new().with_fault(Algorithm::MlDsa65, Operation::Verify);
    let mut events = Vec::new();

    let summary = Orchestrator::new(&backend, store.clone()).run(&mut events).unwrap();

    assert_eq!(backend.constructed(), CATALOG.to_vec());
    for result in &summary.results {
        let expected = if result.algorithm == Algorithm::MlDsa65 {
            Status::Failed
        } else {
            Status::Success
        };
        assert_eq!(result.status, expected, "{}", result.algorithm);
    }
    assert_eq!(
        events.last(),
        Some(&ProgressEvent::RunFinished { exercised: 8, passed: 7, failed: 1 })
    );

    // signed blob persisted, recovered message never produced
    assert!(store.binary_path("ML-DSA-65", ContentType::EncryptedMessage).exists());
    assert!(!store.binary_path("ML-DSA-65", ContentType::DecryptedMessage).exists());
}

#[test]
fn signature_run_writes_five_text_and_four_binary_files() {
    let tmp = TempDir::new().unwrap();
    let store = ArtifactStore::new(tmp.path());

    Orchestrator::new(&StubBackend::new(), store.clone())
        .with_catalog([Algorithm::Falcon1024])
        .run(&mut ())
        .unwrap();

    let (txt, bin) = artifact_files(&store.algorithm_dir("Falcon-1024"));
    assert_eq!(txt.len(), 5);
    assert_eq!(bin.len(), 4);
    assert!(txt.contains(&"encrypted_message.txt".to_string()));
    assert!(bin.contains(&"decrypted_message.bin".to_string()));
}

#[test]
fn refused_construction_is_isolated() {
    let tmp = TempDir::new().unwrap();
    let backend = StubBackend::new().refusing(Algorithm::Falcon512);

    let summary = Orchestrator::new(&backend, ArtifactStore::new(tmp.path()))
        .run(&mut ())
        .unwrap();

    let falcon = summary.get(Algorithm::Falcon512).unwrap();
    assert_eq!(falcon.status, Status::Failed);
    assert!(falcon.detail.as_deref().unwrap().contains("refused"));
    assert!(summary.get(Algorithm::Falcon1024).unwrap().is_success());
    // nothing is written for an adapter that was never built
    assert!(!tmp.path().join("Falcon-512").exists());
}

#[test]
fn abort_policy_stops_at_signature_verify_fault() {
    let tmp = TempDir::new().unwrap();
    let backend = StubBackend::new().with_fault(Algorithm::MlDsa65, Operation::Verify);

    let err = Orchestrator::new(&backend, ArtifactStore::new(tmp.path()))
        .with_policy(FailurePolicy::Abort)
        .run(&mut ())
        .unwrap_err();

    match err {
        HarnessError::Adapter(AdapterError::Crypto { algorithm, operation, .. }) => {
            assert_eq!(algorithm, Algorithm::MlDsa65);
            assert_eq!(operation, Operation::Verify);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(backend.constructed(), CATALOG[..5].to_vec());
    assert_eq!(backend.constructed().last(), Some(&Algorithm::MlDsa65));
    for never_ran in ["ML-DSA-87", "Falcon-512", "Falcon-1024"] {
        assert!(!tmp.path().join(never_ran).exists(), "{never_ran}");
    }
}
