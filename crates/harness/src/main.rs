use std::process::ExitCode;

use pqcheck_harness::logging::init_tracing;
use pqcheck_harness::{ArtifactStore, HarnessConfig, Orchestrator, TracingSink};
use tracing::error;

fn main() -> ExitCode {
    init_tracing();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match HarnessConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                error!(error = %err, "cannot load configuration");
                return ExitCode::FAILURE;
            }
        },
        None => HarnessConfig::default(),
    };

    let backend = config.build_backend();
    let orchestrator = Orchestrator::new(backend.as_ref(), ArtifactStore::new(config.samples_dir()))
        .with_policy(config.failure_policy);

    match orchestrator.run(&mut TracingSink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run aborted");
            ExitCode::FAILURE
        }
    }
}
