//! Confirms the configured backend is the expected build before it is trusted.

use std::process::ExitCode;

use pqcheck_harness::logging::init_tracing;
use pqcheck_harness::HarnessConfig;
use tracing::{error, info};

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

    match config.check_provenance() {
        Ok(report) => {
            info!(
                origin = %report.origin,
                version = %report.version,
                algorithms = report.algorithms.len(),
                "backend provenance verified"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, backend = ?config.backend, "backend provenance check failed");
            ExitCode::FAILURE
        }
    }
}
