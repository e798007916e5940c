//! Testing utilities for the pqcheck harness
//!
//! - [`stub`]: deterministic in-memory adapters and a backend that can refuse
//!   algorithms or inject a failure into any operation.
//! - [`script`]: writes shell-script executables that speak the executable
//!   backend protocol (unix only).


use std::fs;
use std::path::Path;

/// Every `.txt` and `.bin` file name under one algorithm's artifact directory
pub fn artifact_files(algorithm_dir: &Path) -> (Vec<String>, Vec<String>) {
    let names = |dir: &Path, ext: &str| -> Vec<String> {
        let mut found: Vec<String> = fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .filter(|name| name.ends_with(ext))
                    .collect()
            })
            .unwrap_or_default();
        found.sort();
        found
    };
    (names(algorithm_dir, ".txt"), names(&algorithm_dir.join("bin"), ".bin"))
}
