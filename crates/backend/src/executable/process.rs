//! One backend executable and the hex line protocol spoken over its pipes
//!
//! Invocation is `<exe> <operation>`. Inputs are written to stdin as lowercase
//! hex, one value per line, then stdin is closed. On success the child prints
//! the expected number of hex lines on stdout and exits with status 0; anything
//! else is reported as a crypto failure carrying the child's stderr. The child
//! is always reaped, and a non-zero exit takes precedence over a broken stdin.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use pqcheck_api::{AdapterError, Algorithm, Operation, Result};
use tracing::debug;
use zeroize::Zeroizing;

#[derive(Debug, Clone)]
pub(crate) struct Executable {
    algorithm: Algorithm,
    path: PathBuf,
}

impl Executable {
    pub(crate) fn new(algorithm: Algorithm, path: PathBuf) -> Self {
        Self { algorithm, path }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Run one operation and decode exactly `outputs` hex values from stdout.
    pub(crate) fn invoke(
        &self,
        operation: Operation,
        inputs: &[&[u8]],
        outputs: usize,
    ) -> Result<Vec<Vec<u8>>> {
        debug!(
            algorithm = %self.algorithm,
            operation = %operation,
            executable = %self.path.display(),
            "invoking backend executable"
        );

        let fail = |reason: String| AdapterError::crypto(self.algorithm, operation, reason);

        let mut child = Command::new(&self.path)
            .arg(operation.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| fail(format!("cannot spawn {}: {}", self.path.display(), e)))?;

        // Secret keys travel through this buffer
        let mut payload = Zeroizing::new(String::new());
        for input in inputs {
            payload.push_str(&hex::encode(input));
            payload.push('\n');
        }
        // The child may exit, or fill stdout, before draining stdin
        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || -> io::Result<()> {
                if payload.is_empty() {
                    return Ok(());
                }
                stdin.write_all(payload.as_bytes())
            })
        });

        let output = child
            .wait_with_output()
            .map_err(|e| fail(format!("cannot collect backend output: {}", e)))?;
        let written = match writer.map(|handle| handle.join()) {
            None | Some(Ok(Ok(()))) => Ok(()),
            Some(Ok(Err(e))) => Err(format!("cannot write to backend: {}", e)),
            Some(Err(_)) => Err("backend input writer panicked".to_string()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(fail(if stderr.is_empty() {
                format!("backend exited with {}", output.status)
            } else {
                stderr
            }));
        }
        written.map_err(&fail)?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| fail("backend output is not UTF-8".into()))?;
        let values = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(hex::decode)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| fail(format!("backend output is not hex: {}", e)))?;

        if values.len() != outputs {
            return Err(fail(format!(
                "expected {} output values, got {}",
                outputs,
                values.len()
            )));
        }
        Ok(values)
    }

    /// Ask the executable for its version string (`<exe> --version`).
    pub(crate) fn version(&self) -> Result<String> {
        let output = Command::new(&self.path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                AdapterError::construction(
                    self.algorithm,
                    format!("cannot run {} --version: {}", self.path.display(), e),
                )
            })?;
        if !output.status.success() {
            return Err(AdapterError::construction(
                self.algorithm,
                format!("{} --version exited with {}", self.path.display(), output.status),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
