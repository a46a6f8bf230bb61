//! External process invocation behind a substitutable runner

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::PlatformError;

/// Captured result of one external process invocation
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code, if the process terminated normally
    pub code: Option<i32>,
    /// Captured stdout, lossily decoded
    pub stdout: String,
    /// Captured stderr, lossily decoded
    pub stderr: String,
}

impl ProcessOutput {
    /// Whether the process exited with status zero
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external programs and reports structured results.
///
/// The build stages only ever reach the native toolchain through this trait,
/// so tests can substitute a scripted fake for cmake and make.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessOutput, PlatformError>;
}

/// Production runner backed by `std::process`.
///
/// Programs are resolved through PATH; output is captured rather than
/// inherited so failures can be reported with context.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessOutput, PlatformError> {
        debug!(program, ?args, cwd = %cwd.display(), "spawning process");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| PlatformError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let result = ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !result.success() && !result.stderr.is_empty() {
            debug!(stderr = %result.stderr, "process stderr");
        }

        Ok(result)
    }
}
