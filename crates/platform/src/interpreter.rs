//! Host interpreter version probing

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::PlatformError;
use crate::process::CommandRunner;

/// One-liner handed to the interpreter to print its version triple.
const PROBE_SNIPPET: &str = "import sys; print('%d.%d.%d' % sys.version_info[:3])";

/// Host interpreter version as a major.minor.patch triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterpreterVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl InterpreterVersion {
    /// Create a version triple
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Probe the host interpreter for its version.
    ///
    /// Runs `python3` through the given runner and parses the triple it
    /// prints. The packaging lifecycle usually knows its own interpreter and
    /// passes the version explicitly; this is the fallback for direct runs.
    pub fn detect(runner: &dyn CommandRunner, cwd: &Path) -> Result<Self, PlatformError> {
        let args = vec!["-c".to_string(), PROBE_SNIPPET.to_string()];
        let output = runner.run("python3", &args, cwd)?;

        if !output.success() {
            return Err(PlatformError::InterpreterProbe(format!(
                "python3 exited with {:?}: {}",
                output.code,
                output.stderr.trim()
            )));
        }

        let version: Self = output.stdout.trim().parse()?;
        debug!(%version, "detected host interpreter");
        Ok(version)
    }
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for InterpreterVersion {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(PlatformError::InvalidVersion(s.to_string()));
        }

        let field = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| PlatformError::InvalidVersion(s.to_string()))
        };

        Ok(Self {
            major: field(parts[0])?,
            minor: field(parts[1])?,
            patch: field(parts[2])?,
        })
    }
}
