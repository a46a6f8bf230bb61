//! Error types for stagehook-platform

use thiserror::Error;

/// Errors that can occur in host-level operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Interpreter probe failed: {0}")]
    InterpreterProbe(String),

    #[error("Invalid interpreter version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),
}
