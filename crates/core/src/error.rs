//! Error types for stagehook-core

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort the build pipeline
///
/// Every variant is fatal: the pipeline stops at the first error and no stage
/// is retried. A toolchain executable missing from PATH surfaces through the
/// same variant as that toolchain failing.
#[derive(Debug, Error)]
pub enum StageError {
    /// The native configuration phase failed or could not be started.
    #[error(
        "could not run the CMake configuration for '{source_dir}' ({detail}); make sure CMake is installed"
    )]
    Configuration { source_dir: PathBuf, detail: String },

    /// The targeted native compile failed.
    #[error("native build of target '{target}' failed: {detail}")]
    NativeBuild { target: String, detail: String },

    /// No candidate path for an artifact exists in the build tree.
    #[error("missing build artifact '{role}': no candidate path exists under '{build_dir}'")]
    MissingArtifact { role: String, build_dir: PathBuf },

    /// Copying an artifact into the package tree failed.
    #[error("failed to stage '{dest}': {source}")]
    Staging {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
