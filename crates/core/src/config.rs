//! Per-invocation build configuration

use std::path::PathBuf;

use stagehook_platform::InterpreterVersion;

/// Configuration for one run of the build hook
///
/// Constructed once per invocation and passed explicitly to every stage, so
/// nothing in the pipeline depends on an ambient working directory. Two runs
/// with different configs never share state.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Root of the native source tree handed to CMake.
    pub source_dir: PathBuf,
    /// Out-of-tree build directory (created if absent).
    pub build_dir: PathBuf,
    /// Package directory that receives the staged artifacts.
    pub package_dir: PathBuf,
    /// Host interpreter version, forwarded to CMake as MAJOR.MINOR.PATCH.
    pub python: InterpreterVersion,
}

impl BuildConfig {
    /// Create a build configuration
    pub fn new(
        source_dir: PathBuf,
        build_dir: PathBuf,
        package_dir: PathBuf,
        python: InterpreterVersion,
    ) -> Self {
        Self {
            source_dir,
            build_dir,
            package_dir,
            python,
        }
    }

    /// File name of the package directory (e.g. "pkg").
    ///
    /// The native build tree mirrors this name for the binding outputs, so
    /// the artifact candidates are derived from it.
    pub fn package_name(&self) -> &str {
        self.package_dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("pkg")
    }
}
