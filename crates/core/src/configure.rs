//! CMake configuration phase

use std::fs;

use tracing::info;

use stagehook_platform::CommandRunner;

use crate::config::BuildConfig;
use crate::error::StageError;

/// Run the CMake configuration phase.
///
/// Creates the build directory if absent, then generates the native build
/// scripts into it. The interpreter version is forwarded as a CMake variable
/// so the binding layer builds against the right Python.
pub fn configure(config: &BuildConfig, runner: &dyn CommandRunner) -> Result<(), StageError> {
    fs::create_dir_all(&config.build_dir).map_err(|e| StageError::Configuration {
        source_dir: config.source_dir.clone(),
        detail: format!("could not create build directory: {e}"),
    })?;

    let args = vec![
        format!("-H{}", config.source_dir.display()),
        format!("-B{}", config.build_dir.display()),
        format!("-DPYTHON_VERSION={}", config.python),
    ];

    info!(
        python = %config.python,
        build_dir = %config.build_dir.display(),
        "configuring native build"
    );

    let output = runner
        .run("cmake", &args, &config.source_dir)
        .map_err(|e| StageError::Configuration {
            source_dir: config.source_dir.clone(),
            detail: e.to_string(),
        })?;

    if !output.success() {
        return Err(StageError::Configuration {
            source_dir: config.source_dir.clone(),
            detail: match output.code {
                Some(code) => format!("cmake exited with status {code}"),
                None => "cmake was terminated by a signal".to_string(),
            },
        });
    }

    Ok(())
}
