//! Targeted native compile phase

use tracing::info;

use stagehook_platform::CommandRunner;

use crate::config::BuildConfig;
use crate::error::StageError;

/// Build one target of the configured native tree.
///
/// The invocation is restricted to `target` rather than a full build;
/// everything the staging phase needs hangs off that one make target. Where
/// the outputs land inside the build tree is up to the toolchain; the
/// locator deals with that.
pub fn compile_target(
    config: &BuildConfig,
    runner: &dyn CommandRunner,
    target: &str,
) -> Result<(), StageError> {
    let args = vec![format!("-C{}", config.build_dir.display()), target.to_string()];

    info!(target, "compiling native target");

    let output = runner
        .run("make", &args, &config.source_dir)
        .map_err(|e| StageError::NativeBuild {
            target: target.to_string(),
            detail: e.to_string(),
        })?;

    if !output.success() {
        return Err(StageError::NativeBuild {
            target: target.to_string(),
            detail: match output.code {
                Some(code) => format!("make exited with status {code}"),
                None => "make was terminated by a signal".to_string(),
            },
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeRunner;
    use stagehook_platform::InterpreterVersion;
    use tempfile::TempDir;

    fn test_config(temp: &TempDir) -> BuildConfig {
        BuildConfig::new(
            temp.path().join("src"),
            temp.path().join("build"),
            temp.path().join("pkg"),
            InterpreterVersion::new(3, 9, 2),
        )
    }

    #[test]
    fn test_compile_invokes_make_restricted_to_target() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        let runner = FakeRunner::ok();

        compile_target(&config, &runner, "_ext").unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "make");
        assert!(calls[0].args[0].starts_with("-C"));
        assert_eq!(calls[0].args[1], "_ext");
    }

    #[test]
    fn test_compile_nonzero_exit_is_native_build_error() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        let runner = FakeRunner::failing("make");

        let err = compile_target(&config, &runner, "_ext").unwrap_err();

        assert!(matches!(err, StageError::NativeBuild { .. }));
        assert!(err.to_string().contains("_ext"));
    }
}
