//! Strict configure → build → locate → stage sequencing

use std::fs;
use std::io;

use serde::Serialize;
use tracing::{info, warn};

use stagehook_platform::{CommandRunner, InterpreterVersion};

use crate::compile::compile_target;
use crate::config::BuildConfig;
use crate::configure::configure;
use crate::error::StageError;
use crate::locate::locate;
use crate::manifest::{EXTENSION_TARGET, artifact_manifest};
use crate::stage::{StagedArtifact, stage};

/// File name of the diagnostics report written into the build directory.
const REPORT_FILENAME: &str = "stage-report.json";

/// Outcome of one pipeline stage
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub stage: &'static str,
    pub success: bool,
    pub message: String,
}

/// Full record of a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Interpreter version the build was configured against.
    pub python: InterpreterVersion,
    pub stages: Vec<StageReport>,
    /// Staged artifacts with the candidate that won for each.
    pub artifacts: Vec<StagedArtifact>,
}

impl BuildReport {
    fn new(config: &BuildConfig) -> Self {
        Self {
            python: config.python,
            stages: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    fn record(&mut self, stage: &'static str, message: impl Into<String>) {
        self.stages.push(StageReport {
            stage,
            success: true,
            message: message.into(),
        });
    }
}

/// Run the full pipeline: configure, build, locate, stage.
///
/// Stages run strictly in this order; the first failure aborts the run and
/// propagates to the caller, so a configuration failure never reaches the
/// compile phase and a missing artifact never reaches staging. All four
/// artifacts are located before any is copied. On success a diagnostics
/// report recording the winning candidate paths is written into the build
/// directory.
pub fn run(config: &BuildConfig, runner: &dyn CommandRunner) -> Result<BuildReport, StageError> {
    let mut report = BuildReport::new(config);

    configure(config, runner)?;
    report.record("configure", "native build scripts generated");

    compile_target(config, runner, EXTENSION_TARGET)?;
    report.record("build", format!("target '{EXTENSION_TARGET}' built"));

    let mut located = Vec::new();
    for artifact in artifact_manifest(config) {
        located.push(locate(config, &artifact)?);
    }
    report.record("locate", format!("{} artifacts resolved", located.len()));

    for artifact in &located {
        report.artifacts.push(stage(config, artifact)?);
    }
    report.record("stage", format!("{} artifacts staged", report.artifacts.len()));

    write_report(config, &report);

    info!(artifacts = report.artifacts.len(), "build hook finished");
    Ok(report)
}

/// Best-effort diagnostics dump; never fails a run that already staged.
fn write_report(config: &BuildConfig, report: &BuildReport) {
    let path = config.build_dir.join(REPORT_FILENAME);
    let written = serde_json::to_string_pretty(report)
        .map_err(io::Error::other)
        .and_then(|json| fs::write(&path, json));

    if let Err(e) = written {
        warn!(path = %path.display(), error = %e, "could not write stage report");
    }
}
