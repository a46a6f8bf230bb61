use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use stagehook_core::{BuildConfig, BuildReport};
use stagehook_platform::{InterpreterVersion, SystemRunner};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// stagehook - build and staging hook for the native extension package
///
/// Invoked by the packaging lifecycle: drives the CMake/make build of the
/// native library and stages its outputs into the package tree. Not a
/// general-purpose CLI; the flags exist so the lifecycle can point it at the
/// right directories.
#[derive(Parser)]
#[command(name = "stagehook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root of the native source tree
    #[arg(long, default_value = ".")]
    source_dir: PathBuf,

    /// Out-of-tree build directory (created if absent)
    #[arg(long, default_value = "build")]
    build_dir: PathBuf,

    /// Package directory that receives the staged artifacts
    #[arg(long, default_value = "pkg")]
    package_dir: PathBuf,

    /// Interpreter version to build against (probes python3 if omitted)
    #[arg(long, value_name = "MAJOR.MINOR.PATCH")]
    python_version: Option<InterpreterVersion>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();
    let term = Term::stderr();
    let runner = SystemRunner;

    let source_dir = match dunce::canonicalize(&cli.source_dir) {
        Ok(path) => path,
        Err(e) => {
            term.write_line(&format!(
                "{} source directory not found: {} ({})",
                style("error:").red().bold(),
                cli.source_dir.display(),
                e
            ))?;
            process::exit(1);
        }
    };

    let python = match cli.python_version {
        Some(version) => version,
        None => match InterpreterVersion::detect(&runner, &source_dir) {
            Ok(version) => version,
            Err(e) => {
                term.write_line(&format!(
                    "{} could not detect the host interpreter: {}",
                    style("error:").red().bold(),
                    e
                ))?;
                process::exit(1);
            }
        },
    };

    debug!(source_dir = %source_dir.display(), %python, "hook starting");

    term.write_line(&format!(
        "{} Building native extension (python {})",
        style("::").cyan().bold(),
        python
    ))?;

    let config = BuildConfig::new(source_dir, cli.build_dir, cli.package_dir, python);

    match stagehook_core::run(&config, &runner) {
        Ok(report) => print_report(&term, &report),
        Err(e) => {
            term.write_line(&format!("{} {}", style("error:").red().bold(), e))?;
            process::exit(1);
        }
    }
}

fn print_report(term: &Term, report: &BuildReport) -> Result<()> {
    for artifact in &report.artifacts {
        term.write_line(&format!(
            "  {} {} -> {}",
            style("staged").green(),
            artifact.source.display(),
            artifact.dest.display()
        ))?;
    }

    term.write_line(&format!(
        "{} {} artifacts staged",
        style("::").cyan().bold(),
        report.artifacts.len()
    ))?;

    Ok(())
}
