//! stagehook-core: build orchestration for the native extension package
//!
//! This crate drives the external native build system and stages its outputs
//! into the distributable package tree:
//! - `BuildConfig`: per-invocation configuration, passed explicitly to every stage
//! - `configure` / `compile_target`: CMake configuration and the targeted make build
//! - `locate`: first-existing-candidate resolution of build outputs
//! - `stage`: copying resolved artifacts into the package tree
//! - `pipeline::run`: strict configure → build → locate → stage sequencing

mod compile;
mod config;
mod configure;
mod error;
mod locate;
mod manifest;
mod pipeline;
mod stage;

#[cfg(test)]
mod testutil;

pub use compile::compile_target;
pub use config::BuildConfig;
pub use configure::configure;
pub use error::StageError;
pub use locate::{LocatedArtifact, locate};
pub use manifest::{Artifact, ArtifactKind, EXTENSION_TARGET, artifact_manifest};
pub use pipeline::{BuildReport, StageReport, run};
pub use stage::{StagedArtifact, stage};

/// Result type for build-stage operations
pub type Result<T> = std::result::Result<T, StageError>;
