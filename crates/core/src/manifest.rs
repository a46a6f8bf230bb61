//! The fixed artifact manifest staged into the package tree

use std::path::PathBuf;

use crate::config::BuildConfig;

/// Make target that produces the compiled extension.
pub const EXTENSION_TARGET: &str = "_ext";

/// Whether an artifact is a single file or a directory tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    File,
    Directory,
}

/// One build output to stage into the package tree
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Logical role, used in diagnostics ("binary extension", ...).
    pub role: &'static str,
    pub kind: ArtifactKind,
    /// Candidate source paths relative to the build directory, in priority order.
    pub candidates: Vec<PathBuf>,
    /// Destination relative to the package directory.
    pub dest: PathBuf,
}

/// The artifact set produced by a successful native build.
///
/// The list is fixed: the binding generator and the vendored data layout do
/// not vary at runtime. Only the extension's file name does (shared-library
/// suffixes differ per platform and toolchain), hence its candidate fallback.
pub fn artifact_manifest(config: &BuildConfig) -> Vec<Artifact> {
    let pkg = config.package_name();

    vec![
        Artifact {
            role: "binary extension",
            kind: ArtifactKind::File,
            candidates: vec![
                PathBuf::from(pkg).join("_ext.so"),
                PathBuf::from(pkg).join("_ext.dylib"),
            ],
            dest: PathBuf::from("_ext.so"),
        },
        Artifact {
            role: "generated module",
            kind: ArtifactKind::File,
            candidates: vec![PathBuf::from(pkg).join("gen.py")],
            dest: PathBuf::from("gen.py"),
        },
        Artifact {
            role: "tables data",
            kind: ArtifactKind::Directory,
            candidates: vec![PathBuf::from("extern/share/ext/tables")],
            dest: PathBuf::from("tables"),
        },
        Artifact {
            role: "spectra data",
            kind: ArtifactKind::Directory,
            candidates: vec![PathBuf::from("extern/share/ext/spectra")],
            dest: PathBuf::from("spectra"),
        },
    ]
}
