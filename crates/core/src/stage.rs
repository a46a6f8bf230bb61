//! Copying resolved artifacts into the package tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;
use walkdir::WalkDir;

use crate::config::BuildConfig;
use crate::error::StageError;
use crate::locate::LocatedArtifact;
use crate::manifest::ArtifactKind;

/// Record of one artifact copied into the package tree
#[derive(Debug, Clone, Serialize)]
pub struct StagedArtifact {
    pub role: String,
    /// The winning candidate the copy was made from.
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Copy one resolved artifact to its destination in the package tree.
///
/// File artifacts are copied as a single file; directory artifacts are copied
/// recursively, preserving their internal structure. Existing destinations
/// are overwritten. Staging is not transactional: a failure partway through a
/// run leaves earlier artifacts in place.
pub fn stage(config: &BuildConfig, located: &LocatedArtifact) -> Result<StagedArtifact, StageError> {
    let dest = config.package_dir.join(&located.artifact.dest);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| StageError::Staging {
            dest: dest.clone(),
            source,
        })?;
    }

    let copied = match located.artifact.kind {
        ArtifactKind::File => fs::copy(&located.source, &dest).map(|_| ()),
        ArtifactKind::Directory => copy_dir_recursive(&located.source, &dest),
    };

    copied.map_err(|source| StageError::Staging {
        dest: dest.clone(),
        source,
    })?;

    info!(role = located.artifact.role, dest = %dest.display(), "staged artifact");

    Ok(StagedArtifact {
        role: located.artifact.role.to_string(),
        source: located.source.clone(),
        dest,
    })
}

/// Recursively copy `src` into `dest`, overwriting existing files.
fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(io::Error::other)?;
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
