//! First-existing-candidate resolution of build outputs
//!
//! Binding toolchains emit platform- and version-dependent file names, so
//! each artifact carries an ordered candidate list instead of one hard-coded
//! path. The first candidate present on disk wins; later candidates are
//! ignored even if they also exist.

use std::path::PathBuf;

use tracing::debug;

use crate::config::BuildConfig;
use crate::error::StageError;
use crate::manifest::Artifact;

/// An artifact resolved to a concrete path in the build tree
#[derive(Debug, Clone)]
pub struct LocatedArtifact {
    pub artifact: Artifact,
    /// The candidate that won, as a full path under the build directory.
    pub source: PathBuf,
}

/// Resolve an artifact to the first candidate that exists on disk.
pub fn locate(config: &BuildConfig, artifact: &Artifact) -> Result<LocatedArtifact, StageError> {
    for candidate in &artifact.candidates {
        let path = config.build_dir.join(candidate);
        if path.exists() {
            debug!(role = artifact.role, source = %path.display(), "located artifact");
            return Ok(LocatedArtifact {
                artifact: artifact.clone(),
                source: path,
            });
        }
        debug!(role = artifact.role, candidate = %path.display(), "candidate not present");
    }

    Err(StageError::MissingArtifact {
        role: artifact.role.to_string(),
        build_dir: config.build_dir.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ArtifactKind;
    use stagehook_platform::InterpreterVersion;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(temp: &TempDir) -> BuildConfig {
        BuildConfig::new(
            temp.path().join("src"),
            temp.path().join("build"),
            temp.path().join("pkg"),
            InterpreterVersion::new(3, 9, 2),
        )
    }

    fn extension_artifact() -> Artifact {
        Artifact {
            role: "binary extension",
            kind: ArtifactKind::File,
            candidates: vec![PathBuf::from("pkg/_ext.so"), PathBuf::from("pkg/_ext.dylib")],
            dest: PathBuf::from("_ext.so"),
        }
    }

    fn touch(path: &std::path::Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_locate_picks_primary_candidate() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        touch(&config.build_dir.join("pkg/_ext.so"));

        let located = locate(&config, &extension_artifact()).unwrap();

        assert_eq!(located.source, config.build_dir.join("pkg/_ext.so"));
    }

    #[test]
    fn test_locate_falls_back_when_primary_absent() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        touch(&config.build_dir.join("pkg/_ext.dylib"));

        let located = locate(&config, &extension_artifact()).unwrap();

        assert_eq!(located.source, config.build_dir.join("pkg/_ext.dylib"));
    }

    #[test]
    fn test_locate_prefers_primary_when_both_exist() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        touch(&config.build_dir.join("pkg/_ext.so"));
        touch(&config.build_dir.join("pkg/_ext.dylib"));

        let located = locate(&config, &extension_artifact()).unwrap();

        assert_eq!(located.source, config.build_dir.join("pkg/_ext.so"));
    }

    #[test]
    fn test_locate_missing_everywhere_names_the_role() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        fs::create_dir_all(&config.build_dir).unwrap();

        let err = locate(&config, &extension_artifact()).unwrap_err();

        match err {
            StageError::MissingArtifact { ref role, .. } => {
                assert_eq!(role, "binary extension");
            }
            other => panic!("expected MissingArtifact, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_finds_directory_candidates() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        fs::create_dir_all(config.build_dir.join("extern/share/ext/tables")).unwrap();

        let artifact = Artifact {
            role: "tables data",
            kind: ArtifactKind::Directory,
            candidates: vec![PathBuf::from("extern/share/ext/tables")],
            dest: PathBuf::from("tables"),
        };

        let located = locate(&config, &artifact).unwrap();
        assert!(located.source.is_dir());
    }
}
