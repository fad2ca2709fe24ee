use crate::platform::{DeploymentTarget, PackagingMode};
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced while resolving the base image for a generator
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(
        "No packaged artifact found for generator '{generator}' in {build_dir:?}. \
         Build the application first or set the nativeImage flag explicitly"
    )]
    ArtifactNotFound { generator: String, build_dir: PathBuf },

    #[error(
        "Several runner artifacts for generator '{generator}' in {build_dir:?}: {candidates:?}. \
         Pass the artifact id to choose one"
    )]
    AmbiguousArtifact {
        generator: String,
        build_dir: PathBuf,
        candidates: Vec<String>,
    },

    #[error(
        "No default image registered under '{key}' (generator '{generator}', mode {mode}, target {target})"
    )]
    DefaultImageMissing {
        generator: String,
        key: String,
        mode: PackagingMode,
        target: DeploymentTarget,
    },

    #[error("Failed to load default image table from {path:?}: {source}")]
    Lookup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// Name of the generator the failure belongs to, when known
    pub fn generator(&self) -> Option<&str> {
        match self {
            GeneratorError::ArtifactNotFound { generator, .. }
            | GeneratorError::AmbiguousArtifact { generator, .. }
            | GeneratorError::DefaultImageMissing { generator, .. } => Some(generator),
            GeneratorError::Lookup { .. } => None,
        }
    }
}
