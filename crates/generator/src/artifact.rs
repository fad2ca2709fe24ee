//! Classifies what the build left in the output directory

use kubegen_core::{FileSystem, GeneratorError, PackagingMode};
use std::path::Path;
use tracing::debug;

pub const RUNNER_SUFFIX: &str = "-runner";
pub const ARCHIVE_EXTENSION: &str = "jar";

pub struct ArtifactProbe<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> ArtifactProbe<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// `<base>` (no extension) means a native executable, `<base>.jar` a runnable archive.
    /// The executable wins when both are present.
    pub fn probe(
        &self,
        generator: &str,
        build_dir: &Path,
        base_name: &str,
    ) -> Result<PackagingMode, GeneratorError> {
        let executable = build_dir.join(base_name);
        if self.fs.is_file(&executable) {
            debug!(generator, artifact = ?executable, "Found native executable");
            return Ok(PackagingMode::Native);
        }

        let archive = build_dir.join(format!("{}.{}", base_name, ARCHIVE_EXTENSION));
        if self.fs.is_file(&archive) {
            debug!(generator, artifact = ?archive, "Found runnable archive");
            return Ok(PackagingMode::Runtime);
        }

        Err(GeneratorError::ArtifactNotFound {
            generator: generator.to_string(),
            build_dir: build_dir.to_path_buf(),
        })
    }

    /// Finds the runner base name by listing the build directory, for projects
    /// whose artifact id is not known to the caller. More than one distinct
    /// runner is an error; pass the artifact id to pick one.
    pub fn discover_base_name(
        &self,
        generator: &str,
        build_dir: &Path,
    ) -> Result<String, GeneratorError> {
        let names = self.fs.file_names(build_dir).map_err(|e| {
            debug!(error = %e, "Build directory not readable");
            GeneratorError::ArtifactNotFound {
                generator: generator.to_string(),
                build_dir: build_dir.to_path_buf(),
            }
        })?;

        let archive_suffix = format!("{}.{}", RUNNER_SUFFIX, ARCHIVE_EXTENSION);
        let mut bases: Vec<String> = names
            .iter()
            .filter_map(|name| {
                if name.ends_with(RUNNER_SUFFIX) {
                    Some(name.clone())
                } else if name.ends_with(&archive_suffix) {
                    name.strip_suffix(&format!(".{}", ARCHIVE_EXTENSION))
                        .map(str::to_string)
                } else {
                    None
                }
            })
            .collect();
        bases.sort();
        bases.dedup();

        match bases.len() {
            0 => Err(GeneratorError::ArtifactNotFound {
                generator: generator.to_string(),
                build_dir: build_dir.to_path_buf(),
            }),
            1 => Ok(bases.remove(0)),
            _ => Err(GeneratorError::AmbiguousArtifact {
                generator: generator.to_string(),
                build_dir: build_dir.to_path_buf(),
                candidates: bases,
            }),
        }
    }

    /// Base name from the artifact id when known, otherwise discovered on disk
    pub fn detect(
        &self,
        generator: &str,
        build_dir: &Path,
        artifact_id: Option<&str>,
    ) -> Result<PackagingMode, GeneratorError> {
        let base_name = match artifact_id {
            Some(id) => format!("{}{}", id, RUNNER_SUFFIX),
            None => self.discover_base_name(generator, build_dir)?,
        };
        self.probe(generator, build_dir, &base_name)
    }
}
