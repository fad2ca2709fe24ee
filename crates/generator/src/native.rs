use crate::artifact::ArtifactProbe;
use crate::context::GeneratorConfig;
use kubegen_core::{FileSystem, GeneratorError, PackagingMode};
use tracing::debug;

pub const NATIVE_IMAGE_KEY: &str = "nativeImage";

/// An explicit flag always wins; the probe only runs when no flag is set.
pub fn decide_packaging_mode<F>(
    explicit: Option<bool>,
    probe: F,
) -> Result<PackagingMode, GeneratorError>
where
    F: FnOnce() -> Result<PackagingMode, GeneratorError>,
{
    match explicit {
        Some(native) => Ok(PackagingMode::from(native)),
        None => probe(),
    }
}

pub struct NativeModeResolver<'a> {
    probe: ArtifactProbe<'a>,
}

impl<'a> NativeModeResolver<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            probe: ArtifactProbe::new(fs),
        }
    }

    pub fn resolve(&self, config: &GeneratorConfig<'_>) -> Result<PackagingMode, GeneratorError> {
        let explicit = config.get_bool(NATIVE_IMAGE_KEY);
        let context = config.context();

        let mode = decide_packaging_mode(explicit, || {
            self.probe.detect(
                config.generator(),
                context.build_dir(),
                context.artifact_id.as_deref(),
            )
        })?;

        debug!(
            generator = config.generator(),
            explicit = ?explicit,
            %mode,
            "Packaging mode decided"
        );
        Ok(mode)
    }
}
